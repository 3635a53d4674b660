//! Scripted frontend
//!
//! Replays a fixed list of key presses, records everything printed and
//! advances a manual clock on every pause instead of sleeping. Used by the
//! tests, and usable by bots.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::SELECTOR_OPTIONS_MAX_COUNT;
use crate::error::InputError;
use crate::interface::{Clock, LineRenderer, OptionSelector};

/// Clock that only moves when told to
///
/// Clones share the same time, so a frontend and the session it drives can
/// see the same clock.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[derive(Debug, Default)]
pub struct HeadlessFrontend {
    keys: VecDeque<char>,
    lines: Vec<String>,
    clock: ManualClock,
    clears: usize,
}

impl HeadlessFrontend {
    pub fn new(keys: impl IntoIterator<Item = char>) -> Self {
        Self::with_clock(keys, ManualClock::new())
    }

    pub fn with_clock(keys: impl IntoIterator<Item = char>, clock: ManualClock) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            lines: Vec::new(),
            clock,
            clears: 0,
        }
    }

    /// Handle to the clock advanced by pauses
    pub fn clock(&self) -> ManualClock {
        self.clock.clone()
    }

    /// Queue more key presses
    pub fn push_keys(&mut self, keys: impl IntoIterator<Item = char>) {
        self.keys.extend(keys);
    }

    /// Keys not consumed yet
    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    /// Every line printed so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any printed line contains `text`
    pub fn printed(&self, text: &str) -> bool {
        self.lines.iter().any(|line| line.contains(text))
    }

    /// Number of times the screen was cleared
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Drop the recorded output
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl LineRenderer for HeadlessFrontend {
    fn print_line(&mut self, text: &str, _centered: bool) {
        self.lines.push(text.to_string());
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn pause(&mut self, duration: Duration) {
        self.clock.advance(duration);
    }

    fn await_player(&mut self, _centered: bool) -> Result<(), InputError> {
        self.lines.push("Press ENTER to continue".to_string());
        Ok(())
    }
}

impl OptionSelector for HeadlessFrontend {
    fn choose(&mut self, options: &[char]) -> Result<Option<char>, InputError> {
        assert!(options.len() <= SELECTOR_OPTIONS_MAX_COUNT);
        if options.is_empty() {
            return Ok(None);
        }

        loop {
            let key = self.keys.pop_front().ok_or(InputError::Eof)?;
            let key = key.to_ascii_lowercase();

            if options.contains(&key) {
                return Ok(Some(key));
            }
            self.lines.push(format!("ERROR: invalid option '{key}'!"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_skips_invalid_keys() {
        let mut frontend = HeadlessFrontend::new(['z', 'X']);
        assert_eq!(frontend.choose(&['x', 'n']).unwrap(), Some('x'));
        assert!(frontend.printed("ERROR: invalid option 'z'!"));
    }

    #[test]
    fn test_choose_empty_options() {
        let mut frontend = HeadlessFrontend::new(['x']);
        assert_eq!(frontend.choose(&[]).unwrap(), None);
        assert_eq!(frontend.pending_keys(), 1);
    }

    #[test]
    fn test_choose_runs_out_of_input() {
        let mut frontend = HeadlessFrontend::default();
        assert!(matches!(frontend.choose(&['x']), Err(InputError::Eof)));
    }

    #[test]
    fn test_pause_advances_shared_clock() {
        let mut frontend = HeadlessFrontend::default();
        let clock = frontend.clock();
        frontend.pause(Duration::from_millis(800));
        frontend.pause(Duration::from_millis(200));
        assert_eq!(clock.now(), Duration::from_secs(1));
    }
}
