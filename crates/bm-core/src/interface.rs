//! Collaborators the game logic talks to
//!
//! The core never touches the terminal. Time, output and input all go
//! through these traits so a session can be driven by a real terminal or by
//! a scripted frontend.

use std::time::{Duration, Instant};

use crate::error::InputError;

/// Monotonic time source
pub trait Clock {
    /// Time elapsed since some fixed origin. Never decreases.
    fn now(&self) -> Duration;
}

/// Clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Line oriented output
pub trait LineRenderer {
    /// Print a line, optionally centered in the terminal
    fn print_line(&mut self, text: &str, centered: bool);

    fn blank_line(&mut self) {
        self.print_line("", false);
    }

    /// Clear the screen
    fn clear(&mut self);

    /// Block for a while. Used for pacing, and to charge for a SCAN.
    fn pause(&mut self, duration: Duration);

    /// Tell the player to press ENTER and wait until they do
    fn await_player(&mut self, centered: bool) -> Result<(), InputError>;
}

/// Picks one of a set of single character options
pub trait OptionSelector {
    /// Block until the player enters one of `options`
    ///
    /// Input is matched case-insensitively and invalid input is reprompted.
    /// Returns `None` when `options` is empty.
    fn choose(&mut self, options: &[char]) -> Result<Option<char>, InputError>;
}

/// Everything a session needs to show output and read choices
pub trait Frontend: LineRenderer + OptionSelector {}

impl<T: LineRenderer + OptionSelector> Frontend for T {}

/// Format the remaining time shown above menus
pub fn format_time_left(deadline: Duration, now: Duration) -> String {
    format!(
        "Time left: {:.1} second(s)",
        deadline.saturating_sub(now).as_secs_f64()
    )
}
