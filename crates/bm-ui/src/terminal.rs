//! Line printer and option selector over a real terminal

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::thread;
use std::time::Duration;

use bm_core::SELECTOR_OPTIONS_MAX_COUNT;
use bm_core::config::GameConfig;
use bm_core::error::InputError;
use bm_core::interface::{LineRenderer, OptionSelector};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::console::{Console, centre_padding, split_to_width};

/// Prints with the slow-scroll effect and reads choices line by line
///
/// Generic over its streams so it can be exercised with in-memory buffers.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    console: Console,
    print_delay: Duration,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// Terminal over the process's stdin and stdout
    pub fn stdio(console: Console, config: &GameConfig) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), console, config)
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, console: Console, config: &GameConfig) -> Self {
        Self {
            input,
            output,
            console,
            print_delay: config.print_delay,
        }
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn print_delay(&self) -> Duration {
        self.print_delay
    }

    /// The output stream, mainly for inspecting buffers in tests
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Write text as is, without splitting, centring or a trailing newline
    pub fn write_raw(&mut self, text: &str) {
        let result = self
            .output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush());
        if let Err(e) = result {
            log::debug!("failed to write to terminal: {e}");
        }
    }

    /// Print `EXITing...` one dot at a time
    pub fn play_exit_sequence(&mut self) {
        self.write_raw("EXITing");
        for dot in [".", ".", ".\n"] {
            self.pause(self.print_delay);
            self.write_raw(dot);
        }
    }

    /// Read one line. Hitting end of input is an error since the game
    /// cannot continue without the player.
    ///
    /// Bytes that are not UTF-8 decode to replacement characters, which the
    /// selector rejects like any other invalid option.
    fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(InputError::Eof);
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }
}

impl<R: BufRead, W: Write> LineRenderer for Terminal<R, W> {
    fn print_line(&mut self, text: &str, centered: bool) {
        let width = self.console.size().width as usize;

        for piece in split_to_width(text, width) {
            let mut line = String::with_capacity(width + 1);
            if centered {
                let padding = centre_padding(piece.chars().count(), width);
                line.extend(std::iter::repeat_n(' ', padding));
            }
            line.push_str(&piece);
            line.push('\n');

            self.write_raw(&line);
            self.pause(self.print_delay);
        }
    }

    fn clear(&mut self) {
        if let Err(e) = execute!(self.output, Clear(ClearType::All), MoveTo(0, 0)) {
            log::debug!("failed to clear terminal: {e}");
        }
    }

    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }

    fn await_player(&mut self, centered: bool) -> Result<(), InputError> {
        self.print_line("Press ENTER to continue", centered);
        self.read_line().map(|_| ())
    }
}

impl<R: BufRead, W: Write> OptionSelector for Terminal<R, W> {
    fn choose(&mut self, options: &[char]) -> Result<Option<char>, InputError> {
        assert!(
            options.len() <= SELECTOR_OPTIONS_MAX_COUNT,
            "too many menu options: {}",
            options.len()
        );
        if options.is_empty() {
            return Ok(None);
        }

        loop {
            let line = self.read_line()?;
            let Some(selection) = line.chars().find(|c| !c.is_whitespace()) else {
                continue;
            };
            let selection = selection.to_ascii_lowercase();

            if options.contains(&selection) {
                return Ok(Some(selection));
            }
            self.write_raw(&format!("ERROR: invalid option '{selection}'!\n"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::TerminalSize;
    use std::io::Cursor;

    fn terminal(input: &str, width: u16) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        let console = Console::fixed(TerminalSize { width, height: 24 });
        let config = GameConfig::default().without_delays();
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), console, &config)
    }

    fn written(terminal: &Terminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(terminal.output()).into_owned()
    }

    #[test]
    fn test_print_line_left_aligned() {
        let mut term = terminal("", 20);
        term.print_line("hello", false);
        term.blank_line();
        assert_eq!(written(&term), "hello\n\n");
    }

    #[test]
    fn test_print_line_centered() {
        let mut term = terminal("", 11);
        term.print_line("abc", true);
        assert_eq!(written(&term), "    abc\n");
    }

    #[test]
    fn test_long_lines_are_split() {
        let mut term = terminal("", 4);
        term.print_line("abcdefghij", true);
        assert_eq!(written(&term), "abcd\nefgh\n ij\n");
    }

    #[test]
    fn test_choose_skips_blank_and_invalid_lines() {
        let mut term = terminal("\n   \nzap\n  Play\n", 80);
        let choice = term.choose(&['p', 'e']).unwrap();
        assert_eq!(choice, Some('p'));
        assert_eq!(written(&term), "ERROR: invalid option 'z'!\n");
    }

    #[test]
    fn test_choose_reprompts_on_invalid_utf8() {
        let console = Console::fixed(TerminalSize {
            width: 80,
            height: 24,
        });
        let config = GameConfig::default().without_delays();
        let input = Cursor::new(vec![0xFF, b'\n', b'p', b'\n']);
        let mut term = Terminal::new(input, Vec::new(), console, &config);

        assert_eq!(term.choose(&['p']).unwrap(), Some('p'));
        assert_eq!(written(&term), "ERROR: invalid option '\u{FFFD}'!\n");
    }

    #[test]
    fn test_choose_without_options() {
        let mut term = terminal("", 80);
        assert_eq!(term.choose(&[]).unwrap(), None);
    }

    #[test]
    fn test_choose_at_end_of_input() {
        let mut term = terminal("q\n", 80);
        let err = term.choose(&['p']).unwrap_err();
        assert!(matches!(err, InputError::Eof));
        assert_eq!(err.to_string(), "encountered EOF reading stdin");
    }

    #[test]
    #[should_panic(expected = "too many menu options")]
    fn test_choose_rejects_oversized_menus() {
        let mut term = terminal("a\n", 80);
        let options: Vec<char> = ('a'..='z').collect();
        let _ = term.choose(&options);
    }

    #[test]
    fn test_await_player_reads_a_line() {
        let mut term = terminal("anything\n", 80);
        term.await_player(false).unwrap();
        assert_eq!(written(&term), "Press ENTER to continue\n");
        assert!(matches!(term.await_player(false), Err(InputError::Eof)));
    }

    #[test]
    fn test_clear_emits_escape_codes() {
        let mut term = terminal("", 80);
        term.clear();
        let out = written(&term);
        assert!(out.contains("\x1B[2J"));
    }

    #[test]
    fn test_exit_sequence() {
        let mut term = terminal("", 80);
        term.play_exit_sequence();
        assert_eq!(written(&term), "EXITing...\n");
    }
}
