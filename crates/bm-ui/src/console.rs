//! Terminal geometry

use std::env;

/// Size assumed when nothing better is known
pub const FALLBACK_SIZE: TerminalSize = TerminalSize {
    width: 80,
    height: 24,
};

/// Terminal dimensions in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

/// Answers size queries for the terminal the game prints to
///
/// The size is looked up again for every message so resizing the window
/// between screens is picked up.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    fixed: Option<TerminalSize>,
}

impl Console {
    /// Console that asks the real terminal
    pub fn new() -> Self {
        Self { fixed: None }
    }

    /// Console that always reports the same size
    pub fn fixed(size: TerminalSize) -> Self {
        Self { fixed: Some(size) }
    }

    pub fn size(&self) -> TerminalSize {
        if let Some(size) = self.fixed {
            return size;
        }

        match crossterm::terminal::size() {
            Ok((width, height)) if width > 0 => TerminalSize { width, height },
            _ => size_from_env(env::var("COLUMNS").ok(), env::var("LINES").ok())
                .unwrap_or(FALLBACK_SIZE),
        }
    }
}

/// Both variables must be present and numeric
fn size_from_env(columns: Option<String>, lines: Option<String>) -> Option<TerminalSize> {
    let width = columns?.trim().parse().ok()?;
    let height = lines?.trim().parse().ok()?;
    Some(TerminalSize { width, height })
}

/// Split a message into pieces no wider than `width`
///
/// An empty message still yields one empty piece.
pub fn split_to_width(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Left padding that centres a piece of `length` characters
pub fn centre_padding(length: usize, width: usize) -> usize {
    width.saturating_sub(length) / 2
}
