//! bm-ui: Line-based terminal layer for BitMasher
//!
//! Implements the printing and option selection collaborators from
//! `bm_core::interface` over stdin/stdout, plus the menus and endings that
//! live outside a play session.

pub mod console;
pub mod ending;
pub mod menu;
pub mod terminal;

pub use console::{Console, TerminalSize};
pub use ending::{lose_sequence_for, show_generation_warning};
pub use menu::{StartMenuChoice, run_start_menu};
pub use terminal::Terminal;
