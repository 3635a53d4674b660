//! bm-core: Core game logic for BitMasher
//!
//! This crate contains all game logic with no terminal I/O. Output, input
//! and time go through the traits in [`interface`], so everything here can
//! be driven by the scripted [`headless`] frontend.

pub mod action;
pub mod combat;
pub mod config;
pub mod dungeon;
pub mod error;
pub mod headless;
pub mod interface;
pub mod object;

mod consts;
mod gameloop;
mod rng;

pub use consts::*;
pub use gameloop::{
    Arrival, Session, SessionOutcome, deadline_for, display_inventory, new_game, run_session,
};
pub use rng::{GameRng, RandomSource, ScriptedRng};
