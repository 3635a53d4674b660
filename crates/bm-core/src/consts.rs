//! Core game constants
//!
//! Fixed upper bounds for the arenas and menus. Exceeding any of them is a
//! programmer error, not a runtime condition.

/// Maximum number of systems a single map can hold
pub const MAP_MAX_COUNT: usize = 50;

/// Maximum number of distinct item kinds an inventory can hold
pub const INVENTORY_MAX_COUNT: usize = 25;

/// Maximum number of options a selector can present at once
pub const SELECTOR_OPTIONS_MAX_COUNT: usize = 25;

/// Number of directions a system can connect in
pub const DIRECTION_COUNT: usize = 4;

/// Meaningless version string shown on the start menu
pub const VERSION_STRING: &str = "V6.327438247";
