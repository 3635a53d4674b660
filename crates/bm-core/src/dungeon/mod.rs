//! Map system
//!
//! Contains systems (rooms), the map arena, the map generator, and SCANning.

mod direction;
mod generation;
mod map;
mod scan;
mod system;

pub use direction::Direction;
pub use generation::{GeneratedMap, GenerationStats, generate_map};
pub use map::Map;
pub use scan::{classify, scan_neighbours, try_scan};
pub use system::{ScanResult, System, SystemId, SystemType};
