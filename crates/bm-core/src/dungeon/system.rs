//! Systems (rooms) and their scan state

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::DIRECTION_COUNT;
use crate::object::ItemKind;

use super::Direction;

/// Handle to a system inside a [`Map`](super::Map) arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SystemId(pub usize);

impl SystemId {
    /// The bootloader, always the first system of a map
    pub const ROOT: SystemId = SystemId(0);
}

/// Kinds of systems that can be visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SystemType {
    #[strum(to_string = "The Bootloader")]
    Bootloader,
    #[strum(to_string = "The Registry")]
    Registry,
    #[strum(to_string = "The Network interfaces")]
    NetworkInterfaces,
    #[strum(to_string = "The Kernal")]
    Kernal,
    #[strum(to_string = "The Hard drive")]
    HardDrive,
    #[strum(to_string = "WebSurfer")]
    WebSurfer,
    #[strum(to_string = "PainterEX")]
    PainterEx,
    #[strum(to_string = "BitMasher")]
    BitMasher,
    #[strum(to_string = "The ilo li sina Interpreter")]
    IloLiSinaInterpreter,
    #[strum(to_string = "FreeWriter")]
    FreeWriter,
    #[strum(to_string = "PIMG")]
    Pimg,
    #[strum(to_string = "The Espresso Runtime Enviroment")]
    EspressoRuntimeEnviroment,
    #[strum(to_string = "SuperCAD")]
    SuperCad,
    #[strum(to_string = "MacroDoi")]
    MacroDoi,
    #[strum(to_string = "Conway's Ivory Tower")]
    ConwaysIvoryTower,
    #[strum(to_string = "Random-Information-Generator")]
    RandomInformationGenerator,
}

impl SystemType {
    /// Every type the generator may hand out (all but the bootloader)
    pub fn generation_pool() -> Vec<SystemType> {
        SystemType::iter()
            .filter(|t| *t != SystemType::Bootloader)
            .collect()
    }
}

/// Result of scanning a system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum ScanResult {
    /// Never scanned
    #[default]
    None,
    Empty,
    Abnormal,
    Suspicious,
    Error,
}

impl ScanResult {
    /// Human readable text, `None` when there is nothing to show
    pub const fn annotation(&self) -> Option<&'static str> {
        match self {
            ScanResult::None => None,
            ScanResult::Empty => Some("Empty"),
            ScanResult::Abnormal => Some("Abnormal"),
            ScanResult::Suspicious => Some("Abnormal. Suspicious activity"),
            ScanResult::Error => Some("[ERROR]"),
        }
    }

    /// Append the scan annotation to a label, if there is one
    pub fn annotate(&self, label: &str) -> String {
        match self.annotation() {
            Some(result) => format!("{label} (scan: {result})"),
            None => label.to_string(),
        }
    }
}

/// A node of the map graph
///
/// Adjacency slots are non-owning handles into the same arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct System {
    pub system_type: SystemType,
    pub item: ItemKind,
    pub scan_result: ScanResult,
    adjacent: [Option<SystemId>; DIRECTION_COUNT],
}

impl System {
    pub fn new(system_type: SystemType, item: ItemKind) -> Self {
        Self {
            system_type,
            item,
            scan_result: ScanResult::None,
            adjacent: [None; DIRECTION_COUNT],
        }
    }

    /// Display name of this system
    pub fn name(&self) -> String {
        self.system_type.to_string()
    }

    /// Name with the scan annotation appended
    pub fn label(&self) -> String {
        self.scan_result.annotate(&self.name())
    }

    /// The neighbour in a direction, if any
    pub fn neighbour(&self, direction: Direction) -> Option<SystemId> {
        self.adjacent[direction.index()]
    }

    /// Directions with a neighbour attached, paired with that neighbour
    pub fn neighbours(&self) -> impl Iterator<Item = (Direction, SystemId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.neighbour(d).map(|id| (d, id)))
    }

    /// Directions with no neighbour attached
    pub fn free_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(|d| self.neighbour(*d).is_none())
    }

    /// Whether the RANSOMWARE lives here
    pub fn holds_boss(&self) -> bool {
        self.item == ItemKind::Ransomware
    }

    pub(super) fn set_neighbour(&mut self, direction: Direction, id: SystemId) {
        self.adjacent[direction.index()] = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_pool_excludes_bootloader() {
        let pool = SystemType::generation_pool();
        assert_eq!(pool.len(), 15);
        assert!(!pool.contains(&SystemType::Bootloader));
    }

    #[test]
    fn test_scan_annotation() {
        assert_eq!(ScanResult::None.annotate("PIMG"), "PIMG");
        assert_eq!(ScanResult::Empty.annotate("PIMG"), "PIMG (scan: Empty)");
        assert_eq!(
            ScanResult::Suspicious.annotate("PIMG"),
            "PIMG (scan: Abnormal. Suspicious activity)"
        );
        assert_eq!(ScanResult::Error.annotate("PIMG"), "PIMG (scan: [ERROR])");
    }

    #[test]
    fn test_new_system_is_isolated() {
        let system = System::new(SystemType::Kernal, ItemKind::Sandboxer);
        assert_eq!(system.neighbours().count(), 0);
        assert_eq!(system.free_directions().count(), 4);
        assert_eq!(system.scan_result, ScanResult::None);
        assert_eq!(system.name(), "The Kernal");
    }
}
