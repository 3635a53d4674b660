//! SCANning systems for their contents

use crate::object::ItemKind;
use crate::rng::RandomSource;

use super::{Map, ScanResult, System, SystemId};

/// Classify what a system holds without revealing the exact item
pub const fn classify(item: ItemKind) -> ScanResult {
    match item {
        ItemKind::Ransomware => ScanResult::Suspicious,
        ItemKind::None => ScanResult::Empty,
        ItemKind::FullMemoryReadAccess
        | ItemKind::FullMemoryWriteAccess
        | ItemKind::PointerDereferencer
        | ItemKind::OsOverrideCapability
        | ItemKind::RansomwareCodeFragment
        | ItemKind::Vulnerability
        | ItemKind::Sandboxer => ScanResult::Abnormal,
    }
}

/// Scan a system, overwriting its previous result
///
/// When `can_fail` is set there is a `fail_chance` percent chance the result
/// is [`ScanResult::Error`]. The result is never reset to `None`.
pub fn try_scan<R: RandomSource>(
    system: &mut System,
    can_fail: bool,
    fail_chance: u32,
    rng: &mut R,
) -> ScanResult {
    let result = if can_fail && rng.percent(fail_chance) {
        ScanResult::Error
    } else {
        classify(system.item)
    };

    system.scan_result = result;
    result
}

/// Scan every neighbour of a system, each one failing independently
pub fn scan_neighbours<R: RandomSource>(
    map: &mut Map,
    id: SystemId,
    fail_chance: u32,
    rng: &mut R,
) {
    let neighbours: Vec<SystemId> = map[id].neighbours().map(|(_, next)| next).collect();
    for next in neighbours {
        let result = try_scan(&mut map[next], true, fail_chance, rng);
        log::trace!("scanned {}: {result}", map[next].name());
    }
}
