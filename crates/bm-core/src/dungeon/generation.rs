//! Map generation
//!
//! Grows a "spiky" graph of systems from the bootloader. For every item a
//! traverser starts at the root and wanders for a bounded number of steps,
//! either moving to a connected system or grafting a new one onto a free
//! slot. The RANSOMWARE is grafted last so every placed item lies on the
//! graph before it, and every system stays reachable from the root.

use crate::config::GameConfig;
use crate::error::GenerationError;
use crate::object::{Inventory, Item, ItemKind};
use crate::rng::RandomSource;

use super::{Direction, Map, System, SystemId, SystemType};

/// Counters gathered while generating a map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Steps taken by the traverser across every walk, wasted ones included
    pub steps_taken: usize,
    /// Systems grafted onto the map, RANSOMWARE included
    pub systems_generated: usize,
}

/// A freshly generated map with the items that made it onto it
#[derive(Debug, Clone)]
pub struct GeneratedMap {
    pub map: Map,
    /// One unit per placed kind. Becomes the session's required items.
    pub placed: Inventory,
    /// Distinct kinds that were asked for
    pub requested: usize,
    pub stats: GenerationStats,
}

impl GeneratedMap {
    /// Whether some requested items could not be placed
    pub fn is_partial(&self) -> bool {
        self.placed.len() < self.requested
    }
}

/// Generate a map holding one system per distinct required kind plus the
/// RANSOMWARE
///
/// Running out of traverser steps or system types stops ordinary placement
/// early; the result is then partial and a warning is logged. Failing to
/// place the RANSOMWARE is an error.
pub fn generate_map<R: RandomSource>(
    required: &Inventory,
    config: &GameConfig,
    rng: &mut R,
) -> Result<GeneratedMap, GenerationError> {
    let mut map = Map::new();
    let mut placed = Inventory::new();
    let mut stats = GenerationStats::default();

    let mut pool = SystemType::generation_pool();
    rng.shuffle(&mut pool);
    let mut next_type = 0;

    let requested: Vec<ItemKind> = required
        .iter()
        .map(|item| item.kind)
        .filter(ItemKind::is_collectible)
        .collect();

    for &kind in &requested {
        // The last system type is reserved for the RANSOMWARE
        if next_type + 1 >= pool.len() {
            break;
        }

        let Some((from, direction)) = traverse(&map, config, rng, &mut stats) else {
            break;
        };

        map.attach(from, direction, System::new(pool[next_type], kind));
        next_type += 1;
        stats.systems_generated += 1;
        placed.add(Item::one(kind));
    }

    let boss_type = *pool.get(next_type).ok_or(GenerationError::PoolExhausted)?;
    let (from, direction) =
        traverse(&map, config, rng, &mut stats).ok_or(GenerationError::BossPlacement {
            max_steps: config.max_steps,
        })?;
    map.attach(from, direction, System::new(boss_type, ItemKind::Ransomware));
    stats.systems_generated += 1;

    let generated = GeneratedMap {
        map,
        placed,
        requested: requested.len(),
        stats,
    };

    if generated.is_partial() {
        log::warn!(
            "Unable to generate enough systems: could only place {} items from a pool of {} ({} systems generated)",
            generated.placed.len(),
            generated.requested,
            stats.systems_generated,
        );
    }
    log::info!(
        "Map generator statistics: {} total traverser steps, {} systems generated",
        stats.steps_taken,
        stats.systems_generated,
    );

    Ok(generated)
}

/// Walk the map from the root looking for a free slot to graft onto
///
/// Each step either moves to a neighbour other than the one just left, or
/// picks a free slot of the current system. A step with nothing eligible to
/// do is wasted. Returns `None` once `max_steps` steps are spent.
fn traverse<R: RandomSource>(
    map: &Map,
    config: &GameConfig,
    rng: &mut R,
    stats: &mut GenerationStats,
) -> Option<(SystemId, Direction)> {
    let mut previous: Option<SystemId> = None;
    let mut current = map.root();

    for _ in 0..config.max_steps {
        stats.steps_taken += 1;

        if rng.percent(config.move_chance) {
            let candidates: Vec<SystemId> = map[current]
                .neighbours()
                .map(|(_, next)| next)
                .filter(|next| Some(*next) != previous)
                .collect();

            if let Some(&next) = rng.choose(&candidates) {
                previous = Some(current);
                current = next;
            }
        } else {
            let free: Vec<Direction> = map[current].free_directions().collect();

            if let Some(&direction) = rng.choose(&free) {
                return Some((current, direction));
            }
        }
    }

    None
}
