//! Items and inventories
//!
//! Items are the prerequisites the player gathers before facing the
//! RANSOMWARE. The RANSOMWARE itself is stored on the map as an item since
//! there is never anything else in its room.

mod inventory;

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::rng::RandomSource;

pub use inventory::Inventory;

/// Kinds of items that can sit in a system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum ItemKind {
    #[default]
    #[strum(to_string = "None")]
    None,
    #[strum(to_string = "Full memory read access")]
    FullMemoryReadAccess,
    #[strum(to_string = "Full memory write access")]
    FullMemoryWriteAccess,
    #[strum(to_string = "Pointer dereferencer")]
    PointerDereferencer,
    #[strum(to_string = "OS override capability")]
    OsOverrideCapability,
    #[strum(to_string = "RANSOMWARE code fragment")]
    RansomwareCodeFragment,
    #[strum(to_string = "Vulnerability")]
    Vulnerability,
    #[strum(to_string = "Sandboxer")]
    Sandboxer,
    /// Boss sentinel. Placed on the map, never carried.
    #[strum(to_string = "The RANSOMWARE")]
    Ransomware,
}

impl ItemKind {
    /// Whether the player can pick this kind up
    pub const fn is_collectible(&self) -> bool {
        !matches!(self, ItemKind::None | ItemKind::Ransomware)
    }

    /// Iterate over the seven collectible kinds
    pub fn collectibles() -> impl Iterator<Item = ItemKind> {
        ItemKind::iter().filter(ItemKind::is_collectible)
    }
}

/// A stack of one item kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    pub quantity: u32,
}

impl Item {
    pub const fn new(kind: ItemKind, quantity: u32) -> Self {
        Self { kind, quantity }
    }

    /// A single unit of the given kind
    pub const fn one(kind: ItemKind) -> Self {
        Self::new(kind, 1)
    }
}

/// Build the set of items the player must gather this session
///
/// Code fragments and vulnerabilities come in stacks of 1-3, everything else
/// is a single unit. Entries are shuffled so the map generator places them
/// in a random order.
pub fn generate_required_items<R: RandomSource>(rng: &mut R) -> Inventory {
    let mut required = Inventory::new();

    required.add(Item::one(ItemKind::FullMemoryReadAccess));
    required.add(Item::one(ItemKind::FullMemoryWriteAccess));
    required.add(Item::one(ItemKind::PointerDereferencer));
    required.add(Item::one(ItemKind::OsOverrideCapability));
    required.add(Item::one(ItemKind::Sandboxer));
    required.add(Item::new(
        ItemKind::RansomwareCodeFragment,
        rng.range_inclusive(1, 3),
    ));
    required.add(Item::new(
        ItemKind::Vulnerability,
        rng.range_inclusive(1, 3),
    ));

    required.shuffle(rng);
    required
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GameRng;

    #[test]
    fn test_collectible_kinds() {
        assert!(!ItemKind::None.is_collectible());
        assert!(!ItemKind::Ransomware.is_collectible());
        assert_eq!(ItemKind::collectibles().count(), 7);
    }

    #[test]
    fn test_item_names() {
        assert_eq!(ItemKind::Ransomware.to_string(), "The RANSOMWARE");
        assert_eq!(ItemKind::OsOverrideCapability.to_string(), "OS override capability");
        assert_eq!(ItemKind::None.to_string(), "None");
    }

    #[test]
    fn test_required_items_cover_every_collectible() {
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let required = generate_required_items(&mut rng);
            assert_eq!(required.len(), 7);
            for kind in ItemKind::collectibles() {
                assert!(required.contains(kind), "missing {kind} for seed {seed}");
            }
        }
    }

    #[test]
    fn test_required_item_quantities() {
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let required = generate_required_items(&mut rng);
            for item in required.iter() {
                match item.kind {
                    ItemKind::RansomwareCodeFragment | ItemKind::Vulnerability => {
                        assert!((1..=3).contains(&item.quantity));
                    }
                    _ => assert_eq!(item.quantity, 1),
                }
            }
        }
    }
}
