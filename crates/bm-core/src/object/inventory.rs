//! Inventory management
//!
//! A small multiset of item kinds. Entries are unique by kind and always hold
//! a quantity of at least one.

use crate::INVENTORY_MAX_COUNT;
use crate::rng::RandomSource;

use super::{Item, ItemKind};

/// A set of item stacks, unique by kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, merging into an existing stack of the same kind
    ///
    /// Adding `ItemKind::None` or a zero quantity does nothing.
    pub fn add(&mut self, item: Item) {
        if item.kind == ItemKind::None || item.quantity == 0 {
            return;
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.kind == item.kind) {
            existing.quantity += item.quantity;
            return;
        }

        assert!(
            self.items.len() < INVENTORY_MAX_COUNT,
            "inventory capacity of {INVENTORY_MAX_COUNT} kinds exceeded"
        );
        self.items.push(item);
    }

    /// Remove up to `quantity` units of a kind
    ///
    /// Removing at least as many units as are held deletes the entry. Returns
    /// the number of units actually removed.
    pub fn remove(&mut self, kind: ItemKind, quantity: u32) -> u32 {
        if kind == ItemKind::None {
            return 0;
        }

        let Some(idx) = self.items.iter().position(|i| i.kind == kind) else {
            return 0;
        };

        let held = self.items[idx].quantity;
        if quantity >= held {
            self.items.swap_remove(idx);
            held
        } else {
            self.items[idx].quantity -= quantity;
            quantity
        }
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Quantity held of a kind, 0 if absent
    pub fn count(&self, kind: ItemKind) -> u32 {
        self.items
            .iter()
            .find(|i| i.kind == kind)
            .map_or(0, |i| i.quantity)
    }

    /// Check if a kind is present, regardless of quantity
    pub fn contains(&self, kind: ItemKind) -> bool {
        self.items.iter().any(|i| i.kind == kind)
    }

    /// Number of distinct kinds held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all kinds
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Shuffle entry order (Fisher-Yates)
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.items);
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        let mut inventory = Inventory::new();
        for item in iter {
            inventory.add(item);
        }
        inventory
    }
}
