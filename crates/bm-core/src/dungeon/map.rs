//! Map arena
//!
//! All systems of a session live in one arena and refer to each other by
//! [`SystemId`]. Systems are never freed individually; the arena is dropped
//! as a whole when the session ends.

use std::collections::VecDeque;
use std::ops::{Index, IndexMut};

use crate::MAP_MAX_COUNT;
use crate::object::ItemKind;

use super::{Direction, System, SystemId, SystemType};

/// The connected graph of systems for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    /// First system is the root node of the map
    systems: Vec<System>,
}

impl Map {
    /// Create a map holding only the bootloader
    pub fn new() -> Self {
        let mut systems = Vec::with_capacity(MAP_MAX_COUNT);
        systems.push(System::new(SystemType::Bootloader, ItemKind::None));
        Self { systems }
    }

    /// The bootloader, where every session starts
    pub fn root(&self) -> SystemId {
        SystemId::ROOT
    }

    /// Number of allocated systems
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// A map always holds at least the bootloader
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, id: SystemId) -> Option<&System> {
        self.systems.get(id.0)
    }

    pub fn get_mut(&mut self, id: SystemId) -> Option<&mut System> {
        self.systems.get_mut(id.0)
    }

    /// Iterate over every system with its handle
    pub fn iter(&self) -> impl Iterator<Item = (SystemId, &System)> {
        self.systems.iter().enumerate().map(|(i, s)| (SystemId(i), s))
    }

    /// Allocate a new, unconnected system
    fn alloc(&mut self, system: System) -> SystemId {
        assert!(
            self.systems.len() < MAP_MAX_COUNT,
            "map capacity of {MAP_MAX_COUNT} systems exceeded"
        );
        self.systems.push(system);
        SystemId(self.systems.len() - 1)
    }

    /// Allocate a system and wire it to `from` through `direction`
    ///
    /// The edge is always added in both directions. The slot must be free.
    pub fn attach(&mut self, from: SystemId, direction: Direction, system: System) -> SystemId {
        assert!(
            self[from].neighbour(direction).is_none(),
            "slot {direction} of {from:?} is already taken"
        );
        let id = self.alloc(system);
        self[from].set_neighbour(direction, id);
        self[id].set_neighbour(direction.opposite(), from);
        id
    }

    /// The system holding the RANSOMWARE, if one was placed
    pub fn boss(&self) -> Option<SystemId> {
        self.iter().find(|(_, s)| s.holds_boss()).map(|(id, _)| id)
    }

    /// Systems reachable from `start`, in breadth-first order
    pub fn reachable_from(&self, start: SystemId) -> Vec<SystemId> {
        let mut seen = vec![false; self.systems.len()];
        let mut order = Vec::with_capacity(self.systems.len());
        let mut queue = VecDeque::from([start]);
        seen[start.0] = true;

        while let Some(id) = queue.pop_front() {
            order.push(id);
            for (_, next) in self[id].neighbours() {
                if !seen[next.0] {
                    seen[next.0] = true;
                    queue.push_back(next);
                }
            }
        }
        order
    }

    /// Whether every system can be reached from the bootloader
    pub fn is_connected(&self) -> bool {
        self.reachable_from(self.root()).len() == self.systems.len()
    }

    /// Whether every edge has its mirror edge
    pub fn is_symmetric(&self) -> bool {
        self.iter().all(|(id, system)| {
            system
                .neighbours()
                .all(|(dir, next)| self[next].neighbour(dir.opposite()) == Some(id))
        })
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<SystemId> for Map {
    type Output = System;

    fn index(&self, id: SystemId) -> &System {
        &self.systems[id.0]
    }
}

impl IndexMut<SystemId> for Map {
    fn index_mut(&mut self, id: SystemId) -> &mut System {
        &mut self.systems[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_has_bootloader() {
        let map = Map::new();
        assert_eq!(map.len(), 1);
        assert_eq!(map[map.root()].system_type, SystemType::Bootloader);
        assert_eq!(map[map.root()].item, ItemKind::None);
        assert!(map.boss().is_none());
    }

    #[test]
    fn test_attach_is_symmetric() {
        let mut map = Map::new();
        let root = map.root();
        let a = map.attach(root, Direction::Left, System::new(SystemType::Pimg, ItemKind::None));
        let b = map.attach(a, Direction::Up, System::new(SystemType::Kernal, ItemKind::Ransomware));

        assert_eq!(map[root].neighbour(Direction::Left), Some(a));
        assert_eq!(map[a].neighbour(Direction::Right), Some(root));
        assert_eq!(map[a].neighbour(Direction::Up), Some(b));
        assert_eq!(map[b].neighbour(Direction::Down), Some(a));
        assert!(map.is_symmetric());
        assert!(map.is_connected());
        assert_eq!(map.boss(), Some(b));
    }

    #[test]
    fn test_reachable_order() {
        let mut map = Map::new();
        let root = map.root();
        let a = map.attach(root, Direction::Up, System::new(SystemType::Pimg, ItemKind::None));
        let b = map.attach(root, Direction::Down, System::new(SystemType::Kernal, ItemKind::None));
        let c = map.attach(a, Direction::Up, System::new(SystemType::Registry, ItemKind::None));
        assert_eq!(map.reachable_from(root), vec![root, a, b, c]);
    }

    #[test]
    #[should_panic(expected = "already taken")]
    fn test_attach_to_taken_slot_panics() {
        let mut map = Map::new();
        let root = map.root();
        map.attach(root, Direction::Up, System::new(SystemType::Pimg, ItemKind::None));
        map.attach(root, Direction::Up, System::new(SystemType::Kernal, ItemKind::None));
    }

    #[test]
    #[should_panic(expected = "map capacity")]
    fn test_capacity_is_enforced() {
        let mut map = Map::new();
        let mut tail = map.root();
        for _ in 0..MAP_MAX_COUNT {
            tail = map.attach(tail, Direction::Right, System::new(SystemType::Pimg, ItemKind::None));
        }
    }
}
