//! Combat system
//!
//! The turn-based fight against the RANSOMWARE. Combat itself draws no
//! random numbers; only the collected items change how it plays out.

mod battle;

use std::fmt;

use crate::config::GameConfig;
use crate::object::{Inventory, ItemKind};

pub use battle::{Battle, BattleEvent, BattleOutcome, Turn, run_battle};

/// A participant in a battle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fighter {
    pub name: &'static str,
    pub health: i32,
    pub damage: i32,
}

impl Fighter {
    pub const fn new(name: &'static str, health: i32, damage: i32) -> Self {
        Self {
            name,
            health,
            damage,
        }
    }

    /// Apply this fighter's damage to a victim, returning the damage done
    pub fn attack(&self, victim: &mut Fighter) -> i32 {
        victim.take_hit(self.damage)
    }

    /// Lose health, returning the damage taken
    pub fn take_hit(&mut self, damage: i32) -> i32 {
        self.health -= damage;
        damage
    }

    pub const fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

impl fmt::Display for Fighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} hp, {} dmg", self.name, self.health, self.damage)
    }
}

/// Capabilities unlocked by the items collected before the battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Both memory read and write access collected
    pub memory_alteration: bool,
    /// OS override capability collected
    pub admin_privileges: bool,
    /// Pointer dereferencer collected
    pub dereferencer: bool,
    /// Sandboxer collected; stops the clock during battle
    pub sandboxed: bool,
}

impl Capabilities {
    /// Derive capabilities from the items still left to collect
    pub fn from_remaining(remaining: &Inventory) -> Self {
        Self {
            memory_alteration: !remaining.contains(ItemKind::FullMemoryReadAccess)
                && !remaining.contains(ItemKind::FullMemoryWriteAccess),
            admin_privileges: !remaining.contains(ItemKind::OsOverrideCapability),
            dereferencer: !remaining.contains(ItemKind::PointerDereferencer),
            sandboxed: !remaining.contains(ItemKind::Sandboxer),
        }
    }

    /// Every capability present
    pub const fn all() -> Self {
        Self {
            memory_alteration: true,
            admin_privileges: true,
            dereferencer: true,
            sandboxed: true,
        }
    }

    /// Whether EXTRACT can deal damage
    pub const fn can_extract(&self) -> bool {
        self.dereferencer && self.memory_alteration && self.admin_privileges
    }
}

/// The player, with fixed health and damage
pub fn player_fighter(config: &GameConfig) -> Fighter {
    Fighter::new(
        "You",
        config.fighter_base_health,
        config.fighter_base_damage + config.player_damage_boost,
    )
}

/// The RANSOMWARE, stronger for every missing code fragment and vulnerability
pub fn ransomware_fighter(remaining: &Inventory, config: &GameConfig) -> Fighter {
    let fragments = remaining.count(ItemKind::RansomwareCodeFragment) as i32;
    let vulnerabilities = remaining.count(ItemKind::Vulnerability) as i32;

    Fighter::new(
        "The RANSOMWARE",
        config
            .fighter_base_health
            .saturating_add(config.code_fragment_health_boost.saturating_mul(fragments)),
        config
            .fighter_base_damage
            .saturating_add(config.vulnerability_damage_boost.saturating_mul(vulnerabilities)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Item;

    #[test]
    fn test_attack_and_death_threshold() {
        let attacker = Fighter::new("You", 50, 25);
        let mut victim = Fighter::new("The RANSOMWARE", 50, 10);

        assert_eq!(attacker.attack(&mut victim), 25);
        assert_eq!(victim.health, 25);
        assert!(!victim.is_dead());

        attacker.attack(&mut victim);
        assert_eq!(victim.health, 0);
        assert!(victim.is_dead());
    }

    #[test]
    fn test_status_line() {
        let fighter = Fighter::new("You", 35, 15);
        assert_eq!(fighter.to_string(), "You: 35 hp, 15 dmg");
    }

    #[test]
    fn test_capabilities_with_nothing_collected() {
        let remaining: Inventory = ItemKind::collectibles().map(Item::one).collect();
        let caps = Capabilities::from_remaining(&remaining);
        assert_eq!(caps, Capabilities::default());
        assert!(!caps.can_extract());
    }

    #[test]
    fn test_memory_alteration_needs_read_and_write() {
        let mut remaining = Inventory::new();
        remaining.add(Item::one(ItemKind::FullMemoryWriteAccess));
        let caps = Capabilities::from_remaining(&remaining);
        assert!(!caps.memory_alteration);
        assert!(caps.admin_privileges);
        assert!(caps.dereferencer);
        assert!(caps.sandboxed);

        let caps = Capabilities::from_remaining(&Inventory::new());
        assert_eq!(caps, Capabilities::all());
        assert!(caps.can_extract());
    }

    #[test]
    fn test_fighters_scale_with_missing_items() {
        let config = GameConfig::default();
        let mut remaining = Inventory::new();
        remaining.add(Item::new(ItemKind::RansomwareCodeFragment, 2));
        remaining.add(Item::one(ItemKind::Vulnerability));

        let boss = ransomware_fighter(&remaining, &config);
        assert_eq!(boss.health, 50 + 25 * 2);
        assert_eq!(boss.damage, 10 + 10);

        let player = player_fighter(&config);
        assert_eq!(player, Fighter::new("You", 50, 15));
    }

    #[test]
    fn test_huge_boosts_saturate() {
        let config = GameConfig {
            code_fragment_health_boost: i32::MAX,
            vulnerability_damage_boost: i32::MAX,
            ..GameConfig::default()
        };
        let mut remaining = Inventory::new();
        remaining.add(Item::one(ItemKind::RansomwareCodeFragment));
        remaining.add(Item::new(ItemKind::Vulnerability, 3));

        let boss = ransomware_fighter(&remaining, &config);
        assert_eq!(boss.health, i32::MAX);
        assert_eq!(boss.damage, i32::MAX);
    }
}
