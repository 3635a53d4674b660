use bm_core::config::GameConfig;
use bm_core::dungeon::{Direction, generate_map};
use bm_core::error::GenerationError;
use bm_core::object::{Inventory, Item, ItemKind, generate_required_items};
use bm_core::{GameRng, MAP_MAX_COUNT, new_game};
use proptest::prelude::*;

#[test]
fn test_default_maps_place_every_item() {
    let config = GameConfig::default();
    let mut partial = 0;

    for seed in 0..200 {
        let mut rng = GameRng::new(seed);
        let generated = new_game(&config, &mut rng).expect("boss placement");
        if generated.is_partial() {
            partial += 1;
        }
        assert_eq!(generated.requested, 7);
        assert!(generated.map.len() <= MAP_MAX_COUNT);
    }

    // 100 steps is plenty to graft seven systems
    assert!(partial < 10, "{partial} partial maps out of 200");
}

#[test]
fn test_same_seed_same_map() {
    let config = GameConfig::default();
    let a = new_game(&config, &mut GameRng::new(1234)).unwrap();
    let b = new_game(&config, &mut GameRng::new(1234)).unwrap();
    assert_eq!(a.map, b.map);
    assert_eq!(a.placed, b.placed);
}

#[test]
fn test_no_room_to_move() {
    let config = GameConfig {
        move_chance: 100,
        ..GameConfig::default()
    };
    let mut rng = GameRng::new(8);
    let required = generate_required_items(&mut rng);
    assert_eq!(
        generate_map(&required, &config, &mut rng).unwrap_err(),
        GenerationError::BossPlacement { max_steps: 100 }
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn generated_maps_are_connected_and_symmetric(
        seed in any::<u64>(),
        move_chance in 0_u32..=99,
        max_steps in 1_u32..=200,
    ) {
        let config = GameConfig { move_chance, max_steps, ..GameConfig::default() };
        let mut rng = GameRng::new(seed);
        let required = generate_required_items(&mut rng);

        match generate_map(&required, &config, &mut rng) {
            Ok(generated) => {
                let map = &generated.map;
                prop_assert!(map.is_connected(), "seed={seed} produced a disconnected map");
                prop_assert!(map.is_symmetric(), "seed={seed} produced a one-way edge");

                let boss = map.boss();
                prop_assert!(boss.is_some());
                prop_assert!(map.reachable_from(map.root()).contains(&boss.unwrap()));
                prop_assert_eq!(map.iter().filter(|(_, s)| s.holds_boss()).count(), 1);
                prop_assert_eq!(map.len(), generated.placed.len() + 2);

                for item in generated.placed.iter() {
                    prop_assert!(required.contains(item.kind));
                    prop_assert_eq!(item.quantity, 1);
                }
            }
            Err(err) => prop_assert_eq!(err, GenerationError::BossPlacement { max_steps }),
        }
    }

    #[test]
    fn adding_a_held_kind_only_grows_quantity(first in 1_u32..10, second in 1_u32..10) {
        let mut inventory = Inventory::new();
        inventory.add(Item::new(ItemKind::Vulnerability, first));
        inventory.add(Item::one(ItemKind::Sandboxer));
        inventory.add(Item::new(ItemKind::Vulnerability, second));

        prop_assert_eq!(inventory.len(), 2);
        prop_assert_eq!(inventory.count(ItemKind::Vulnerability), first + second);
    }

    #[test]
    fn removal_clamps(held in 1_u32..10, taken in 0_u32..20) {
        let mut inventory = Inventory::new();
        inventory.add(Item::new(ItemKind::RansomwareCodeFragment, held));

        let removed = inventory.remove(ItemKind::RansomwareCodeFragment, taken);
        if taken >= held {
            prop_assert_eq!(removed, held);
            prop_assert!(!inventory.contains(ItemKind::RansomwareCodeFragment));
        } else {
            prop_assert_eq!(removed, taken);
            prop_assert_eq!(inventory.count(ItemKind::RansomwareCodeFragment), held - taken);
        }
    }
}

#[test]
fn test_opposite_round_trip_on_generated_edges() {
    let mut rng = GameRng::new(77);
    let generated = new_game(&GameConfig::default(), &mut rng).unwrap();
    for (id, system) in generated.map.iter() {
        for (direction, next) in system.neighbours() {
            let back = generated.map[next].neighbour(direction.opposite());
            assert_eq!(back, Some(id));
            assert_ne!(direction, direction.opposite());
        }
    }
    assert_eq!(Direction::Up.opposite().opposite(), Direction::Up);
}
