//! Property-based invariant tests for placement and hit-testing.
//!
//! 1. A tap maps to the floor (y = 0) and projects back to itself.
//! 2. Tapping an item's projection always hits something, and the hit is the
//!    first item in list order within tolerance.
//! 3. Ids stay unique and scale stays uniform and in bounds under any
//!    sequence of placements and scale changes.
//! 4. Rotation is always stored in [0, 360).

mod common;

use common::{catalog, ready_session, SCREEN};
use furniture_ar::geometry::ScreenMapping;
use furniture_ar::hit_test::hit_test;
use furniture_ar::{PlacedId, ScreenPoint};
use proptest::prelude::*;
use std::collections::HashSet;

fn tap_strategy() -> impl Strategy<Value = ScreenPoint> {
    (0u16..=400, 0u16..=800).prop_map(|(x, y)| ScreenPoint::new(x as f32, y as f32))
}

proptest! {
    #[test]
    fn mapping_round_trips(tap in tap_strategy()) {
        let mapping = ScreenMapping::default();
        let world = mapping.to_world(tap, SCREEN);
        prop_assert_eq!(world.y, 0.0);
        let back = mapping.to_screen(world, SCREEN);
        prop_assert!((back.x - tap.x).abs() < 1e-3 && (back.y - tap.y).abs() < 1e-3);
    }
}

proptest! {
    #[test]
    fn projection_tap_hits_first_in_range(taps in prop::collection::vec(tap_strategy(), 1..12), pick in any::<prop::sample::Index>()) {
        let mut session = ready_session();
        let chair = catalog().items()[0].clone();
        for tap in &taps {
            session.select_catalog_item(chair.clone());
            session.place(*tap, SCREEN).unwrap();
        }

        let items = session.placed_items();
        let target = &items[pick.index(items.len())];
        let tap = session.store().project(target, SCREEN);
        let mapping = ScreenMapping::default();
        let expected = items
            .iter()
            .find(|i| mapping.to_screen(i.position, SCREEN).distance(tap) < 50.0)
            .map(|i| i.placed_id.clone());

        let hit = hit_test(tap, SCREEN, items, &mapping, 50.0).cloned();
        prop_assert!(hit.is_some());
        prop_assert_eq!(hit, expected);
    }
}

proptest! {
    #[test]
    fn ids_unique_and_scale_uniform(ops in prop::collection::vec((tap_strategy(), -10.0f32..10.0), 1..30)) {
        let mut session = ready_session();
        let sofa = catalog().find_by_id("sofa_sectional_001").unwrap().clone();
        for (tap, scale) in &ops {
            session.select_catalog_item(sofa.clone());
            let id = session.place(*tap, SCREEN).unwrap();
            session.set_scale(&id, *scale).unwrap();
        }

        let ids: HashSet<&PlacedId> = session.placed_items().iter().map(|i| &i.placed_id).collect();
        prop_assert_eq!(ids.len(), ops.len());
        for item in session.placed_items() {
            prop_assert_eq!(item.scale.x, item.scale.y);
            prop_assert_eq!(item.scale.y, item.scale.z);
            prop_assert!((0.5..=3.0).contains(&item.scale.x));
        }
    }
}

proptest! {
    #[test]
    fn rotation_always_in_range(degrees in -10_000.0f32..10_000.0) {
        let mut session = ready_session();
        session.select_catalog_item(catalog().items()[0].clone());
        let id = session.place(ScreenPoint::new(200.0, 400.0), SCREEN).unwrap();
        let yaw = session.set_rotation(&id, degrees).unwrap();
        prop_assert!((0.0..360.0).contains(&yaw));
        let rotation = session.placed_items()[0].rotation;
        prop_assert_eq!(rotation.x, 0.0);
        prop_assert_eq!(rotation.z, 0.0);
    }
}
