//! Tap-to-item resolution.

use crate::geometry::{ScreenMapping, ScreenPoint, ScreenSize};
use crate::state::{PlacedId, PlacedItem};

/// Default tap tolerance in pixels.
pub const DEFAULT_TAP_TOLERANCE: f32 = 50.0;

/// Return the first item, in list order, whose projected screen position is
/// strictly closer than `tolerance` pixels to `tap`.
///
/// Matches are not re-ranked: when two items are in range the earlier one
/// wins even if the later one is closer.
pub fn hit_test<'a>(
    tap: ScreenPoint,
    screen: ScreenSize,
    items: &'a [PlacedItem],
    mapping: &ScreenMapping,
    tolerance: f32,
) -> Option<&'a PlacedId> {
    items
        .iter()
        .find(|item| mapping.to_screen(item.position, screen).distance(tap) < tolerance)
        .map(|item| &item.placed_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::geometry::Vec3;

    fn item_at(id: &str, x: f32, z: f32) -> PlacedItem {
        let catalog = Catalog::bundled().unwrap();
        let definition = catalog.items()[0].clone();
        PlacedItem::new(PlacedId::new(id), definition, Vec3::new(x, 0.0, z), 0)
    }

    const SCREEN: ScreenSize = ScreenSize {
        width: 400.0,
        height: 800.0,
    };

    #[test]
    fn empty_scene_never_hits() {
        let mapping = ScreenMapping::default();
        assert!(hit_test(ScreenPoint::new(200.0, 400.0), SCREEN, &[], &mapping, 50.0).is_none());
    }

    #[test]
    fn tolerance_is_strict() {
        let mapping = ScreenMapping::default();
        let items = vec![item_at("a", 0.0, 0.0)];
        // exactly 50px to the right of the projected center
        assert!(hit_test(ScreenPoint::new(250.0, 400.0), SCREEN, &items, &mapping, 50.0).is_none());
        let hit = hit_test(ScreenPoint::new(249.0, 400.0), SCREEN, &items, &mapping, 50.0);
        assert_eq!(hit.map(PlacedId::as_str), Some("a"));
    }

    #[test]
    fn first_match_wins_over_closest() {
        let mapping = ScreenMapping::default();
        // "far" projects to (200, 400), "near" to (230, 400)
        let items = vec![item_at("far", 0.0, 0.0), item_at("near", 0.3, 0.0)];
        let hit = hit_test(ScreenPoint::new(235.0, 400.0), SCREEN, &items, &mapping, 50.0);
        assert_eq!(hit.map(PlacedId::as_str), Some("far"));
    }

    #[test]
    fn uses_euclidean_distance() {
        let mapping = ScreenMapping::default();
        let items = vec![item_at("a", 0.0, 0.0)];
        // 40px right and 40px down is ~56.6px away
        assert!(hit_test(ScreenPoint::new(240.0, 440.0), SCREEN, &items, &mapping, 50.0).is_none());
        assert!(hit_test(ScreenPoint::new(230.0, 430.0), SCREEN, &items, &mapping, 50.0).is_some());
    }
}
