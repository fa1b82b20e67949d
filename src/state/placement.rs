//! Placement store: the ordered list of placed items and the operations on it.

use crate::catalog::FurnitureDefinition;
use crate::error::TransformError;
use crate::geometry::{ScreenMapping, ScreenPoint, ScreenSize, Vec3};
use crate::hit_test::{hit_test, DEFAULT_TAP_TOLERANCE};
use crate::state::types::{
    normalize_degrees, now_millis, PlacedId, PlacedIdGenerator, PlacedItem, ScaleBounds,
};

#[derive(Debug)]
pub struct PlacementStore {
    items: Vec<PlacedItem>,
    ids: PlacedIdGenerator,
    mapping: ScreenMapping,
    tap_tolerance: f32,
    scale_bounds: ScaleBounds,
}

impl Default for PlacementStore {
    fn default() -> Self {
        Self::new(ScreenMapping::default(), DEFAULT_TAP_TOLERANCE, ScaleBounds::default())
    }
}

impl PlacementStore {
    pub fn new(mapping: ScreenMapping, tap_tolerance: f32, scale_bounds: ScaleBounds) -> Self {
        Self {
            items: Vec::new(),
            ids: PlacedIdGenerator::default(),
            mapping,
            tap_tolerance,
            scale_bounds,
        }
    }

    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &PlacedId) -> Option<&PlacedItem> {
        self.items.iter().find(|item| &item.placed_id == id)
    }

    pub fn mapping(&self) -> &ScreenMapping {
        &self.mapping
    }

    pub fn tap_tolerance(&self) -> f32 {
        self.tap_tolerance
    }

    pub fn scale_bounds(&self) -> ScaleBounds {
        self.scale_bounds
    }

    /// Append a copy of `definition` at the floor position under `tap` and
    /// return the new item's id.
    pub fn place(&mut self, definition: &FurnitureDefinition, tap: ScreenPoint, screen: ScreenSize) -> PlacedId {
        let placed_at = now_millis();
        let placed_id = self.ids.next_at(placed_at);
        let position = self.mapping.to_world(tap, screen);

        tracing::info!(
            placed_id = %placed_id,
            furniture = %definition.id,
            x = position.x,
            z = position.z,
            "placed furniture"
        );

        self.items
            .push(PlacedItem::new(placed_id.clone(), definition.clone(), position, placed_at));
        placed_id
    }

    fn get_mut(&mut self, id: &PlacedId) -> Result<&mut PlacedItem, TransformError> {
        self.items
            .iter_mut()
            .find(|item| &item.placed_id == id)
            .ok_or_else(|| TransformError::NotFound(id.clone()))
    }

    /// Set a uniform scale, clamped into the store's bounds. Returns the
    /// value actually stored.
    pub fn set_scale(&mut self, id: &PlacedId, scale: f32) -> Result<f32, TransformError> {
        if !scale.is_finite() {
            return Err(TransformError::InvalidValue(scale));
        }
        let clamped = self.scale_bounds.clamp(scale);
        let item = self.get_mut(id)?;
        item.scale = Vec3::splat(clamped);
        Ok(clamped)
    }

    /// Set yaw in degrees, wrapped into `[0, 360)`. Returns the stored angle.
    pub fn set_rotation(&mut self, id: &PlacedId, degrees: f32) -> Result<f32, TransformError> {
        if !degrees.is_finite() {
            return Err(TransformError::InvalidValue(degrees));
        }
        let yaw = normalize_degrees(degrees);
        let item = self.get_mut(id)?;
        item.rotation = Vec3::new(0.0, yaw, 0.0);
        Ok(yaw)
    }

    /// Back to scale 1 and no rotation.
    pub fn reset_transform(&mut self, id: &PlacedId) -> Result<(), TransformError> {
        let item = self.get_mut(id)?;
        item.scale = Vec3::ONE;
        item.rotation = Vec3::ZERO;
        Ok(())
    }

    /// Remove an item; unknown ids are a no-op.
    pub fn remove(&mut self, id: &PlacedId) -> Option<PlacedItem> {
        let index = self.items.iter().position(|item| &item.placed_id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn hit_test(&self, tap: ScreenPoint, screen: ScreenSize) -> Option<&PlacedId> {
        hit_test(tap, screen, &self.items, &self.mapping, self.tap_tolerance)
    }

    /// Screen position of an item's center.
    pub fn project(&self, item: &PlacedItem, screen: ScreenSize) -> ScreenPoint {
        self.mapping.to_screen(item.position, screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    const SCREEN: ScreenSize = ScreenSize {
        width: 400.0,
        height: 800.0,
    };

    fn chair() -> FurnitureDefinition {
        Catalog::bundled().unwrap().items()[0].clone()
    }

    #[test]
    fn place_uses_fixed_mapping_and_identity_transform() {
        let mut store = PlacementStore::default();
        let id = store.place(&chair(), ScreenPoint::new(300.0, 400.0), SCREEN);
        let item = store.get(&id).unwrap();
        assert_eq!(item.position, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(item.rotation, Vec3::ZERO);
        assert_eq!(item.scale, Vec3::ONE);
        assert_eq!(item.definition, chair());
    }

    #[test]
    fn transforms_preserve_order_and_other_fields() {
        let mut store = PlacementStore::default();
        let a = store.place(&chair(), ScreenPoint::new(100.0, 100.0), SCREEN);
        let b = store.place(&chair(), ScreenPoint::new(300.0, 700.0), SCREEN);
        let before = store.get(&a).unwrap().clone();

        assert_eq!(store.set_scale(&a, 2.0), Ok(2.0));
        assert_eq!(store.set_rotation(&a, 90.0), Ok(90.0));

        let after = store.get(&a).unwrap();
        assert_eq!(after.scale, Vec3::splat(2.0));
        assert_eq!(after.rotation, Vec3::new(0.0, 90.0, 0.0));
        assert_eq!(after.position, before.position);
        assert_eq!(after.definition, before.definition);
        assert_eq!(after.placed_at, before.placed_at);

        let order: Vec<&PlacedId> = store.items().iter().map(|i| &i.placed_id).collect();
        assert_eq!(order, vec![&a, &b]);
    }

    #[test]
    fn out_of_range_scale_is_clamped() {
        let mut store = PlacementStore::default();
        let id = store.place(&chair(), ScreenPoint::new(200.0, 400.0), SCREEN);
        assert_eq!(store.set_scale(&id, 5.0), Ok(3.0));
        assert_eq!(store.get(&id).unwrap().scale, Vec3::splat(3.0));
        assert_eq!(store.set_scale(&id, 0.1), Ok(0.5));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut store = PlacementStore::default();
        let id = store.place(&chair(), ScreenPoint::new(200.0, 400.0), SCREEN);
        assert!(matches!(store.set_scale(&id, f32::NAN), Err(TransformError::InvalidValue(_))));
        assert!(matches!(
            store.set_rotation(&id, f32::INFINITY),
            Err(TransformError::InvalidValue(_))
        ));
        assert_eq!(store.get(&id).unwrap().scale, Vec3::ONE);
    }

    #[test]
    fn unknown_id_reports_not_found() {
        let mut store = PlacementStore::default();
        let ghost = PlacedId::new("ghost");
        assert_eq!(store.set_scale(&ghost, 1.0), Err(TransformError::NotFound(ghost.clone())));
        assert_eq!(store.set_rotation(&ghost, 1.0), Err(TransformError::NotFound(ghost.clone())));
        assert_eq!(store.reset_transform(&ghost), Err(TransformError::NotFound(ghost.clone())));
        assert!(store.remove(&ghost).is_none());
    }

    #[test]
    fn reset_restores_identity() {
        let mut store = PlacementStore::default();
        let id = store.place(&chair(), ScreenPoint::new(200.0, 400.0), SCREEN);
        store.set_scale(&id, 2.5).unwrap();
        store.set_rotation(&id, 45.0).unwrap();
        store.reset_transform(&id).unwrap();
        let item = store.get(&id).unwrap();
        assert_eq!(item.scale, Vec3::ONE);
        assert_eq!(item.rotation, Vec3::ZERO);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut store = PlacementStore::default();
        let ids: Vec<PlacedId> = (0..3)
            .map(|i| store.place(&chair(), ScreenPoint::new(100.0 * i as f32, 400.0), SCREEN))
            .collect();

        let removed = store.remove(&ids[1]).unwrap();
        assert_eq!(removed.placed_id, ids[1]);
        let remaining: Vec<&PlacedId> = store.items().iter().map(|i| &i.placed_id).collect();
        assert_eq!(remaining, vec![&ids[0], &ids[2]]);
        assert!(store.remove(&ids[1]).is_none());
    }
}
