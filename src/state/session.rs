//! Session state for the placement screen and the tap dispatch rule.

use std::time::Instant;

use crate::catalog::FurnitureDefinition;
use crate::config::AppConfig;
use crate::error::{PlacementError, SessionError, TransformError};
use crate::geometry::{ScreenMapping, ScreenPoint, ScreenSize};
use crate::hit_test::DEFAULT_TAP_TOLERANCE;
use crate::state::placement::PlacementStore;
use crate::state::types::{PlacedId, PlacedItem, ScaleBounds};
use crate::surface::{DetectionTicket, SurfaceDetector};

/// Preset scale factors offered by the control panel.
pub const SCALE_PRESETS: [f32; 5] = [0.5, 0.75, 1.0, 1.5, 2.0];

/// Preset yaw angles offered by the control panel.
pub const ROTATION_PRESETS: [f32; 5] = [0.0, 45.0, 90.0, 180.0, 270.0];

/// What a tap on the scene did.
#[derive(Debug, Clone, PartialEq)]
pub enum TapOutcome {
    Placed(PlacedId),
    Rejected(PlacementError),
    Selected(PlacedId),
    Deselected,
}

/// Everything the screen owns: session flags, selections and placed items.
///
/// All transitions are synchronous. `revision` increases on every change so
/// the presentation layer can tell whether it needs to redraw.
#[derive(Debug)]
pub struct SessionState {
    permission_granted: bool,
    active: bool,
    surface: SurfaceDetector,
    selected_catalog_item: Option<FurnitureDefinition>,
    selected_placed_id: Option<PlacedId>,
    store: PlacementStore,
    revision: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(PlacementStore::default(), SurfaceDetector::default(), true)
    }
}

impl SessionState {
    pub fn new(store: PlacementStore, surface: SurfaceDetector, permission_granted: bool) -> Self {
        Self {
            permission_granted,
            active: false,
            surface,
            selected_catalog_item: None,
            selected_placed_id: None,
            store,
            revision: 0,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let placement = &config.placement;
        let scale_bounds = ScaleBounds::new(placement.min_scale, placement.max_scale).unwrap_or_else(|| {
            tracing::warn!(
                min = placement.min_scale,
                max = placement.max_scale,
                "invalid scale bounds, using defaults"
            );
            ScaleBounds::default()
        });
        let mapping = ScreenMapping::new(placement.pixels_per_meter).unwrap_or_else(|| {
            tracing::warn!(
                pixels_per_meter = placement.pixels_per_meter,
                "invalid pixels per meter, using default"
            );
            ScreenMapping::default()
        });
        let tap_tolerance = if placement.tap_tolerance_px.is_finite() && placement.tap_tolerance_px > 0.0 {
            placement.tap_tolerance_px
        } else {
            tracing::warn!(tolerance = placement.tap_tolerance_px, "invalid tap tolerance, using default");
            DEFAULT_TAP_TOLERANCE
        };
        let store = PlacementStore::new(mapping, tap_tolerance, scale_bounds);
        let surface = SurfaceDetector::new(config.session.surface_detection_delay());
        Self::new(store, surface, config.session.camera_permission_granted)
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn permission_granted(&self) -> bool {
        self.permission_granted
    }

    /// Record the outcome of the platform permission prompt.
    pub fn set_permission(&mut self, granted: bool) {
        if self.permission_granted != granted {
            self.permission_granted = granted;
            self.touch();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_detected()
    }

    pub fn surface(&self) -> &SurfaceDetector {
        &self.surface
    }

    fn reset_scene(&mut self) {
        self.store.clear();
        self.selected_placed_id = None;
        self.selected_catalog_item = None;
    }

    /// Begin a session. Clears the scene and schedules surface detection;
    /// the caller delivers the returned ticket when the delay has elapsed.
    pub fn start(&mut self, now: Instant) -> Result<DetectionTicket, SessionError> {
        if !self.permission_granted {
            return Err(SessionError::PermissionDenied);
        }
        self.reset_scene();
        self.active = true;
        let ticket = self.surface.start(now);
        self.touch();
        tracing::info!(delay_ms = self.surface.delay().as_millis() as u64, "session started");
        Ok(ticket)
    }

    /// End the session, discarding placed items and any pending detection.
    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.surface.cancel();
        self.reset_scene();
        self.touch();
        tracing::info!("session stopped");
    }

    /// Deliver a scheduled detection. `true` means the surface was just found.
    pub fn surface_detected(&mut self, ticket: DetectionTicket) -> bool {
        if !self.active {
            return false;
        }
        let fired = self.surface.fire(ticket);
        if fired {
            self.touch();
            tracing::info!("surface detected");
        }
        fired
    }

    /// Clock-driven variant of [`surface_detected`](Self::surface_detected).
    pub fn poll_surface(&mut self, now: Instant) -> bool {
        if !self.active {
            return false;
        }
        let fired = self.surface.poll(now);
        if fired {
            self.touch();
            tracing::info!("surface detected");
        }
        fired
    }

    pub fn select_catalog_item(&mut self, definition: FurnitureDefinition) {
        tracing::debug!(furniture = %definition.id, "catalog item selected");
        self.selected_catalog_item = Some(definition);
        self.touch();
    }

    pub fn clear_catalog_selection(&mut self) {
        if self.selected_catalog_item.take().is_some() {
            self.touch();
        }
    }

    pub fn selected_catalog_item(&self) -> Option<&FurnitureDefinition> {
        self.selected_catalog_item.as_ref()
    }

    pub fn selected_catalog_item_id(&self) -> Option<&str> {
        self.selected_catalog_item.as_ref().map(|d| d.id.as_str())
    }

    pub fn selected_placed_id(&self) -> Option<&PlacedId> {
        self.selected_placed_id.as_ref()
    }

    pub fn selected_placed_item(&self) -> Option<&PlacedItem> {
        self.selected_placed_id.as_ref().and_then(|id| self.store.get(id))
    }

    pub fn placed_items(&self) -> &[PlacedItem] {
        self.store.items()
    }

    pub fn store(&self) -> &PlacementStore {
        &self.store
    }

    /// Place the selected catalog item under `tap`.
    ///
    /// On success the catalog selection is cleared, so the user has to pick
    /// again before the next placement.
    pub fn place(&mut self, tap: ScreenPoint, screen: ScreenSize) -> Result<PlacedId, PlacementError> {
        if !self.active {
            return Err(PlacementError::SessionInactive);
        }
        let Some(definition) = self.selected_catalog_item.as_ref() else {
            return Err(PlacementError::SelectionOrSurfaceMissing);
        };
        if !self.surface.is_detected() {
            return Err(PlacementError::SelectionOrSurfaceMissing);
        }

        let placed_id = self.store.place(definition, tap, screen);
        self.selected_catalog_item = None;
        self.touch();
        Ok(placed_id)
    }

    /// A pending catalog selection always means "place", even when the tap
    /// lands on an existing item. Otherwise the tap selects whatever it hits,
    /// or clears the selection.
    pub fn handle_tap(&mut self, tap: ScreenPoint, screen: ScreenSize) -> TapOutcome {
        if self.selected_catalog_item.is_some() {
            return match self.place(tap, screen) {
                Ok(id) => TapOutcome::Placed(id),
                Err(e) => {
                    tracing::debug!(reason = e.reason(), "placement rejected");
                    TapOutcome::Rejected(e)
                }
            };
        }

        let hit = self.store.hit_test(tap, screen).cloned();
        if hit != self.selected_placed_id {
            self.selected_placed_id = hit.clone();
            self.touch();
        }
        match hit {
            Some(id) => TapOutcome::Selected(id),
            None => TapOutcome::Deselected,
        }
    }

    pub fn set_scale(&mut self, id: &PlacedId, scale: f32) -> Result<f32, TransformError> {
        let applied = self.store.set_scale(id, scale)?;
        self.touch();
        Ok(applied)
    }

    pub fn set_rotation(&mut self, id: &PlacedId, degrees: f32) -> Result<f32, TransformError> {
        let applied = self.store.set_rotation(id, degrees)?;
        self.touch();
        Ok(applied)
    }

    pub fn reset_transform(&mut self, id: &PlacedId) -> Result<(), TransformError> {
        self.store.reset_transform(id)?;
        self.touch();
        Ok(())
    }

    /// Remove an item, clearing the placed selection if it pointed at it.
    pub fn remove(&mut self, id: &PlacedId) -> Option<PlacedItem> {
        let removed = self.store.remove(id)?;
        if self.selected_placed_id.as_ref() == Some(id) {
            self.selected_placed_id = None;
        }
        self.touch();
        tracing::info!(placed_id = %id, "removed furniture");
        Some(removed)
    }

    /// One-line hint shown over the scene.
    pub fn instruction(&self) -> &'static str {
        if self.selected_catalog_item.is_some() {
            "Tap on a surface to place furniture"
        } else if self.has_surface() {
            "Select furniture to place or tap placed items to edit"
        } else {
            "Move your device to detect surfaces"
        }
    }
}
