// Test helper functions for building sessions and scenes
#![allow(dead_code)]

use std::time::Instant;

use furniture_ar::{Catalog, PlacedId, ScreenPoint, ScreenSize, SessionState};

/// Portrait phone-sized screen used throughout the tests.
pub const SCREEN: ScreenSize = ScreenSize {
    width: 400.0,
    height: 800.0,
};

pub fn catalog() -> Catalog {
    Catalog::bundled().expect("bundled catalog")
}

/// A started session whose surface has already been detected.
pub fn ready_session() -> SessionState {
    let mut session = SessionState::default();
    let ticket = session.start(Instant::now()).expect("permission granted");
    assert!(session.surface_detected(ticket));
    session
}

/// Select `catalog_id` and place it under `tap`.
pub fn place(session: &mut SessionState, catalog_id: &str, tap: ScreenPoint) -> PlacedId {
    let definition = catalog().find_by_id(catalog_id).expect("catalog id").clone();
    session.select_catalog_item(definition);
    session.place(tap, SCREEN).expect("placement accepted")
}
