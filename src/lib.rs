//! Furniture placement over a simulated AR view.
//!
//! The crate holds the presentation-independent core: the furniture
//! catalog, the placement store, hit-testing, and the simulated surface
//! detector, all driven through [`state::SessionState`]. The `furniture-ar`
//! binary puts a Slint window on top of it.

pub mod catalog;
pub mod config;
pub mod error;
pub mod geometry;
pub mod hit_test;
pub mod state;
pub mod surface;
pub mod visual;

pub use catalog::{Catalog, Category, CategoryFilter, FurnitureDefinition};
pub use config::AppConfig;
pub use error::{CatalogError, ConfigError, PlacementError, SessionError, TransformError};
pub use geometry::{ScreenMapping, ScreenPoint, ScreenSize, Vec3};
pub use state::{PlacedId, PlacedItem, PlacementStore, SessionState, TapOutcome};
pub use surface::{DetectionTicket, SurfaceDetector};
