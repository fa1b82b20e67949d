//! Callback handlers for the furniture window.
//!
//! This module contains all UI callback implementations organized by functionality:
//! - `session` - Permission gate, start/exit, simulated surface detection
//! - `catalog` - Category filter and furniture selection
//! - `scene` - Taps on the camera view (place or select)
//! - `controls` - Scale, rotation, reset and delete for the selected item

pub mod session;
pub mod catalog;
pub mod scene;
pub mod controls;
