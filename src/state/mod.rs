//! State management types for the furniture placement screen.
//!
//! This module contains:
//! - Placed item and id types
//! - The placement store (place/transform/remove)
//! - Session state and tap dispatch

mod types;
mod placement;
mod session;

pub use types::*;
pub use placement::*;
pub use session::*;
