use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::catalog::{Category, FurnitureDefinition};
use crate::geometry::Vec3;

/// Identifier of a placed item, unique within a process.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlacedId(String);

impl PlacedId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlacedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An instance of a catalog entry in the scene.
///
/// The definition is copied at placement time, so the item never follows
/// later changes to the catalog. Rotation is in degrees and only yaw (`y`)
/// is ever non-zero; scale is always uniform.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    pub placed_id: PlacedId,
    pub definition: FurnitureDefinition,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    /// Milliseconds since the Unix epoch.
    pub placed_at: u64,
}

impl PlacedItem {
    pub fn new(placed_id: PlacedId, definition: FurnitureDefinition, position: Vec3, placed_at: u64) -> Self {
        Self {
            placed_id,
            definition,
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            placed_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn category(&self) -> Category {
        self.definition.category
    }

    pub fn uniform_scale(&self) -> f32 {
        self.scale.x
    }

    pub fn yaw(&self) -> f32 {
        self.rotation.y
    }
}

/// Inclusive range for the uniform scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    min: f32,
    max: f32,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self { min: 0.5, max: 3.0 }
    }
}

impl ScaleBounds {
    /// `None` unless `0 < min <= max` and both are finite.
    pub fn new(min: f32, max: f32) -> Option<Self> {
        (min.is_finite() && max.is_finite() && min > 0.0 && min <= max).then_some(Self { min, max })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn clamp(&self, scale: f32) -> f32 {
        scale.clamp(self.min, self.max)
    }
}

/// Wrap any finite angle into `[0, 360)`.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Timestamp-based id source that never repeats, even when two placements
/// land in the same millisecond.
#[derive(Debug, Default)]
pub struct PlacedIdGenerator {
    last: u64,
}

impl PlacedIdGenerator {
    pub fn next_at(&mut self, millis: u64) -> PlacedId {
        let stamp = if millis > self.last { millis } else { self.last + 1 };
        self.last = stamp;
        PlacedId(stamp.to_string())
    }
}

pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
