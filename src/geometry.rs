//! Screen and world coordinates, and the fixed-scale mapping between them.
//!
//! The simulated scene has no camera pose: a tap at screen pixel `(sx, sy)`
//! lands on the floor plane at `x = (sx - W/2) / ppm`, `z = (sy - H/2) / ppm`
//! with `y = 0`. Projection back to the screen is the exact inverse.

use serde::{Deserialize, Serialize};

/// A point in world space, in meters (or degrees / scale factors when used
/// for rotation and scale).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Vec3 = Vec3 { x: 1.0, y: 1.0, z: 1.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }
}

/// A tap or projected position in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: ScreenPoint) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Fixed pixels-per-meter mapping centered on the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapping {
    pub pixels_per_meter: f32,
}

impl Default for ScreenMapping {
    fn default() -> Self {
        Self {
            pixels_per_meter: 100.0,
        }
    }
}

impl ScreenMapping {
    /// `None` unless the factor is finite and positive.
    pub fn new(pixels_per_meter: f32) -> Option<Self> {
        (pixels_per_meter.is_finite() && pixels_per_meter > 0.0).then_some(Self { pixels_per_meter })
    }

    /// Screen tap to a floor position (`y` is always 0).
    pub fn to_world(&self, tap: ScreenPoint, screen: ScreenSize) -> Vec3 {
        let center = screen.center();
        Vec3 {
            x: (tap.x - center.x) / self.pixels_per_meter,
            y: 0.0,
            z: (tap.y - center.y) / self.pixels_per_meter,
        }
    }

    /// World position back to the screen; height is ignored.
    pub fn to_screen(&self, position: Vec3, screen: ScreenSize) -> ScreenPoint {
        let center = screen.center();
        ScreenPoint {
            x: position.x * self.pixels_per_meter + center.x,
            y: position.z * self.pixels_per_meter + center.y,
        }
    }

    pub fn meters_to_pixels(&self, meters: f32) -> f32 {
        meters * self.pixels_per_meter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_tap_maps_to_origin() {
        let mapping = ScreenMapping::default();
        let screen = ScreenSize::new(400.0, 800.0);
        assert_eq!(mapping.to_world(ScreenPoint::new(200.0, 400.0), screen), Vec3::ZERO);
    }

    #[test]
    fn vertical_screen_axis_maps_to_depth() {
        let mapping = ScreenMapping::default();
        let screen = ScreenSize::new(400.0, 800.0);
        let p = mapping.to_world(ScreenPoint::new(150.0, 650.0), screen);
        assert_eq!(p, Vec3::new(-0.5, 0.0, 2.5));
        assert_eq!(mapping.to_screen(p, screen), ScreenPoint::new(150.0, 650.0));
    }

    #[test]
    fn new_rejects_degenerate_factors() {
        assert_eq!(ScreenMapping::new(50.0).map(|m| m.pixels_per_meter), Some(50.0));
        assert!(ScreenMapping::new(0.0).is_none());
        assert!(ScreenMapping::new(-100.0).is_none());
        assert!(ScreenMapping::new(f32::NAN).is_none());
        assert!(ScreenMapping::new(f32::INFINITY).is_none());
    }

    #[test]
    fn projection_ignores_height() {
        let mapping = ScreenMapping::default();
        let screen = ScreenSize::new(400.0, 800.0);
        let a = mapping.to_screen(Vec3::new(1.0, 0.0, 1.0), screen);
        let b = mapping.to_screen(Vec3::new(1.0, 7.0, 1.0), screen);
        assert_eq!(a, b);
    }
}
