//! Circle collision primitive

use crate::foundation::math::Vec2;

/// A circular collision volume in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center position
    pub center: Vec2,
    /// Radius
    pub radius: f32,
}

impl Circle {
    /// Create a circle from its center coordinates and radius
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            radius,
        }
    }

    /// Distance between the two centers
    pub fn distance_to(&self, other: &Self) -> f32 {
        (other.center - self.center).norm()
    }

    /// Whether the circles overlap
    ///
    /// Circles that exactly touch do not overlap. The test is symmetric.
    pub fn intersects(&self, other: &Self) -> bool {
        self.distance_to(other) < self.radius + other.radius
    }

    /// How far the circles overlap (0.0 if they do not)
    pub fn penetration_depth(&self, other: &Self) -> f32 {
        (self.radius + other.radius - self.distance_to(other)).max(0.0)
    }

    /// Unit vector pointing from this circle's center toward `other`'s
    ///
    /// Coincident centers yield [`Circle::fallback_normal`] instead of NaN.
    pub fn contact_normal(&self, other: &Self) -> Vec2 {
        let delta = other.center - self.center;
        let distance = delta.norm();
        if distance > f32::EPSILON {
            delta / distance
        } else {
            Self::fallback_normal()
        }
    }

    /// Normal used when two centers coincide and no direction can be derived
    pub fn fallback_normal() -> Vec2 {
        Vec2::new(1.0, 0.0)
    }
}
