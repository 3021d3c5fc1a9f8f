//! Math utilities and types
//!
//! 2D vector math on top of nalgebra.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Unit vector pointing along `angle` radians
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Scale `velocity` down so its magnitude does not exceed `max_speed`
///
/// Velocities already under the cap are returned unchanged.
pub fn clamp_speed(velocity: Vec2, max_speed: f32) -> Vec2 {
    let speed = velocity.norm();
    if speed > max_speed && speed > 0.0 {
        velocity * (max_speed / speed)
    } else {
        velocity
    }
}

/// Wrap a coordinate into `[0, max)`
///
/// `max` itself maps to `0`. Positions more than one extent outside (after the
/// field shrinks) are folded back in. A non-positive `max` yields `0`.
pub fn wrap_coordinate(value: f32, max: f32) -> f32 {
    if max <= 0.0 {
        return 0.0;
    }
    let wrapped = if value < 0.0 {
        value + max
    } else if value >= max {
        value - max
    } else {
        value
    };
    if (0.0..max).contains(&wrapped) {
        wrapped
    } else {
        // rem_euclid can round up to `max` for tiny negative inputs
        let folded = wrapped.rem_euclid(max);
        if folded >= max { 0.0 } else { folded }
    }
}

/// Signed shortest angular difference `target - current`, in `[-π, π)`
pub fn angle_difference(target: f32, current: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    (target - current + PI).rem_euclid(TAU) - PI
}
