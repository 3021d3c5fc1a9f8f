//! Screen-bounds collaborator
//!
//! The window layer owns the real size; the simulation reads this resource
//! fresh each tick so a resize between ticks takes effect immediately.

use asteroids_ecs::foundation::math::Vec2;

/// Current playfield bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    width: f32,
    height: f32,
}

impl Screen {
    /// Create bounds of the given size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width in world units
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height in world units
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Centre of the playfield
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Apply a window resize
    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!("Screen resized to {width}x{height}");
        self.width = width;
        self.height = height;
    }

    /// Whether a point lies more than `padding` outside the bounds
    pub fn is_beyond(&self, x: f32, y: f32, padding: f32) -> bool {
        x < -padding || x > self.width + padding || y < -padding || y > self.height + padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_beyond_padding() {
        let screen = Screen::new(800.0, 600.0);
        assert!(!screen.is_beyond(-49.0, 300.0, 50.0));
        assert!(screen.is_beyond(-51.0, 300.0, 50.0));
        assert!(screen.is_beyond(400.0, 651.0, 50.0));
        assert!(!screen.is_beyond(850.0, 650.0, 50.0));
    }

    #[test]
    fn test_resize_moves_center() {
        let mut screen = Screen::new(800.0, 600.0);
        screen.resize(1000.0, 400.0);
        assert_eq!(screen.center(), Vec2::new(500.0, 200.0));
    }
}
