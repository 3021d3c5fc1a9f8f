//! Game-specific components
//!
//! Every component is a plain value record; an entity takes part in a system
//! simply by carrying the components that system looks for.

use asteroids_ecs::foundation::time::age_expired;
use asteroids_ecs::prelude::*;

/// World-space position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Horizontal coordinate
    pub x: f32,

    /// Vertical coordinate
    pub y: f32,
}

impl Component for Position {}

impl Position {
    /// Create a position
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Position as a vector
    pub fn as_vec(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Overwrite from a vector
    pub fn set_vec(&mut self, v: Vec2) {
        self.x = v.x;
        self.y = v.y;
    }
}

/// Linear velocity with a per-entity speed cap
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    /// Horizontal velocity in units per second
    pub dx: f32,

    /// Vertical velocity in units per second
    pub dy: f32,

    /// Maximum speed
    pub max_speed: f32,
}

impl Component for Velocity {}

impl Velocity {
    /// Create a velocity at rest with the given cap
    pub const fn at_rest(max_speed: f32) -> Self {
        Self {
            dx: 0.0,
            dy: 0.0,
            max_speed,
        }
    }

    /// Velocity as a vector
    pub fn as_vec(&self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }

    /// Overwrite from a vector, clamped to `max_speed`
    pub fn set_clamped(&mut self, v: Vec2) {
        let v = clamp_speed(v, self.max_speed);
        self.dx = v.x;
        self.dy = v.y;
    }

    /// Current speed
    pub fn speed(&self) -> f32 {
        self.as_vec().norm()
    }
}

/// Heading and passive spin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    /// Heading in radians
    pub angle: f32,

    /// Passive spin in radians per second
    pub rotation_speed: f32,
}

impl Component for Rotation {}

/// What the renderer should draw for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderKind {
    /// Player ship
    Ship,

    /// Projectile
    Bullet,

    /// Asteroid of any size
    Asteroid,

    /// Explosion effect
    Explosion,
}

/// Visual tag and visibility flag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderable {
    /// What to draw
    pub kind: RenderKind,

    /// Visual scale factor
    pub scale: f32,

    /// Whether the entity is drawn this frame
    pub visible: bool,
}

impl Component for Renderable {}

impl Renderable {
    /// Visible renderable of the given kind and scale
    pub const fn new(kind: RenderKind, scale: f32) -> Self {
        Self {
            kind,
            scale,
            visible: true,
        }
    }
}

/// Authoritative game state for the human-controlled ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Player {
    /// Whether thrust is applied this tick (drives the flame, not physics)
    pub is_thrusting: bool,

    /// Current score
    pub score: u32,

    /// Remaining lives
    pub lives: u32,

    /// Set once the last life is lost
    pub is_game_over: bool,
}

impl Component for Player {}

impl Player {
    /// Fresh player state with the given number of lives
    pub const fn with_lives(lives: u32) -> Self {
        Self {
            is_thrusting: false,
            score: 0,
            lives,
            is_game_over: false,
        }
    }
}

/// Collider categories, used to dispatch collision response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderKind {
    /// Player ship
    Ship,

    /// Projectile
    Bullet,

    /// Asteroid
    Asteroid,
}

/// Circular collision volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Radius, always positive
    pub radius: f32,

    /// Dispatch category
    pub kind: ColliderKind,
}

impl Component for Collider {}

/// Per-tick intent, fully rewritten by the input system
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Input {
    /// Rotation intent in `[-1, 1]`
    pub rotate: f32,

    /// Thrust intent
    pub forward: bool,

    /// Fire intent
    pub shoot: bool,

    /// Last pointer x coordinate
    pub pointer_x: f32,

    /// Last pointer y coordinate
    pub pointer_y: f32,

    /// Whether a pointer is held
    pub pointer_down: bool,
}

impl Component for Input {}

/// Asteroid size categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AsteroidSize {
    /// Small asteroid (destroyed completely)
    Small,

    /// Medium asteroid (splits into small)
    Medium,

    /// Large asteroid (splits into medium)
    Large,
}

impl AsteroidSize {
    /// All sizes, smallest first
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Numeric size: 0 = small, 1 = medium, 2 = large
    pub const fn index(self) -> u8 {
        match self {
            Self::Small => 0,
            Self::Medium => 1,
            Self::Large => 2,
        }
    }

    const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Small),
            1 => Some(Self::Medium),
            2 => Some(Self::Large),
            _ => None,
        }
    }

    /// Get the scale factor for this size
    pub const fn scale_factor(self) -> f32 {
        match self {
            Self::Small => 0.5,
            Self::Medium => 1.0,
            Self::Large => 2.0,
        }
    }

    /// Collision radius for this size
    pub const fn radius(self) -> f32 {
        match self {
            Self::Small => 10.0,
            Self::Medium => 20.0,
            Self::Large => 40.0,
        }
    }

    /// Default speed cap for this size
    pub const fn max_speed(self) -> f32 {
        match self {
            Self::Small => 300.0,
            Self::Medium => 200.0,
            Self::Large => 100.0,
        }
    }

    /// Get the points awarded for destroying this size
    ///
    /// Smaller asteroids are harder to hit and worth more.
    pub const fn points(self) -> u32 {
        match self {
            Self::Small => 100,
            Self::Medium => 50,
            Self::Large => 20,
        }
    }

    /// Radius of the explosion left behind
    pub fn explosion_radius(self) -> f32 {
        20.0 + 10.0 * self.index() as f32
    }

    /// Get the next smaller size when split
    pub const fn split_into(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(index) => Self::from_index(index),
            None => None,
        }
    }
}

/// Asteroid component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asteroid {
    /// Asteroid size category
    pub size: AsteroidSize,
}

impl Component for Asteroid {}

/// Transient explosion effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explosion {
    /// Seconds since the explosion started
    pub age: f32,

    /// Age at which the explosion is removed
    pub max_age: f32,

    /// Final radius of the effect
    pub radius: f32,

    /// Number of debris particles to draw
    pub pieces: u32,
}

impl Component for Explosion {}

impl Explosion {
    /// Fraction of the effect's life that has passed, in `[0, 1]`
    pub fn progress(&self) -> f32 {
        if self.max_age <= 0.0 {
            1.0
        } else {
            (self.age / self.max_age).clamp(0.0, 1.0)
        }
    }

    /// Radius to draw at the current age
    pub fn current_radius(&self) -> f32 {
        self.radius * self.progress()
    }

    /// Opacity to draw at the current age
    pub fn alpha(&self) -> f32 {
        1.0 - self.progress()
    }
}

/// Timed grace period during which damage is ignored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Invulnerable {
    /// Total length of the window in seconds
    pub duration: f32,

    /// Seconds left
    pub timer: f32,
}

impl Component for Invulnerable {}

impl Invulnerable {
    /// Full window of `duration` seconds
    pub const fn new(duration: f32) -> Self {
        Self {
            duration,
            timer: duration,
        }
    }
}

/// Projectile back-reference to the entity that fired it
///
/// The shooter id is a lookup key only: a bullet never keeps its shooter
/// alive, and the shooter may be gone by the time the bullet hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet {
    /// Entity that fired the bullet
    pub shooter: Entity,
}

impl Component for Bullet {}

/// Fixed time window after which an entity is despawned
///
/// Measured against the simulation clock, so the same tick count expires the
/// same bullet regardless of frame pacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lifetime {
    /// Sim clock reading when the entity was spawned
    pub created_at: f32,

    /// Window length in seconds; non-positive never expires
    pub duration: f32,
}

impl Component for Lifetime {}

impl Lifetime {
    /// Window of `duration` seconds starting at `created_at`
    pub const fn new(created_at: f32, duration: f32) -> Self {
        Self {
            created_at,
            duration,
        }
    }

    /// Whether `current_time` has reached the end of the window, within `TIME_EPSILON`
    pub fn is_expired(&self, current_time: f32) -> bool {
        if self.duration <= 0.0 {
            false
        } else {
            age_expired(current_time - self.created_at, self.duration)
        }
    }
}
