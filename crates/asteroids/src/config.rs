//! Game configuration
//!
//! Every tunable constant of the simulation lives here. Each section has a
//! `Default` matching the stock game, and every field may be omitted from a
//! config file.

use asteroids_ecs::config::Config;
use serde::{Deserialize, Serialize};

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Screen bounds at start-up
    pub screen: ScreenConfig,

    /// Player ship settings
    pub ship: ShipConfig,

    /// Projectile settings
    pub bullet: BulletConfig,

    /// Asteroid field settings
    pub asteroid: AsteroidConfig,

    /// Collision response settings
    pub collision: CollisionConfig,

    /// Asteroid spawner settings
    pub spawner: SpawnerConfig,

    /// Explosion effect settings
    pub explosion: ExplosionConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Fixed-step simulation settings
    pub simulation: SimulationConfig,
}

impl Config for GameConfig {}

/// Screen configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Width in world units
    pub width: f32,

    /// Height in world units
    pub height: f32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
        }
    }
}

/// Player ship configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Starting lives
    pub starting_lives: u32,

    /// Speed cap
    pub max_speed: f32,

    /// Thrust acceleration in units per second squared
    pub thrust_force: f32,

    /// Radians turned per tick at full rotate intent
    pub rotation_speed: f32,

    /// Collision radius
    pub collider_radius: f32,

    /// Invulnerability window after spawn or respawn, in seconds
    pub invulnerable_duration: f32,

    /// Radius of the explosion left when the ship is hit
    pub explosion_radius: f32,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            max_speed: 400.0,
            thrust_force: 150.0,
            rotation_speed: 0.1,
            collider_radius: 15.0,
            invulnerable_duration: 3.0,
            explosion_radius: 30.0,
        }
    }
}

/// Bullet configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    /// Muzzle speed
    pub speed: f32,

    /// Lifetime in seconds
    pub lifetime: f32,

    /// Collision radius
    pub collider_radius: f32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            speed: 500.0,
            lifetime: 0.75,
            collider_radius: 2.0,
        }
    }
}

/// Asteroid field configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidConfig {
    /// Asteroids in the field at game start and restart
    pub initial_count: u32,

    /// Minimum distance between a genesis asteroid and the ship
    pub safe_spawn_distance: f32,

    /// Slowest genesis asteroid speed
    pub min_speed: f32,

    /// Fastest genesis asteroid speed
    pub max_speed: f32,

    /// Passive spin range, in radians per second either way
    pub max_spin: f32,

    /// Angular offset of each child from the parent heading on split
    pub split_angle: f32,

    /// Speed multiplier applied to children on split
    pub split_speed_factor: f32,

    /// Child speed cap as a multiple of the child's speed
    pub split_max_speed_factor: f32,
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            initial_count: 4,
            safe_spawn_distance: 150.0,
            min_speed: 50.0,
            max_speed: 100.0,
            max_spin: 1.0,
            split_angle: std::f32::consts::FRAC_PI_3,
            split_speed_factor: 1.5,
            split_max_speed_factor: 1.2,
        }
    }
}

/// Collision response configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Fraction of closing velocity preserved by an asteroid bounce
    pub restitution: f32,

    /// Random tangential impulse range, in units per second either way
    pub tangent_jitter: f32,

    /// Speed floor for asteroids after a bounce
    pub min_asteroid_speed: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            restitution: 0.8,
            tangent_jitter: 25.0,
            min_asteroid_speed: 100.0,
        }
    }
}

/// Asteroid spawner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    /// Minimum seconds between spawns
    pub interval: f32,

    /// Large asteroids allowed before spawning pauses
    pub max_large_asteroids: usize,

    /// Slowest spawn speed
    pub min_speed: f32,

    /// Fastest spawn speed
    pub max_speed: f32,

    /// Heading jitter around the screen centre, in radians either way
    pub angle_jitter: f32,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            interval: 2.5,
            max_large_asteroids: 8,
            min_speed: 50.0,
            max_speed: 100.0,
            angle_jitter: std::f32::consts::FRAC_PI_4,
        }
    }
}

/// Explosion effect configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionConfig {
    /// Lifetime in seconds
    pub max_age: f32,

    /// Debris particles per explosion
    pub pieces: u32,
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            max_age: 0.5,
            pieces: 12,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Fixed-step simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seconds per tick
    pub time_step: f32,

    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,

    /// Out-of-bounds margin before non-player entities are culled
    pub cull_padding: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0 / 60.0,
            seed: None,
            cull_padding: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_game() {
        let config = GameConfig::default();
        assert_eq!(config.ship.starting_lives, 3);
        assert_eq!(config.ship.max_speed, 400.0);
        assert_eq!(config.bullet.lifetime, 0.75);
        assert_eq!(config.spawner.max_large_asteroids, 8);
        assert_eq!(config.explosion.pieces, 12);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str(
            "[ship]\nstarting_lives = 5\n\n[simulation]\nseed = 7\n",
        )
        .unwrap();
        assert_eq!(config.ship.starting_lives, 5);
        assert_eq!(config.ship.thrust_force, 150.0);
        assert_eq!(config.simulation.seed, Some(7));
        assert_eq!(config.screen, ScreenConfig::default());
    }

    #[test]
    fn test_ron_section() {
        let config = GameConfig::from_ron_str("(collision: (restitution: 0.9))").unwrap();
        assert_eq!(config.collision.restitution, 0.9);
        assert_eq!(config.collision.min_asteroid_speed, 100.0);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = GameConfig::default();
        config.simulation.seed = Some(42);
        let text = config.to_toml_string().unwrap();
        assert_eq!(GameConfig::from_toml_str(&text).unwrap(), config);
    }
}
