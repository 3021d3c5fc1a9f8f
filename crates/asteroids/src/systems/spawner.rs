//! Asteroid spawner system
//!
//! Feeds a new large asteroid in from a random screen edge every few
//! seconds while the number of large asteroids is under the cap.

use asteroids_ecs::foundation::math::heading;
use asteroids_ecs::foundation::time::age_expired;
use asteroids_ecs::prelude::*;

use crate::components::{Asteroid, AsteroidSize};
use crate::config::SpawnerConfig;
use crate::factory::{self, AsteroidSpawn};
use crate::rng::{with_rng, GameRng};
use crate::screen::Screen;

/// Time-driven asteroid population control
pub struct AsteroidSpawnerSystem {
    config: SpawnerConfig,
    max_spin: f32,
    since_last_spawn: f32,
}

impl AsteroidSpawnerSystem {
    /// Create a spawner; `max_spin` bounds the passive spin of new asteroids
    pub const fn new(config: SpawnerConfig, max_spin: f32) -> Self {
        Self {
            config,
            max_spin,
            since_last_spawn: 0.0,
        }
    }

    /// Seconds accumulated towards the next spawn
    pub const fn since_last_spawn(&self) -> f32 {
        self.since_last_spawn
    }

    fn plan(&self, rng: &mut GameRng, screen: Screen) -> AsteroidSpawn {
        let position = edge_point(rng, screen);
        let to_center = screen.center() - position;
        let angle = to_center.y.atan2(to_center.x) + rng.symmetric(self.config.angle_jitter);
        let speed = rng.between(self.config.min_speed, self.config.max_speed);

        AsteroidSpawn::new(AsteroidSize::Large, position)
            .with_velocity(heading(angle) * speed)
            .with_rotation(factory::random_rotation(rng, self.max_spin))
    }
}

/// Uniformly chosen edge, then a uniform point along it
fn edge_point(rng: &mut GameRng, screen: Screen) -> Vec2 {
    match rng.below(4) {
        0 => Vec2::new(rng.unit() * screen.width(), 0.0),
        1 => Vec2::new(screen.width(), rng.unit() * screen.height()),
        2 => Vec2::new(rng.unit() * screen.width(), screen.height()),
        _ => Vec2::new(0.0, rng.unit() * screen.height()),
    }
}

impl System for AsteroidSpawnerSystem {
    fn name(&self) -> &'static str {
        "asteroid_spawner"
    }

    fn run(&mut self, world: &mut World, delta_time: f32) {
        self.since_last_spawn += delta_time;
        if !age_expired(self.since_last_spawn, self.config.interval) {
            return;
        }

        let large = world
            .query::<Asteroid>()
            .filter(|(_, asteroid)| asteroid.size == AsteroidSize::Large)
            .count();
        if large >= self.config.max_large_asteroids {
            return;
        }

        let Some(screen) = world.resource::<Screen>().copied() else {
            return;
        };
        let spawn = with_rng(world, |rng| self.plan(rng, screen));
        let entity = factory::spawn_asteroid(world, spawn);
        log::debug!(
            "Spawner: asteroid {entity} enters at ({:.0}, {:.0}), {large} large on field",
            spawn.position.x,
            spawn.position.y
        );
        self.since_last_spawn = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Position, Velocity};

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(Screen::new(800.0, 600.0));
        world.insert_resource(GameRng::seeded(11));
        world
    }

    #[test]
    fn test_waits_for_interval() {
        let mut world = world();
        let mut spawner = AsteroidSpawnerSystem::new(SpawnerConfig::default(), 1.0);

        for _ in 0..149 {
            spawner.run(&mut world, 1.0 / 60.0);
        }
        assert_eq!(world.count::<Asteroid>(), 0);

        spawner.run(&mut world, 1.0 / 60.0);
        assert_eq!(world.count::<Asteroid>(), 1);
        assert_eq!(spawner.since_last_spawn(), 0.0);
    }

    #[test]
    fn test_spawns_on_edge_heading_inward() {
        let mut world = world();
        let mut spawner = AsteroidSpawnerSystem::new(SpawnerConfig::default(), 1.0);

        for _ in 0..20 {
            spawner.run(&mut world, 2.5);
        }

        let screen = Screen::new(800.0, 600.0);
        for (entity, asteroid) in world.query::<Asteroid>() {
            assert_eq!(asteroid.size, AsteroidSize::Large);
            let position = world.get::<Position>(entity).unwrap().as_vec();
            let on_edge = position.x == 0.0
                || position.y == 0.0
                || position.x == screen.width()
                || position.y == screen.height();
            assert!(on_edge);

            let velocity = world.get::<Velocity>(entity).unwrap();
            assert!((50.0 - 1e-3..=100.0 + 1e-3).contains(&velocity.speed()));
            // Within 45 degrees of the centre, so never pointing away from it
            assert!(velocity.as_vec().dot(&(screen.center() - position)) > 0.0);
        }
    }

    #[test]
    fn test_respects_large_cap() {
        let mut world = world();
        let config = SpawnerConfig {
            max_large_asteroids: 3,
            ..SpawnerConfig::default()
        };
        let mut spawner = AsteroidSpawnerSystem::new(config, 1.0);

        for _ in 0..10 {
            spawner.run(&mut world, 3.0);
        }
        assert_eq!(world.count::<Asteroid>(), 3);
    }
}
