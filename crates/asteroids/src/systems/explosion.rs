//! Explosion system

use asteroids_ecs::foundation::time::age_expired;
use asteroids_ecs::prelude::*;

use crate::components::Explosion;

/// Ages explosion effects and removes finished ones
#[derive(Debug, Default)]
pub struct ExplosionSystem;

impl ExplosionSystem {
    /// Create an explosion system
    pub const fn new() -> Self {
        Self
    }
}

impl System for ExplosionSystem {
    fn name(&self) -> &'static str {
        "explosion"
    }

    fn run(&mut self, world: &mut World, delta_time: f32) {
        for entity in world.entities_with::<Explosion>() {
            let finished = match world.get_mut::<Explosion>(entity) {
                Some(explosion) => {
                    explosion.age += delta_time;
                    age_expired(explosion.age, explosion.max_age)
                }
                None => continue,
            };

            if finished {
                world.despawn(entity);
            }
        }
    }
}
