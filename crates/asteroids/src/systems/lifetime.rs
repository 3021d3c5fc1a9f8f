//! Lifetime system

use asteroids_ecs::prelude::*;

use crate::components::Lifetime;

/// Destroys entities whose [`Lifetime`] has run out
#[derive(Debug, Default)]
pub struct LifetimeSystem;

impl LifetimeSystem {
    /// Create a lifetime system
    pub const fn new() -> Self {
        Self
    }
}

impl System for LifetimeSystem {
    fn name(&self) -> &'static str {
        "lifetime"
    }

    fn run(&mut self, world: &mut World, _delta_time: f32) {
        let now = world.elapsed();
        let expired: Vec<Entity> = world
            .query::<Lifetime>()
            .filter(|(_, lifetime)| lifetime.is_expired(now))
            .map(|(entity, _)| entity)
            .collect();

        for entity in expired {
            log::trace!("Lifetime expired for {entity}");
            world.despawn(entity);
        }
    }
}
