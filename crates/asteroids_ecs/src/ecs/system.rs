//! System trait

use crate::ecs::World;

/// A per-tick procedure over every entity carrying a given component combination
pub trait System {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Run the system to completion for one tick
    fn run(&mut self, world: &mut World, delta_time: f32);
}
