//! System Scheduling
//!
//! Systems execute in the order they were added, once per tick, each one
//! running to completion before the next begins. There is no parallelism and
//! no suspension inside a tick, so systems never observe concurrent mutation.

use crate::ecs::{System, World};

/// Ordered list of systems executed once per tick
#[derive(Default)]
pub struct Schedule {
    systems: Vec<Box<dyn System>>,
}

impl Schedule {
    /// Create an empty schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a system; it runs after every system added before it
    pub fn add_system(&mut self, system: Box<dyn System>) {
        log::debug!("Schedule: adding system '{}' at position {}", system.name(), self.systems.len());
        self.systems.push(system);
    }

    /// Run every system in order
    pub fn run(&mut self, world: &mut World, delta_time: f32) {
        for system in &mut self.systems {
            log::trace!("Schedule: running '{}'", system.name());
            system.run(world, delta_time);
        }
    }

    /// Move every system of `other` to the end of this schedule
    pub fn append(&mut self, other: &mut Self) {
        self.systems.append(&mut other.systems);
    }

    /// Names of the scheduled systems in execution order
    pub fn system_names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|system| system.name()).collect()
    }

    /// Number of scheduled systems
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Whether no system is scheduled
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}
