//! # Asteroids ECS
//!
//! A small, single-threaded Entity-Component-System runtime used by the
//! asteroids simulation.
//!
//! ## Features
//!
//! - **Entity Registry**: monotonically increasing ids, never reused
//! - **Component Store**: type-indexed storage created lazily per kind
//! - **World**: entities, components, resources and an ordered schedule
//! - **Physics**: circle overlap tests and a pluggable broad phase
//! - **Configuration**: TOML/RON loading for any serde type
//!
//! ## Quick Start
//!
//! ```rust
//! use asteroids_ecs::prelude::*;
//!
//! #[derive(Debug, Clone, Copy)]
//! struct Position { x: f32, y: f32 }
//! impl Component for Position {}
//!
//! struct Drift;
//!
//! impl System for Drift {
//!     fn name(&self) -> &'static str { "drift" }
//!
//!     fn run(&mut self, world: &mut World, delta_time: f32) {
//!         for entity in world.entities_with::<Position>() {
//!             if let Some(position) = world.get_mut::<Position>(entity) {
//!                 position.x += 10.0 * delta_time;
//!             }
//!         }
//!     }
//! }
//!
//! let mut world = World::new();
//! let entity = world.spawn();
//! world.insert(entity, Position { x: 0.0, y: 0.0 });
//! world.add_system(Box::new(Drift));
//! world.update(0.5);
//! assert_eq!(world.get::<Position>(entity).map(|p| p.x), Some(5.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod ecs;
pub mod foundation;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        ecs::{Component, ComponentStore, EcsError, Entity, EntityRegistry, Schedule, System, World},
        foundation::{
            math::{Vec2, clamp_speed, wrap_coordinate},
            time::{SimClock, TIME_EPSILON},
        },
        physics::{BroadPhase, AllPairs, Circle, CollisionPair},
    };
}
