//! Entity-Component-System implementation
//!
//! Entities are plain ids, components live in a type-indexed store and
//! systems run one after another against the [`World`].

pub mod component;
pub mod entity;
pub mod error;
pub mod scheduler;
pub mod storage;
pub mod system;
pub mod world;

pub use component::Component;
pub use entity::{Entity, EntityRegistry};
pub use error::EcsError;
pub use scheduler::Schedule;
pub use storage::ComponentStore;
pub use system::System;
pub use world::World;
