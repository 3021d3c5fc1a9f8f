//! Per-tick simulation systems
//!
//! Registered by [`crate::game::Game`] in this order: input, player, movement,
//! invulnerability, collision, spawner, explosion, lifetime, score.

pub mod collision;
pub mod explosion;
pub mod input;
pub mod invulnerability;
pub mod lifetime;
pub mod movement;
pub mod player;
pub mod score;
pub mod spawner;

pub use collision::{split_asteroid, CollisionSystem};
pub use explosion::ExplosionSystem;
pub use input::InputSystem;
pub use invulnerability::InvulnerabilitySystem;
pub use lifetime::LifetimeSystem;
pub use movement::MovementSystem;
pub use player::PlayerSystem;
pub use score::ScoreSystem;
pub use spawner::AsteroidSpawnerSystem;
