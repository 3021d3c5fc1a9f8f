//! Game error types

use asteroids_ecs::{config::ConfigError, ecs::EcsError};
use thiserror::Error;

/// Errors surfaced by the game crate
#[derive(Error, Debug)]
pub enum GameError {
    /// Configuration could not be loaded or saved
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An ECS lookup failed
    #[error("ECS error: {0}")]
    Ecs(#[from] EcsError),

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;
