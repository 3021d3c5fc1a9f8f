//! ECS error types
//!
//! Lookups through an entity id captured earlier (for example a bullet's
//! shooter) can fail because the entity has since been destroyed, or because
//! it never carried the requested kind. Both are ordinary outcomes that callers
//! are expected to handle by skipping the dependent action.

use thiserror::Error;

use crate::ecs::Entity;

/// Errors returned by fallible world lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
    /// The entity was destroyed or never existed
    #[error("entity {0} is not alive")]
    StaleEntity(Entity),

    /// The entity is alive but has no component of the requested kind
    #[error("entity {entity} has no {component} component")]
    MissingComponent {
        /// Entity that was queried
        entity: Entity,
        /// Type name of the missing component
        component: &'static str,
    },
}
