//! Physics module for collision detection
//!
//! Circle-only collision volumes, a normalized collision pair type and a
//! pluggable broad phase. The default broad phase tests every pair, which is
//! fine for the tens of bodies a round contains; a spatial partition can be
//! dropped in behind [`BroadPhase`] without touching collision response.

pub mod broad_phase;
pub mod circle;

pub use broad_phase::{AllPairs, BroadPhase, CollisionPair};
pub use circle::Circle;
