//! Broad-phase candidate pair generation

use crate::ecs::Entity;
use crate::physics::Circle;

/// Two entities that may be colliding
///
/// Always stores the smaller entity id first so `(a, b)` and `(b, a)` are the
/// same pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair {
    /// Entity with the smaller id
    pub entity_a: Entity,
    /// Entity with the larger id
    pub entity_b: Entity,
}

impl CollisionPair {
    /// Create a new normalized collision pair
    pub fn new(entity_a: Entity, entity_b: Entity) -> Self {
        if entity_a.id() < entity_b.id() {
            Self { entity_a, entity_b }
        } else {
            Self {
                entity_a: entity_b,
                entity_b: entity_a,
            }
        }
    }
}

/// Produces candidate pairs for the narrow phase
///
/// Implementations may return pairs that do not actually overlap; they must
/// never omit a pair that does.
pub trait BroadPhase {
    /// Candidate pairs among `bodies`, each unordered pair at most once
    fn candidate_pairs(&self, bodies: &[(Entity, Circle)]) -> Vec<CollisionPair>;
}

/// Brute-force broad phase: every unordered pair of distinct bodies
#[derive(Debug, Default, Clone, Copy)]
pub struct AllPairs;

impl BroadPhase for AllPairs {
    fn candidate_pairs(&self, bodies: &[(Entity, Circle)]) -> Vec<CollisionPair> {
        let mut pairs = Vec::with_capacity(bodies.len() * bodies.len().saturating_sub(1) / 2);
        for (i, (entity_a, _)) in bodies.iter().enumerate() {
            for (entity_b, _) in &bodies[i + 1..] {
                if entity_a != entity_b {
                    pairs.push(CollisionPair::new(*entity_a, *entity_b));
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_normalized() {
        let a = Entity::from_raw(3);
        let b = Entity::from_raw(1);
        assert_eq!(CollisionPair::new(a, b), CollisionPair::new(b, a));
        assert_eq!(CollisionPair::new(a, b).entity_a, b);
    }

    #[test]
    fn test_all_pairs_count() {
        let bodies: Vec<(Entity, Circle)> = (1..=4)
            .map(|id| (Entity::from_raw(id), Circle::new(0.0, 0.0, 1.0)))
            .collect();
        assert_eq!(AllPairs.candidate_pairs(&bodies).len(), 6);
        assert!(AllPairs.candidate_pairs(&bodies[..1]).is_empty());
    }
}
