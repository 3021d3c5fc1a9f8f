//! Read-only render snapshot
//!
//! After a tick the renderer takes an owned list of what to draw. Nothing
//! here mutates the world.

use asteroids_ecs::prelude::*;

use crate::components::{Explosion, Player, Position, RenderKind, Renderable, Rotation};

/// Explosion drawing parameters at the current age
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplosionDraw {
    /// Current radius
    pub radius: f32,

    /// Opacity in `[0, 1]`
    pub alpha: f32,

    /// Debris particle count
    pub pieces: u32,
}

/// One visible entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    /// Source entity
    pub entity: Entity,

    /// What to draw
    pub kind: RenderKind,

    /// World position
    pub position: Vec2,

    /// Heading in radians (0 for entities without rotation)
    pub angle: f32,

    /// Visual scale
    pub scale: f32,

    /// Thruster flame on (ships only)
    pub thrusting: bool,

    /// Explosion parameters (explosions only)
    pub explosion: Option<ExplosionDraw>,
}

/// Heads-up display state for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    /// Current score
    pub score: u32,

    /// Remaining lives
    pub lives: u32,

    /// Whether the game-over screen is showing
    pub is_game_over: bool,
}

/// Every visible entity, in entity order
pub fn collect(world: &World) -> Vec<DrawItem> {
    world
        .entities_with::<Renderable>()
        .into_iter()
        .filter_map(|entity| {
            let renderable = world.get::<Renderable>(entity)?;
            if !renderable.visible {
                return None;
            }
            let position = world.get::<Position>(entity)?;
            Some(DrawItem {
                entity,
                kind: renderable.kind,
                position: position.as_vec(),
                angle: world.get::<Rotation>(entity).map_or(0.0, |r| r.angle),
                scale: renderable.scale,
                thrusting: world.get::<Player>(entity).is_some_and(|p| p.is_thrusting),
                explosion: world.get::<Explosion>(entity).map(|explosion| ExplosionDraw {
                    radius: explosion.current_radius(),
                    alpha: explosion.alpha(),
                    pieces: explosion.pieces,
                }),
            })
        })
        .collect()
}

/// HUD state of the first player, if any
pub fn hud(world: &World) -> Option<Hud> {
    let entity = world.entities_with::<Player>().into_iter().next()?;
    world.get::<Player>(entity).map(|player| Hud {
        score: player.score,
        lives: player.lives,
        is_game_over: player.is_game_over,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_entities_are_skipped() {
        let mut world = World::new();
        let shown = world.spawn();
        world.insert(shown, Position::new(1.0, 2.0));
        world.insert(shown, Renderable::new(RenderKind::Bullet, 1.0));
        let hidden = world.spawn();
        world.insert(hidden, Position::new(3.0, 4.0));
        world.insert(hidden, Renderable { visible: false, ..Renderable::new(RenderKind::Ship, 1.0) });

        let items = collect(&world);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].entity, shown);
        assert_eq!(items[0].position, Vec2::new(1.0, 2.0));
        assert!(items[0].explosion.is_none());
    }

    #[test]
    fn test_explosion_fades() {
        let mut world = World::new();
        let entity = world.spawn();
        world.insert(entity, Position::new(0.0, 0.0));
        world.insert(entity, Renderable::new(RenderKind::Explosion, 1.0));
        world.insert(entity, Explosion { age: 0.4, max_age: 0.5, radius: 30.0, pieces: 12 });

        let draw = collect(&world)[0].explosion.unwrap();
        assert!((draw.radius - 24.0).abs() < 1e-3);
        assert!((draw.alpha - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_hud_without_player() {
        assert_eq!(hud(&World::new()), None);
    }
}
