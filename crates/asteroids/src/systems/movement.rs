//! Movement system
//!
//! Integrates velocity and spin. The player wraps around the screen edges;
//! anything else that drifts past the padded bounds is destroyed.

use asteroids_ecs::prelude::*;

use crate::components::{Player, Position, Rotation, Velocity};
use crate::screen::Screen;

/// Position and rotation integration with wrap/cull
pub struct MovementSystem {
    cull_padding: f32,
}

impl MovementSystem {
    /// Create a movement system culling non-player entities `cull_padding` past the edges
    pub const fn new(cull_padding: f32) -> Self {
        Self { cull_padding }
    }
}

impl System for MovementSystem {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn run(&mut self, world: &mut World, delta_time: f32) {
        let Some(screen) = world.resource::<Screen>().copied() else {
            log::warn!("MovementSystem: no Screen resource, skipping tick");
            return;
        };

        for entity in world.entities_with::<Position>() {
            let velocity = world.get::<Velocity>(entity).copied();
            let is_player = world.has::<Player>(entity);

            if let Some(rotation) = world.get_mut::<Rotation>(entity) {
                rotation.angle += rotation.rotation_speed * delta_time;
            }

            let Some(position) = world.get_mut::<Position>(entity) else {
                continue;
            };
            if let Some(velocity) = velocity {
                position.x += velocity.dx * delta_time;
                position.y += velocity.dy * delta_time;
            }

            if is_player {
                position.x = wrap_coordinate(position.x, screen.width());
                position.y = wrap_coordinate(position.y, screen.height());
            } else if screen.is_beyond(position.x, position.y, self.cull_padding) {
                log::trace!("Culling off-screen entity {entity}");
                world.despawn(entity);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(Screen::new(800.0, 600.0));
        world
    }

    #[test]
    fn test_integrates_velocity_and_spin() {
        let mut world = world();
        let entity = world.spawn();
        world.insert(entity, Position::new(100.0, 100.0));
        world.insert(entity, Velocity { dx: 60.0, dy: -30.0, max_speed: 100.0 });
        world.insert(entity, Rotation { angle: 0.0, rotation_speed: 2.0 });

        MovementSystem::new(50.0).run(&mut world, 0.5);

        let position = *world.get::<Position>(entity).unwrap();
        assert_relative_eq!(position.x, 130.0);
        assert_relative_eq!(position.y, 85.0);
        assert_relative_eq!(world.get::<Rotation>(entity).unwrap().angle, 1.0);
    }

    #[test]
    fn test_spin_without_velocity() {
        let mut world = world();
        let entity = world.spawn();
        world.insert(entity, Position::new(10.0, 10.0));
        world.insert(entity, Rotation { angle: 1.0, rotation_speed: -1.0 });

        MovementSystem::new(50.0).run(&mut world, 0.25);
        assert_relative_eq!(world.get::<Rotation>(entity).unwrap().angle, 0.75);
    }

    #[test]
    fn test_player_wraps() {
        let mut world = world();
        let player = world.spawn();
        world.insert(player, Player::with_lives(3));
        world.insert(player, Position::new(795.0, 2.0));
        world.insert(player, Velocity { dx: 10.0, dy: -8.0, max_speed: 400.0 });

        MovementSystem::new(50.0).run(&mut world, 1.0);

        let position = *world.get::<Position>(player).unwrap();
        assert_relative_eq!(position.x, 5.0);
        assert_relative_eq!(position.y, 594.0);
        assert!(world.is_alive(player));
    }

    #[test]
    fn test_non_player_culled_past_padding() {
        let mut world = world();
        let near = world.spawn();
        world.insert(near, Position::new(-40.0, 300.0));
        let far = world.spawn();
        world.insert(far, Position::new(-60.0, 300.0));

        MovementSystem::new(50.0).run(&mut world, 1.0 / 60.0);

        assert!(world.is_alive(near));
        assert!(!world.is_alive(far));
    }

    #[test]
    fn test_reads_screen_fresh_each_tick() {
        let mut world = world();
        let player = world.spawn();
        world.insert(player, Player::with_lives(3));
        world.insert(player, Position::new(500.0, 100.0));

        if let Some(screen) = world.resource_mut::<Screen>() {
            screen.resize(400.0, 600.0);
        }
        MovementSystem::new(50.0).run(&mut world, 1.0 / 60.0);
        assert_relative_eq!(world.get::<Position>(player).unwrap().x, 100.0);
    }

    #[test]
    fn test_player_folded_back_after_large_shrink() {
        let mut world = world();
        let player = world.spawn();
        world.insert(player, Player::with_lives(3));
        world.insert(player, Position::new(1100.0, 1500.0));

        if let Some(screen) = world.resource_mut::<Screen>() {
            screen.resize(400.0, 600.0);
        }
        MovementSystem::new(50.0).run(&mut world, 1.0 / 60.0);

        let position = *world.get::<Position>(player).unwrap();
        assert!((0.0..400.0).contains(&position.x), "x = {}", position.x);
        assert!((0.0..600.0).contains(&position.y), "y = {}", position.y);
        assert_relative_eq!(position.x, 300.0);
        assert_relative_eq!(position.y, 300.0);
    }
}
