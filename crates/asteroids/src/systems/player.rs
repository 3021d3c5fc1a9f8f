//! Player system
//!
//! Turns the player's intent into rotation, thrust and bullets.

use asteroids_ecs::foundation::math::heading;
use asteroids_ecs::prelude::*;

use crate::components::{Input, Player, Position, Rotation, Velocity};
use crate::config::{BulletConfig, ShipConfig};
use crate::factory;

/// Applies player intent to the ship
pub struct PlayerSystem {
    thrust_force: f32,
    rotation_speed: f32,
    bullet: BulletConfig,
}

impl PlayerSystem {
    /// Create a player system from ship and bullet settings
    pub fn new(ship: &ShipConfig, bullet: BulletConfig) -> Self {
        Self {
            thrust_force: ship.thrust_force,
            rotation_speed: ship.rotation_speed,
            bullet,
        }
    }
}

impl System for PlayerSystem {
    fn name(&self) -> &'static str {
        "player"
    }

    fn run(&mut self, world: &mut World, delta_time: f32) {
        for entity in world.entities_with::<Player>() {
            let is_game_over = world.get::<Player>(entity).is_some_and(|p| p.is_game_over);
            if is_game_over {
                continue;
            }
            let mut input = match world.get::<Input>(entity) {
                Some(input) => *input,
                None => continue,
            };

            if let Some(rotation) = world.get_mut::<Rotation>(entity) {
                rotation.angle += input.rotate * self.rotation_speed;
            }
            let angle = world.get::<Rotation>(entity).map_or(0.0, |r| r.angle);

            if let Some(velocity) = world.get_mut::<Velocity>(entity) {
                let mut v = velocity.as_vec();
                if input.forward {
                    v += heading(angle) * self.thrust_force * delta_time;
                }
                velocity.set_clamped(v);
            }

            if let Some(player) = world.get_mut::<Player>(entity) {
                player.is_thrusting = input.forward;
            }

            if input.shoot {
                if let Some(position) = world.get::<Position>(entity).map(Position::as_vec) {
                    factory::spawn_bullet(world, &self.bullet, position, angle, entity);
                }
                input.shoot = false;
                world.insert(entity, input);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Bullet;
    use approx::assert_relative_eq;

    fn setup() -> (World, PlayerSystem, Entity) {
        let mut world = World::new();
        let ship = factory::spawn_ship(&mut world, &ShipConfig::default(), Vec2::new(100.0, 100.0));
        let system = PlayerSystem::new(&ShipConfig::default(), BulletConfig::default());
        (world, system, ship)
    }

    #[test]
    fn test_rotation_per_tick() {
        let (mut world, mut system, ship) = setup();
        world.get_mut::<Input>(ship).unwrap().rotate = -1.0;
        system.run(&mut world, 1.0 / 60.0);
        assert_relative_eq!(world.get::<Rotation>(ship).unwrap().angle, -0.1);
    }

    #[test]
    fn test_thrust_never_exceeds_cap() {
        let (mut world, mut system, ship) = setup();
        world.get_mut::<Input>(ship).unwrap().forward = true;
        world.get_mut::<Velocity>(ship).unwrap().dx = 399.0;

        system.run(&mut world, 1.0);
        let velocity = *world.get::<Velocity>(ship).unwrap();
        assert!(velocity.speed() <= velocity.max_speed + 1e-3);
        assert!(world.get::<Player>(ship).unwrap().is_thrusting);
    }

    #[test]
    fn test_shoot_spawns_one_bullet_and_clears_flag() {
        let (mut world, mut system, ship) = setup();
        world.get_mut::<Input>(ship).unwrap().shoot = true;

        system.run(&mut world, 1.0 / 60.0);
        system.run(&mut world, 1.0 / 60.0);

        assert_eq!(world.count::<Bullet>(), 1);
        assert!(!world.get::<Input>(ship).unwrap().shoot);
        let (_, bullet) = world.query::<Bullet>().next().unwrap();
        assert_eq!(bullet.shooter, ship);
    }

    #[test]
    fn test_game_over_ignores_input() {
        let (mut world, mut system, ship) = setup();
        world.get_mut::<Player>(ship).unwrap().is_game_over = true;
        world.get_mut::<Input>(ship).unwrap().shoot = true;
        system.run(&mut world, 1.0 / 60.0);
        assert_eq!(world.count::<Bullet>(), 0);
    }
}
