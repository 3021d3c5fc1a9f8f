//! Input system
//!
//! Maps raw device state onto each player's [`Input`] intent. While a player
//! is game-over, any key or a fresh pointer press restarts the game instead.

use asteroids_ecs::foundation::math::{angle_difference, Vec2};
use asteroids_ecs::prelude::*;

use crate::components::{Input, Player, Position, Rotation};
use crate::config::{AsteroidConfig, ShipConfig};
use crate::factory;
use crate::input::{DeviceState, Key, PointerState};
use crate::screen::Screen;

/// Angle error below which pointer steering stops turning
const STEER_DEADZONE: f32 = 0.1;

/// On-screen fire button, anchored to the bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireButton {
    /// Left edge
    pub min_x: f32,
    /// Right edge
    pub max_x: f32,
    /// Centre line measured up from the bottom of the screen
    pub offset_from_bottom: f32,
    /// Half height of the button
    pub half_height: f32,
}

impl Default for FireButton {
    fn default() -> Self {
        Self {
            min_x: 20.0,
            max_x: 180.0,
            offset_from_bottom: 100.0,
            half_height: 80.0,
        }
    }
}

impl FireButton {
    /// Whether a pointer at `(x, y)` is over the button
    pub fn contains(&self, screen: &Screen, x: f32, y: f32) -> bool {
        let center_y = screen.height() - self.offset_from_bottom;
        (self.min_x..=self.max_x).contains(&x)
            && (center_y - self.half_height..=center_y + self.half_height).contains(&y)
    }
}

/// Translates device state into player intent
pub struct InputSystem {
    ship: ShipConfig,
    asteroids: AsteroidConfig,
    fire_button: FireButton,
}

impl InputSystem {
    /// Create an input system that restarts games with the given settings
    pub fn new(ship: ShipConfig, asteroids: AsteroidConfig) -> Self {
        Self {
            ship,
            asteroids,
            fire_button: FireButton::default(),
        }
    }

    fn restart(&self, world: &mut World, player: Entity, screen: Screen) {
        let center = screen.center();
        factory::reset_ship(world, player, &self.ship, center);
        let cleared = factory::clear_asteroids(world);
        factory::spawn_asteroid_field(world, &self.asteroids, screen, center);
        log::info!("Restarting game for player {player} ({cleared} asteroids cleared)");
    }

    fn intent(&self, world: &World, player: Entity, device: &DeviceState, screen: &Screen) -> Input {
        let pointer = device.pointer();
        let mut input = Input {
            pointer_x: pointer.x,
            pointer_y: pointer.y,
            pointer_down: pointer.down,
            ..Input::default()
        };

        if pointer.down {
            if self.fire_button.contains(screen, pointer.x, pointer.y) {
                input.shoot = device.pointer_just_pressed();
            } else {
                steer_toward(world, player, pointer, &mut input);
            }
        }

        if device.is_pressed(Key::Left) || device.is_pressed(Key::A) {
            input.rotate = -1.0;
        }
        if device.is_pressed(Key::Right) || device.is_pressed(Key::D) {
            input.rotate = 1.0;
        }
        if device.is_pressed(Key::Up) || device.is_pressed(Key::W) {
            input.forward = true;
        }
        input.shoot = input.shoot || device.is_just_pressed(Key::Space);

        input
    }
}

/// Turn toward the pointer and thrust
fn steer_toward(world: &World, player: Entity, pointer: PointerState, input: &mut Input) {
    let Some(position) = world.get::<Position>(player) else {
        return;
    };

    let delta = Vec2::new(pointer.x, pointer.y) - position.as_vec();
    let target = delta.y.atan2(delta.x);
    if let Some(rotation) = world.get::<Rotation>(player) {
        let diff = angle_difference(target, rotation.angle);
        if diff.abs() > STEER_DEADZONE {
            input.rotate = diff.signum();
        }
    }
    input.forward = true;
}

impl System for InputSystem {
    fn name(&self) -> &'static str {
        "input"
    }

    fn run(&mut self, world: &mut World, _delta_time: f32) {
        let Some(mut device) = world.remove_resource::<DeviceState>() else {
            return;
        };
        let screen = world
            .resource::<Screen>()
            .copied()
            .unwrap_or_else(|| Screen::new(0.0, 0.0));

        for player in world.entities_with::<Player>() {
            let is_game_over = match world.get::<Player>(player) {
                Some(state) => state.is_game_over,
                None => continue,
            };

            if is_game_over {
                if device.any_pressed() || device.pointer_just_pressed() {
                    self.restart(world, player, screen);
                }
                continue;
            }

            let input = self.intent(world, player, &device, &screen);
            world.insert(player, input);
        }

        device.latch();
        world.insert_resource(device);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Asteroid;
    use crate::rng::GameRng;

    fn setup() -> (World, InputSystem, Entity) {
        let mut world = World::new();
        world.insert_resource(Screen::new(800.0, 600.0));
        world.insert_resource(DeviceState::new());
        world.insert_resource(GameRng::seeded(1));
        let ship = factory::spawn_ship(&mut world, &ShipConfig::default(), Vec2::new(400.0, 300.0));
        let system = InputSystem::new(ShipConfig::default(), AsteroidConfig::default());
        (world, system, ship)
    }

    fn device(world: &mut World) -> &mut DeviceState {
        world.resource_mut::<DeviceState>().unwrap()
    }

    #[test]
    fn test_keyboard_mapping() {
        let (mut world, mut system, ship) = setup();
        device(&mut world).press(Key::A);
        device(&mut world).press(Key::W);
        system.run(&mut world, 1.0 / 60.0);

        let input = *world.get::<Input>(ship).unwrap();
        assert_eq!(input.rotate, -1.0);
        assert!(input.forward);
        assert!(!input.shoot);
    }

    #[test]
    fn test_space_fires_once_while_held() {
        let (mut world, mut system, ship) = setup();
        device(&mut world).press(Key::Space);

        system.run(&mut world, 1.0 / 60.0);
        assert!(world.get::<Input>(ship).unwrap().shoot);

        system.run(&mut world, 1.0 / 60.0);
        assert!(!world.get::<Input>(ship).unwrap().shoot);
    }

    #[test]
    fn test_fire_button_shoots_on_press_only() {
        let (mut world, mut system, ship) = setup();
        device(&mut world).set_pointer(100.0, 500.0, true);

        system.run(&mut world, 1.0 / 60.0);
        let input = *world.get::<Input>(ship).unwrap();
        assert!(input.shoot);
        assert!(!input.forward);
        assert!(input.pointer_down);

        system.run(&mut world, 1.0 / 60.0);
        assert!(!world.get::<Input>(ship).unwrap().shoot);
    }

    #[test]
    fn test_pointer_steers_and_thrusts() {
        let (mut world, mut system, ship) = setup();
        // Straight below the ship: +90 degrees from heading 0
        device(&mut world).set_pointer(400.0, 400.0, true);
        system.run(&mut world, 1.0 / 60.0);

        let input = *world.get::<Input>(ship).unwrap();
        assert_eq!(input.rotate, 1.0);
        assert!(input.forward);
        assert!(!input.shoot);
    }

    #[test]
    fn test_pointer_ahead_does_not_turn() {
        let (mut world, mut system, ship) = setup();
        device(&mut world).set_pointer(700.0, 300.0, true);
        system.run(&mut world, 1.0 / 60.0);
        assert_eq!(world.get::<Input>(ship).unwrap().rotate, 0.0);
    }

    #[test]
    fn test_game_over_restart_on_key() {
        let (mut world, mut system, ship) = setup();
        if let Some(player) = world.get_mut::<Player>(ship) {
            player.lives = 0;
            player.score = 500;
            player.is_game_over = true;
        }
        factory::spawn_asteroid(
            &mut world,
            factory::AsteroidSpawn::new(crate::components::AsteroidSize::Large, Vec2::zeros()),
        );

        system.run(&mut world, 1.0 / 60.0);
        assert!(world.get::<Player>(ship).unwrap().is_game_over);

        device(&mut world).press(Key::Enter);
        system.run(&mut world, 1.0 / 60.0);

        let player = *world.get::<Player>(ship).unwrap();
        assert!(!player.is_game_over);
        assert_eq!(player.lives, 3);
        assert_eq!(player.score, 0);
        assert_eq!(world.get::<Position>(ship).map(Position::as_vec), Some(Vec2::new(400.0, 300.0)));
        assert_eq!(world.count::<Asteroid>(), 4);
    }

    #[test]
    fn test_fire_button_region() {
        let screen = Screen::new(800.0, 600.0);
        let button = FireButton::default();
        assert!(button.contains(&screen, 20.0, 420.0));
        assert!(button.contains(&screen, 180.0, 580.0));
        assert!(!button.contains(&screen, 181.0, 500.0));
        assert!(!button.contains(&screen, 100.0, 419.0));
    }
}
