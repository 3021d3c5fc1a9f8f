//! Game aggregate
//!
//! Builds the world from a [`GameConfig`], registers the systems in their
//! fixed order and owns the player entity for the lifetime of the process.

use std::sync::Arc;

use asteroids_ecs::prelude::*;

use crate::components::Player;
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::factory;
use crate::highscore::{HighScoreStore, ScoreEntry};
use crate::input::DeviceState;
use crate::render::{self, DrawItem, Hud};
use crate::rng::GameRng;
use crate::screen::Screen;
use crate::systems::{
    AsteroidSpawnerSystem, CollisionSystem, ExplosionSystem, InputSystem, InvulnerabilitySystem,
    LifetimeSystem, MovementSystem, PlayerSystem, ScoreSystem,
};

/// A running game
pub struct Game {
    world: World,
    config: GameConfig,
    player: Entity,
    high_scores: Arc<dyn HighScoreStore>,
}

impl Game {
    /// Build a game: ship in the centre, starting asteroid field, all systems
    pub fn new(config: GameConfig, high_scores: Arc<dyn HighScoreStore>) -> GameResult<Self> {
        validate(&config)?;

        let mut world = World::new();
        let screen = Screen::new(config.screen.width, config.screen.height);
        world.insert_resource(screen);
        world.insert_resource(DeviceState::new());
        world.insert_resource(GameRng::from_seed(config.simulation.seed));

        let player = factory::spawn_ship(&mut world, &config.ship, screen.center());
        factory::spawn_asteroid_field(&mut world, &config.asteroid, screen, screen.center());

        world.add_system(Box::new(InputSystem::new(config.ship.clone(), config.asteroid.clone())));
        world.add_system(Box::new(PlayerSystem::new(&config.ship, config.bullet.clone())));
        world.add_system(Box::new(MovementSystem::new(config.simulation.cull_padding)));
        world.add_system(Box::new(InvulnerabilitySystem::new()));
        world.add_system(Box::new(CollisionSystem::new(&config)));
        world.add_system(Box::new(AsteroidSpawnerSystem::new(
            config.spawner.clone(),
            config.asteroid.max_spin,
        )));
        world.add_system(Box::new(ExplosionSystem::new()));
        world.add_system(Box::new(LifetimeSystem::new()));
        world.add_system(Box::new(ScoreSystem::new(Arc::clone(&high_scores))));

        log::info!(
            "Game started: {}x{} screen, {} entities, systems {:?}",
            screen.width(),
            screen.height(),
            world.entity_count(),
            world.system_names()
        );

        Ok(Self {
            world,
            config,
            player,
            high_scores,
        })
    }

    /// Advance one fixed step
    pub fn step(&mut self) {
        self.world.update(self.config.simulation.time_step);
    }

    /// Advance by an explicit step
    pub fn update(&mut self, delta_time: f32) {
        self.world.update(delta_time);
    }

    /// Start a fresh game in place, keeping the player entity
    pub fn restart(&mut self) {
        let screen = self.screen();
        factory::reset_ship(&mut self.world, self.player, &self.config.ship, screen.center());
        factory::clear_asteroids(&mut self.world);
        factory::spawn_asteroid_field(&mut self.world, &self.config.asteroid, screen, screen.center());
        log::info!("Game restarted");
    }

    /// Apply a window resize; takes effect on the next tick
    pub fn resize(&mut self, width: f32, height: f32) {
        if let Some(screen) = self.world.resource_mut::<Screen>() {
            screen.resize(width, height);
        }
    }

    /// Device state for the platform layer to fill in between ticks
    pub fn device_mut(&mut self) -> Option<&mut DeviceState> {
        self.world.resource_mut::<DeviceState>()
    }

    /// Current screen bounds
    pub fn screen(&self) -> Screen {
        self.world
            .resource::<Screen>()
            .copied()
            .unwrap_or_else(|| Screen::new(self.config.screen.width, self.config.screen.height))
    }

    /// The player entity
    pub const fn player(&self) -> Entity {
        self.player
    }

    /// Player state
    pub fn player_state(&self) -> GameResult<Player> {
        Ok(*self.world.try_get::<Player>(self.player)?)
    }

    /// Whether the current game has ended
    pub fn is_game_over(&self) -> bool {
        self.world.get::<Player>(self.player).is_some_and(|p| p.is_game_over)
    }

    /// What to draw this frame
    pub fn draw_list(&self) -> Vec<DrawItem> {
        render::collect(&self.world)
    }

    /// HUD state
    pub fn hud(&self) -> Option<Hud> {
        render::hud(&self.world)
    }

    /// Best recorded scores
    pub fn top_scores(&self) -> Vec<ScoreEntry> {
        self.high_scores.top_scores()
    }

    /// Configuration the game was built from
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The simulation world
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the simulation world
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

/// Reject configurations the simulation cannot run with
fn validate(config: &GameConfig) -> GameResult<()> {
    // Values that feed random ranges; NaN or infinite bounds make sampling panic
    let sampled = [
        (config.asteroid.min_speed, "asteroid.min_speed"),
        (config.asteroid.max_speed, "asteroid.max_speed"),
        (config.asteroid.max_spin, "asteroid.max_spin"),
        (config.spawner.min_speed, "spawner.min_speed"),
        (config.spawner.max_speed, "spawner.max_speed"),
        (config.spawner.angle_jitter, "spawner.angle_jitter"),
        (config.collision.tangent_jitter, "collision.tangent_jitter"),
    ];
    if let Some((_, name)) = sampled.iter().find(|(value, _)| !value.is_finite()) {
        return Err(GameError::InvalidConfig(format!("{name} must be a finite number")));
    }

    let checks = [
        (config.screen.width > 0.0 && config.screen.height > 0.0, "screen size must be positive"),
        (config.simulation.time_step > 0.0, "simulation.time_step must be positive"),
        (config.ship.collider_radius > 0.0, "ship.collider_radius must be positive"),
        (config.bullet.collider_radius > 0.0, "bullet.collider_radius must be positive"),
        (config.ship.starting_lives > 0, "ship.starting_lives must be at least 1"),
        (
            config.spawner.min_speed <= config.spawner.max_speed,
            "spawner.min_speed must not exceed spawner.max_speed",
        ),
        (
            config.asteroid.min_speed <= config.asteroid.max_speed,
            "asteroid.min_speed must not exceed asteroid.max_speed",
        ),
    ];

    match checks.iter().find(|(ok, _)| !ok) {
        Some((_, message)) => Err(GameError::InvalidConfig((*message).to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscore::HighScoreTable;

    fn seeded() -> GameConfig {
        let mut config = GameConfig::default();
        config.simulation.seed = Some(1);
        config
    }

    #[test]
    fn test_system_order() {
        let game = Game::new(seeded(), Arc::new(HighScoreTable::new())).unwrap();
        assert_eq!(
            game.world().system_names(),
            vec![
                "input",
                "player",
                "movement",
                "invulnerability",
                "collision",
                "asteroid_spawner",
                "explosion",
                "lifetime",
                "score"
            ]
        );
    }

    #[test]
    fn test_genesis() {
        let game = Game::new(seeded(), Arc::new(HighScoreTable::new())).unwrap();
        let player = game.player_state().unwrap();
        assert_eq!(player.lives, 3);
        assert_eq!(game.world().count::<crate::components::Asteroid>(), 4);
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = seeded();
        config.simulation.time_step = 0.0;
        let result = Game::new(config, Arc::new(HighScoreTable::new()));
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_non_finite_sampling_bounds_rejected() {
        let mut config = seeded();
        config.asteroid.min_speed = f32::NAN;
        let result = Game::new(config, Arc::new(HighScoreTable::new()));
        assert!(
            matches!(result, Err(GameError::InvalidConfig(ref message)) if message.contains("asteroid.min_speed"))
        );

        let mut config = seeded();
        config.spawner.max_speed = f32::INFINITY;
        let result = Game::new(config, Arc::new(HighScoreTable::new()));
        assert!(
            matches!(result, Err(GameError::InvalidConfig(ref message)) if message.contains("spawner.max_speed"))
        );
    }

    #[test]
    fn test_nan_speed_from_toml_rejected() {
        let config: GameConfig = toml::from_str("[asteroid]\nmax_speed = nan\n").unwrap();
        assert!(config.asteroid.max_speed.is_nan());
        let result = Game::new(config, Arc::new(HighScoreTable::new()));
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }
}
