//! Loading game configuration from disk

use std::path::PathBuf;
use std::sync::Arc;

use asteroids::highscore::HighScoreTable;
use asteroids::{Game, GameConfig, GameError};
use asteroids_ecs::config::{Config, ConfigError};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("asteroids_{}_{name}", std::process::id()))
}

#[test]
fn test_ron_file_round_trip() {
    let path = temp_path("game.ron");
    let mut config = GameConfig::default();
    config.ship.starting_lives = 5;
    config.simulation.seed = Some(17);

    config.save_to_file(&path).unwrap();
    let loaded = GameConfig::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, config);
}

#[test]
fn test_toml_file_drives_game() {
    let path = temp_path("game.toml");
    std::fs::write(
        &path,
        "[screen]\nwidth = 640.0\nheight = 480.0\n\n[asteroid]\ninitial_count = 2\n\n[simulation]\nseed = 3\n",
    )
    .unwrap();

    let config = GameConfig::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();
    let game = Game::new(config, Arc::new(HighScoreTable::new())).unwrap();

    assert_eq!(game.screen().width(), 640.0);
    assert_eq!(game.world().count::<asteroids::components::Asteroid>(), 2);
    assert_eq!(game.player_state().unwrap().lives, 3);
}

#[test]
fn test_missing_file_is_a_config_error() {
    let error = GameConfig::load_from_file(temp_path("missing.toml")).unwrap_err();
    assert!(matches!(error, ConfigError::Io(_)));

    let wrapped: GameError = error.into();
    assert!(wrapped.to_string().starts_with("configuration error"));
}
