//! Headless asteroids driver
//!
//! Runs the simulation at its fixed step with a scripted pilot: turn, thrust
//! and fire in bursts until the game ends or the tick budget runs out.
//!
//! Usage: `asteroids [config.toml|config.ron]`

use std::sync::Arc;

use asteroids::highscore::HighScoreTable;
use asteroids::input::Key;
use asteroids::{Game, GameConfig, GameResult};
use asteroids_ecs::config::Config;
use asteroids_ecs::foundation::logging;

/// Ten simulated minutes at the default step
const MAX_TICKS: u64 = 36_000;

fn main() -> GameResult<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load_from_file(&path)?,
        None => GameConfig::default(),
    };
    logging::init(&config.logging.level);

    let mut game = Game::new(config, Arc::new(HighScoreTable::new()))?;

    for tick in 0..MAX_TICKS {
        script_pilot(&mut game, tick);
        game.step();

        if tick % 600 == 0 {
            if let Some(hud) = game.hud() {
                log::info!(
                    "t={:.0}s score={} lives={} entities={}",
                    game.world().elapsed(),
                    hud.score,
                    hud.lives,
                    game.world().entity_count()
                );
            }
        }
        if game.is_game_over() {
            break;
        }
    }

    let state = game.player_state()?;
    log::info!(
        "Finished after {:.1}s with score {} (game over: {})",
        game.world().elapsed(),
        state.score,
        state.is_game_over
    );
    for (rank, entry) in game.top_scores().iter().enumerate() {
        log::info!("#{:<2} {:>6}", rank + 1, entry.value);
    }
    Ok(())
}

/// Spin slowly, thrust every other second and tap fire four times a second
fn script_pilot(game: &mut Game, tick: u64) {
    let Some(device) = game.device_mut() else {
        return;
    };

    device.press(Key::Right);
    if (tick / 60) % 2 == 0 {
        device.press(Key::Up);
    } else {
        device.release(Key::Up);
    }
    if tick % 15 == 0 {
        device.press(Key::Space);
    } else {
        device.release(Key::Space);
    }
}
