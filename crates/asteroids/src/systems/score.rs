//! Score system
//!
//! Bridges game-over state to the high-score store. A score is offered to
//! the store once per game-over, not once per tick.

use std::collections::HashSet;
use std::sync::Arc;

use asteroids_ecs::prelude::*;

use crate::components::Player;
use crate::highscore::HighScoreStore;

/// Records qualifying scores when a game ends
pub struct ScoreSystem {
    store: Arc<dyn HighScoreStore>,
    recorded: HashSet<Entity>,
}

impl ScoreSystem {
    /// Create a score system reporting to `store`
    pub fn new(store: Arc<dyn HighScoreStore>) -> Self {
        Self {
            store,
            recorded: HashSet::new(),
        }
    }
}

impl System for ScoreSystem {
    fn name(&self) -> &'static str {
        "score"
    }

    fn run(&mut self, world: &mut World, _delta_time: f32) {
        for (entity, player) in world.query::<Player>() {
            if !player.is_game_over {
                self.recorded.remove(&entity);
                continue;
            }
            if !self.recorded.insert(entity) {
                continue;
            }

            if self.store.is_high_score(player.score) {
                self.store.add_score(player.score);
                log::info!("New high score: {}", player.score);
            } else {
                log::info!("Game over with score {}", player.score);
            }
        }
    }
}
