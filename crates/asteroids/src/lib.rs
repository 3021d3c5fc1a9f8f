//! # Asteroids
//!
//! The asteroids simulation: a player ship, asteroids that split when shot,
//! bullets, explosions and a high-score table, all running on the
//! `asteroids_ecs` runtime. Windowing, drawing and device polling live with
//! the host; it feeds [`input::DeviceState`], calls [`game::Game::step`] and
//! draws [`game::Game::draw_list`].

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod components;
pub mod config;
pub mod error;
pub mod factory;
pub mod game;
pub mod highscore;
pub mod input;
pub mod render;
pub mod rng;
pub mod screen;
pub mod systems;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use game::Game;
