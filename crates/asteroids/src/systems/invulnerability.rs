//! Invulnerability system
//!
//! Counts each invulnerability window down, blinking the entity about four
//! times a second, and removes the window once it runs out.

use asteroids_ecs::foundation::time::countdown_expired;
use asteroids_ecs::prelude::*;

use crate::components::{Invulnerable, Renderable};

/// Visibility toggles per second while invulnerable
const BLINK_RATE: f32 = 4.0;

/// Whether an entity is drawn at this point of its window
#[allow(clippy::cast_possible_truncation)]
pub fn blink_visible(timer: f32) -> bool {
    ((timer * BLINK_RATE).floor() as i64).rem_euclid(2) == 0
}

/// Countdown and blink state machine for [`Invulnerable`]
#[derive(Debug, Default)]
pub struct InvulnerabilitySystem;

impl InvulnerabilitySystem {
    /// Create an invulnerability system
    pub const fn new() -> Self {
        Self
    }
}

impl System for InvulnerabilitySystem {
    fn name(&self) -> &'static str {
        "invulnerability"
    }

    fn run(&mut self, world: &mut World, delta_time: f32) {
        for entity in world.entities_with::<Invulnerable>() {
            let timer = match world.get_mut::<Invulnerable>(entity) {
                Some(invulnerable) => {
                    invulnerable.timer -= delta_time;
                    invulnerable.timer
                }
                None => continue,
            };

            if countdown_expired(timer) {
                world.remove::<Invulnerable>(entity);
                if let Some(renderable) = world.get_mut::<Renderable>(entity) {
                    renderable.visible = true;
                }
                log::debug!("Invulnerability ended for {entity}");
                continue;
            }

            if let Some(renderable) = world.get_mut::<Renderable>(entity) {
                renderable.visible = blink_visible(timer);
            }
        }
    }
}
