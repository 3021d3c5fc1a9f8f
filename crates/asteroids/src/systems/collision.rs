//! Collision system
//!
//! Detection is circle-circle overlap over the candidate pairs produced by a
//! [`BroadPhase`]. Response is dispatched on the pair's collider kinds:
//!
//! - asteroid / asteroid: equal-mass elastic bounce with a speed floor and cap
//! - ship / asteroid: lose a life, respawn invulnerable or end the game
//! - bullet / asteroid: score for the shooter, split the asteroid, drop the bullet
//!
//! Entities destroyed by an earlier pair in the same pass are skipped, and
//! positions are re-read per pair so separations made earlier in the pass
//! are seen by later pairs.

use asteroids_ecs::foundation::math::heading;
use asteroids_ecs::prelude::*;

use crate::components::{
    Asteroid, Bullet, Collider, ColliderKind, Input, Invulnerable, Player, Position, Renderable,
    Rotation, Velocity,
};
use crate::config::{AsteroidConfig, CollisionConfig, ExplosionConfig, GameConfig, ShipConfig};
use crate::factory::{self, AsteroidSpawn};
use crate::rng::with_rng;
use crate::screen::Screen;

/// Pairwise collision detection and response
pub struct CollisionSystem {
    broad_phase: Box<dyn BroadPhase>,
    collision: CollisionConfig,
    asteroid: AsteroidConfig,
    ship: ShipConfig,
    explosion: ExplosionConfig,
}

impl CollisionSystem {
    /// Create a collision system using the all-pairs broad phase
    pub fn new(config: &GameConfig) -> Self {
        Self {
            broad_phase: Box::new(AllPairs),
            collision: config.collision.clone(),
            asteroid: config.asteroid.clone(),
            ship: config.ship.clone(),
            explosion: config.explosion.clone(),
        }
    }

    /// Replace the broad phase
    #[must_use]
    pub fn with_broad_phase(mut self, broad_phase: Box<dyn BroadPhase>) -> Self {
        self.broad_phase = broad_phase;
        self
    }

    /// Snapshot of every collidable body, sorted by entity id
    fn bodies(world: &World) -> Vec<(Entity, Circle)> {
        world
            .entities_with::<Collider>()
            .into_iter()
            .filter_map(|entity| Self::body(world, entity).map(|(_, circle)| (entity, circle)))
            .collect()
    }

    /// Current collider kind and circle of a live entity
    fn body(world: &World, entity: Entity) -> Option<(ColliderKind, Circle)> {
        if !world.is_alive(entity) {
            return None;
        }
        let collider = world.get::<Collider>(entity)?;
        let position = world.get::<Position>(entity)?;
        Some((
            collider.kind,
            Circle::new(position.x, position.y, collider.radius),
        ))
    }

    fn resolve(&self, world: &mut World, pair: CollisionPair) {
        let (a, b) = (pair.entity_a, pair.entity_b);
        let (Some((kind_a, circle_a)), Some((kind_b, circle_b))) =
            (Self::body(world, a), Self::body(world, b))
        else {
            log::trace!("Collision: skipping stale pair {a}/{b}");
            return;
        };
        if !circle_a.intersects(&circle_b) {
            return;
        }

        log::trace!("Collision: {a} ({kind_a:?}) hit {b} ({kind_b:?})");
        match (kind_a, kind_b) {
            (ColliderKind::Asteroid, ColliderKind::Asteroid) => {
                self.bounce(world, (a, circle_a), (b, circle_b));
            }
            (ColliderKind::Ship, ColliderKind::Asteroid) => self.ship_hit(world, a),
            (ColliderKind::Asteroid, ColliderKind::Ship) => self.ship_hit(world, b),
            (ColliderKind::Bullet, ColliderKind::Asteroid) => self.bullet_hit(world, a, b),
            (ColliderKind::Asteroid, ColliderKind::Bullet) => self.bullet_hit(world, b, a),
            _ => {}
        }
    }

    /// Equal-mass elastic response between two overlapping asteroids
    fn bounce(&self, world: &mut World, (a, circle_a): (Entity, Circle), (b, circle_b): (Entity, Circle)) {
        let (Some(velocity_a), Some(velocity_b)) = (
            world.get::<Velocity>(a).copied(),
            world.get::<Velocity>(b).copied(),
        ) else {
            return;
        };

        let normal = circle_a.contact_normal(&circle_b);
        let closing = (velocity_b.as_vec() - velocity_a.as_vec()).dot(&normal);
        if closing > 0.0 {
            return;
        }

        let impulse = -(1.0 + self.collision.restitution) * closing * 0.5;
        let tangent = Vec2::new(-normal.y, normal.x);
        let jitter = with_rng(world, |rng| rng.symmetric(self.collision.tangent_jitter));

        let new_a = velocity_a.as_vec() - normal * impulse + tangent * jitter;
        let new_b = velocity_b.as_vec() + normal * impulse - tangent * jitter;
        let min_speed = self.collision.min_asteroid_speed;

        if let Some(velocity) = world.get_mut::<Velocity>(a) {
            velocity.set_clamped(enforce_speed_floor(new_a, -normal, min_speed));
        }
        if let Some(velocity) = world.get_mut::<Velocity>(b) {
            velocity.set_clamped(enforce_speed_floor(new_b, normal, min_speed));
        }

        let separation = circle_a.penetration_depth(&circle_b) * 0.5;
        if separation > 0.0 {
            if let Some(position) = world.get_mut::<Position>(a) {
                position.set_vec(circle_a.center - normal * separation);
            }
            if let Some(position) = world.get_mut::<Position>(b) {
                position.set_vec(circle_b.center + normal * separation);
            }
        }
    }

    /// Ship struck by an asteroid
    fn ship_hit(&self, world: &mut World, ship: Entity) {
        if world.has::<Invulnerable>(ship) {
            return;
        }
        let Some(mut player) = world.get::<Player>(ship).copied() else {
            return;
        };
        if player.is_game_over {
            return;
        }
        let Some(position) = world.get::<Position>(ship).map(Position::as_vec) else {
            return;
        };

        factory::spawn_explosion(world, &self.explosion, position, self.ship.explosion_radius);
        player.lives = player.lives.saturating_sub(1);

        if player.lives == 0 {
            player.is_game_over = true;
            player.is_thrusting = false;
            world.insert(ship, player);
            world.insert(ship, Input::default());
            if let Some(velocity) = world.get_mut::<Velocity>(ship) {
                velocity.set_clamped(Vec2::zeros());
            }
            if let Some(renderable) = world.get_mut::<Renderable>(ship) {
                renderable.visible = false;
            }
            log::info!("Game over: player {ship} out of lives with score {}", player.score);
            return;
        }

        world.insert(ship, player);
        if let Some(velocity) = world.get_mut::<Velocity>(ship) {
            velocity.set_clamped(Vec2::zeros());
        }
        world.insert(ship, Rotation::default());
        let center = world.resource::<Screen>().map_or(position, Screen::center);
        world.insert(ship, Position::new(center.x, center.y));
        world.insert(ship, Invulnerable::new(self.ship.invulnerable_duration));
        log::info!("Player {ship} hit, {} lives left", player.lives);
    }

    /// Bullet struck an asteroid
    fn bullet_hit(&self, world: &mut World, bullet: Entity, asteroid: Entity) {
        let Some(size) = world.get::<Asteroid>(asteroid).map(|a| a.size) else {
            return;
        };

        if let Some(shooter) = world.get::<Bullet>(bullet).map(|b| b.shooter) {
            match world.try_get::<Player>(shooter) {
                Ok(_) => {
                    if let Some(player) = world.get_mut::<Player>(shooter) {
                        player.score = player.score.saturating_add(size.points());
                    }
                }
                Err(err) => log::debug!("Collision: no points for bullet {bullet}: {err}"),
            }
        }

        split_asteroid(world, asteroid, &self.asteroid, &self.explosion);
        world.despawn(bullet);
    }
}

/// Raise `velocity` to at least `min_speed`, pushing along `fallback` if it is zero
fn enforce_speed_floor(velocity: Vec2, fallback: Vec2, min_speed: f32) -> Vec2 {
    let speed = velocity.norm();
    if speed >= min_speed {
        velocity
    } else if speed > f32::EPSILON {
        velocity * (min_speed / speed)
    } else {
        fallback * min_speed
    }
}

/// Destroy an asteroid, leaving an explosion and, unless it was small, two
/// smaller children scattering either side of its heading
///
/// Returns the children. An entity that is not an asteroid is left alone.
pub fn split_asteroid(
    world: &mut World,
    entity: Entity,
    config: &AsteroidConfig,
    explosion: &ExplosionConfig,
) -> Vec<Entity> {
    let (Some(size), Some(position)) = (
        world.get::<Asteroid>(entity).map(|a| a.size),
        world.get::<Position>(entity).map(Position::as_vec),
    ) else {
        return Vec::new();
    };
    let velocity = world
        .get::<Velocity>(entity)
        .map_or_else(Vec2::zeros, Velocity::as_vec);

    factory::spawn_explosion(world, explosion, position, size.explosion_radius());
    world.despawn(entity);

    let Some(child_size) = size.split_into() else {
        log::debug!("Asteroid {entity} destroyed");
        return Vec::new();
    };

    let base_angle = velocity.y.atan2(velocity.x);
    let speed = velocity.norm() * config.split_speed_factor;
    let max_speed = (speed * config.split_max_speed_factor).max(child_size.max_speed());

    let mut children = Vec::with_capacity(2);
    for offset in [config.split_angle, -config.split_angle] {
        let rotation = with_rng(world, |rng| factory::random_rotation(rng, config.max_spin));
        let spawn = AsteroidSpawn::new(child_size, position)
            .with_velocity(heading(base_angle + offset) * speed)
            .with_max_speed(max_speed)
            .with_rotation(rotation);
        children.push(factory::spawn_asteroid(world, spawn));
    }
    log::debug!("Asteroid {entity} split into {children:?}");
    children
}

impl System for CollisionSystem {
    fn name(&self) -> &'static str {
        "collision"
    }

    fn run(&mut self, world: &mut World, _delta_time: f32) {
        let bodies = Self::bodies(world);
        let pairs = self.broad_phase.candidate_pairs(&bodies);
        for pair in pairs {
            self.resolve(world, pair);
        }
    }
}
