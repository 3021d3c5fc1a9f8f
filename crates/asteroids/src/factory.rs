//! Entity archetypes
//!
//! One constructor per kind of game object. Each allocates an entity,
//! attaches its full component set and returns the id; nothing else happens.
//! The same constructors serve the starting field and runtime spawns.

use asteroids_ecs::foundation::math::heading;
use asteroids_ecs::prelude::*;

use crate::components::{
    Asteroid, AsteroidSize, Bullet, Collider, ColliderKind, Explosion, Input, Invulnerable,
    Lifetime, Player, Position, RenderKind, Renderable, Rotation, Velocity,
};
use crate::config::{AsteroidConfig, BulletConfig, ExplosionConfig, ShipConfig};
use crate::rng::{with_rng, GameRng};
use crate::screen::Screen;

/// Attempts at placing a genesis asteroid clear of the ship
const PLACEMENT_ATTEMPTS: usize = 16;

/// Spawn the player ship at `position`, starting invulnerable
pub fn spawn_ship(world: &mut World, config: &ShipConfig, position: Vec2) -> Entity {
    let entity = world.spawn();
    world.insert(entity, Position::new(position.x, position.y));
    world.insert(entity, Velocity::at_rest(config.max_speed));
    world.insert(entity, Rotation::default());
    world.insert(entity, Input::default());
    world.insert(entity, Player::with_lives(config.starting_lives));
    world.insert(entity, Renderable::new(RenderKind::Ship, 1.0));
    world.insert(
        entity,
        Collider {
            radius: config.collider_radius,
            kind: ColliderKind::Ship,
        },
    );
    world.insert(entity, Invulnerable::new(config.invulnerable_duration));

    log::debug!("Spawned ship {entity} at ({}, {})", position.x, position.y);
    entity
}

/// Spawn a bullet travelling along `angle`, attributed to `shooter`
pub fn spawn_bullet(
    world: &mut World,
    config: &BulletConfig,
    position: Vec2,
    angle: f32,
    shooter: Entity,
) -> Entity {
    let velocity = heading(angle) * config.speed;
    let created_at = world.elapsed();

    let entity = world.spawn();
    world.insert(entity, Position::new(position.x, position.y));
    world.insert(
        entity,
        Velocity {
            dx: velocity.x,
            dy: velocity.y,
            max_speed: config.speed,
        },
    );
    world.insert(entity, Renderable::new(RenderKind::Bullet, 1.0));
    world.insert(entity, Lifetime::new(created_at, config.lifetime));
    world.insert(
        entity,
        Collider {
            radius: config.collider_radius,
            kind: ColliderKind::Bullet,
        },
    );
    world.insert(entity, Bullet { shooter });

    log::trace!("Spawned bullet {entity} from {shooter}");
    entity
}

/// Parameters for a new asteroid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidSpawn {
    /// Size category
    pub size: AsteroidSize,

    /// Starting position
    pub position: Vec2,

    /// Starting velocity, clamped to `max_speed`
    pub velocity: Vec2,

    /// Speed cap
    pub max_speed: f32,

    /// Starting heading and spin
    pub rotation: Rotation,
}

impl AsteroidSpawn {
    /// Stationary asteroid of `size` at `position` with the size's default cap
    pub fn new(size: AsteroidSize, position: Vec2) -> Self {
        Self {
            size,
            position,
            velocity: Vec2::zeros(),
            max_speed: size.max_speed(),
            rotation: Rotation::default(),
        }
    }

    /// Set the starting velocity
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Override the speed cap
    #[must_use]
    pub const fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Set heading and spin
    #[must_use]
    pub const fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Spawn an asteroid
pub fn spawn_asteroid(world: &mut World, spawn: AsteroidSpawn) -> Entity {
    let size = spawn.size;
    let mut velocity = Velocity::at_rest(spawn.max_speed);
    velocity.set_clamped(spawn.velocity);

    let entity = world.spawn();
    world.insert(entity, Position::new(spawn.position.x, spawn.position.y));
    world.insert(entity, velocity);
    world.insert(entity, spawn.rotation);
    world.insert(entity, Renderable::new(RenderKind::Asteroid, size.scale_factor()));
    world.insert(
        entity,
        Collider {
            radius: size.radius(),
            kind: ColliderKind::Asteroid,
        },
    );
    world.insert(entity, Asteroid { size });

    log::debug!("Spawned {size:?} asteroid {entity}");
    entity
}

/// Spawn an explosion effect of the given radius
pub fn spawn_explosion(
    world: &mut World,
    config: &ExplosionConfig,
    position: Vec2,
    radius: f32,
) -> Entity {
    let entity = world.spawn();
    world.insert(entity, Position::new(position.x, position.y));
    world.insert(entity, Renderable::new(RenderKind::Explosion, 1.0));
    world.insert(
        entity,
        Explosion {
            age: 0.0,
            max_age: config.max_age,
            radius,
            pieces: config.pieces,
        },
    );
    entity
}

/// Random heading with a random passive spin
pub fn random_rotation(rng: &mut GameRng, max_spin: f32) -> Rotation {
    Rotation {
        angle: rng.unit() * std::f32::consts::TAU,
        rotation_speed: rng.symmetric(max_spin),
    }
}

/// Spawn the starting asteroid field, keeping clear of `ship_position`
pub fn spawn_asteroid_field(
    world: &mut World,
    config: &AsteroidConfig,
    screen: Screen,
    ship_position: Vec2,
) -> Vec<Entity> {
    let spawns: Vec<AsteroidSpawn> = with_rng(world, |rng| {
        (0..config.initial_count)
            .map(|_| {
                let size = AsteroidSize::ALL[rng.below(AsteroidSize::ALL.len())];
                let position = clear_position(rng, screen, ship_position, config.safe_spawn_distance);
                let velocity = heading(rng.unit() * std::f32::consts::TAU)
                    * rng.between(config.min_speed, config.max_speed);
                AsteroidSpawn::new(size, position)
                    .with_velocity(velocity)
                    .with_rotation(random_rotation(rng, config.max_spin))
            })
            .collect()
    });

    spawns
        .into_iter()
        .map(|spawn| spawn_asteroid(world, spawn))
        .collect()
}

/// Random on-screen point at least `min_distance` from `avoid` when one can be found
fn clear_position(rng: &mut GameRng, screen: Screen, avoid: Vec2, min_distance: f32) -> Vec2 {
    let mut candidate = Vec2::zeros();
    for _ in 0..PLACEMENT_ATTEMPTS {
        candidate = Vec2::new(rng.unit() * screen.width(), rng.unit() * screen.height());
        if (candidate - avoid).norm() >= min_distance {
            break;
        }
    }
    candidate
}

/// Put the player back into a fresh game in place
///
/// The entity keeps its id; every gameplay component is overwritten.
pub fn reset_ship(world: &mut World, entity: Entity, config: &ShipConfig, position: Vec2) {
    world.insert(entity, Player::with_lives(config.starting_lives));
    world.insert(entity, Position::new(position.x, position.y));
    world.insert(entity, Velocity::at_rest(config.max_speed));
    world.insert(entity, Rotation::default());
    world.insert(entity, Input::default());
    world.insert(entity, Renderable::new(RenderKind::Ship, 1.0));
    world.insert(
        entity,
        Collider {
            radius: config.collider_radius,
            kind: ColliderKind::Ship,
        },
    );
    world.insert(entity, Invulnerable::new(config.invulnerable_duration));
}

/// Destroy every asteroid
pub fn clear_asteroids(world: &mut World) -> usize {
    let asteroids = world.entities_with::<Asteroid>();
    for &entity in &asteroids {
        world.despawn(entity);
    }
    asteroids.len()
}
