//! Entities
//!
//! Everything placed in a level is an `Entity`: a flat record with a kind
//! tag, a center position, a velocity, a bounding box and an alive flag.
//! Entities are plain data - behavior lives in the systems that read them
//! (player controller, collision resolver, session).

use macroquad::math::{vec2, Vec2};
use serde::{Deserialize, Serialize};

use super::tuning;

/// What an entity is. Drives collision classification and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Enemy,
    Hazard,
    Coin,
    Platform,
    Goal,
}

/// Horizontal back-and-forth movement for enemies.
#[derive(Debug, Clone, Copy)]
pub struct Patrol {
    pub min_x: f32,
    pub max_x: f32,
    /// Signed speed (px/s); flips when a bound is reached
    pub speed: f32,
}

/// Visual flavor of a hazard. Collision treats both the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    Lava,
    Water,
}

/// A single thing in a level. Positions are world space with y up;
/// `position` is the center of the bounding box.
#[derive(Debug, Clone)]
pub struct Entity {
    pub kind: EntityKind,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Bounding box extents (w, h); always positive
    pub size: Vec2,
    /// Dead entities are skipped by collision checks and rendering
    pub alive: bool,
    /// Present on enemies only
    pub patrol: Option<Patrol>,
    /// Present on hazards only
    pub hazard: Option<HazardKind>,
    /// Cosmetic timer driving hazard pulse/bob effects
    pub anim_time: f32,
}

impl Entity {
    pub fn new(kind: EntityKind, position: Vec2, size: Vec2) -> Self {
        Self {
            kind,
            position,
            velocity: Vec2::ZERO,
            size,
            alive: true,
            patrol: None,
            hazard: None,
            anim_time: 0.0,
        }
    }

    pub fn player(position: Vec2) -> Self {
        let (w, h) = tuning::PLAYER_SIZE;
        Self::new(EntityKind::Player, position, vec2(w, h))
    }

    /// A solid box the player stands on or is pushed out of.
    pub fn platform(position: Vec2, size: Vec2) -> Self {
        Self::new(EntityKind::Platform, position, size)
    }

    pub fn coin(position: Vec2) -> Self {
        let (w, h) = tuning::COIN_SIZE;
        Self::new(EntityKind::Coin, position, vec2(w, h))
    }

    pub fn enemy(position: Vec2, patrol: Patrol) -> Self {
        let (w, h) = tuning::ENEMY_SIZE;
        let mut e = Self::new(EntityKind::Enemy, position, vec2(w, h));
        e.patrol = Some(patrol);
        e
    }

    pub fn hazard(position: Vec2, width: f32, kind: HazardKind) -> Self {
        let mut e = Self::new(
            EntityKind::Hazard,
            position,
            vec2(width, tuning::HAZARD_HEIGHT),
        );
        e.hazard = Some(kind);
        e
    }

    pub fn goal(position: Vec2) -> Self {
        let (w, h) = tuning::GOAL_SIZE;
        Self::new(EntityKind::Goal, position, vec2(w, h))
    }

    /// Solid entities block movement; everything else triggers events.
    pub fn is_solid(&self) -> bool {
        self.kind == EntityKind::Platform
    }

    /// Move along the patrol route, clamping at the bounds and turning around.
    pub fn tick_patrol(&mut self, dt: f32) {
        if let Some(patrol) = &mut self.patrol {
            self.position.x += patrol.speed * dt;
            if self.position.x > patrol.max_x {
                self.position.x = patrol.max_x;
                patrol.speed = -patrol.speed;
            } else if self.position.x < patrol.min_x {
                self.position.x = patrol.min_x;
                patrol.speed = -patrol.speed;
            }
        }
    }

    /// Advance the cosmetic animation clock (lava pulse, water bob).
    pub fn tick_anim(&mut self, dt: f32) {
        self.anim_time += dt;
    }
}
