//! Collision Resolver
//!
//! Axis-aligned box collision for one player against the level roster.
//! The resolver integrates the player's position, pushes it out of solid
//! platforms along the axis of minimal overlap (vertical wins ties), and
//! classifies the remaining overlaps into events: coin pickups, contact
//! damage, and goal completion. It never touches score or health itself.

use macroquad::math::{vec2, Vec2};

use super::entity::{Entity, EntityKind};
use super::event::{DamageSource, GameEvent};
use super::player::PlayerState;

/// How far below the feet to look for solid ground (px). Keeps `grounded`
/// stable while resting flush on a platform instead of flickering on
/// alternate frames.
const GROUND_PROBE: f32 = 2.0;

/// Axis-aligned box described by its center and half extents.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn of(entity: &Entity) -> Self {
        Self {
            center: entity.position,
            half: entity.size * 0.5,
        }
    }

    /// Strict overlap; boxes that merely touch do not count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (self.center.x - other.center.x).abs() < self.half.x + other.half.x
            && (self.center.y - other.center.y).abs() < self.half.y + other.half.y
    }

    /// Penetration depth along each axis. Positive on both axes iff the
    /// boxes overlap.
    pub fn penetration(&self, other: &Aabb) -> Vec2 {
        vec2(
            self.half.x + other.half.x - (self.center.x - other.center.x).abs(),
            self.half.y + other.half.y - (self.center.y - other.center.y).abs(),
        )
    }
}

/// Run one collision frame for the player.
///
/// 1. Integrate `position += velocity * dt`.
/// 2. Push the player out of each overlapping solid along the smaller
///    penetration axis, zeroing that velocity component. Ties resolve
///    vertically.
/// 3. Derive `grounded` from a short probe below the feet.
/// 4. Collect coins (marking them dead so they can never fire twice),
///    report at most one damage contact (enemies before hazards), and
///    report the goal only once every coin is collected.
///
/// Event application is the session's job.
pub fn resolve(
    player: &mut Entity,
    state: &mut PlayerState,
    entities: &mut [Entity],
    all_coins_collected: bool,
    dt: f32,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    player.position += player.velocity * dt;

    // =========================================================================
    // Solid separation: minimal-overlap axis, vertical wins ties
    // =========================================================================
    for solid in entities.iter().filter(|e| e.alive && e.is_solid()) {
        let player_box = Aabb::of(player);
        let solid_box = Aabb::of(solid);
        if !player_box.overlaps(&solid_box) {
            continue;
        }
        let pen = player_box.penetration(&solid_box);
        if pen.y <= pen.x {
            if player.position.y >= solid.position.y {
                player.position.y += pen.y;
            } else {
                player.position.y -= pen.y;
            }
            player.velocity.y = 0.0;
        } else {
            if player.position.x >= solid.position.x {
                player.position.x += pen.x;
            } else {
                player.position.x -= pen.x;
            }
            player.velocity.x = 0.0;
        }
    }

    // =========================================================================
    // Ground contact: probe a sliver below the feet
    // =========================================================================
    let mut probe = Aabb::of(player);
    probe.center.y -= GROUND_PROBE * 0.5;
    probe.half.y += GROUND_PROBE * 0.5;
    state.grounded = entities
        .iter()
        .filter(|e| e.alive && e.is_solid())
        .any(|e| probe.overlaps(&Aabb::of(e)));

    let player_box = Aabb::of(player);

    // =========================================================================
    // Coins: dead coins are skipped, so a coin pays out exactly once
    // =========================================================================
    for (idx, coin) in entities.iter_mut().enumerate() {
        if coin.kind == EntityKind::Coin && coin.alive && player_box.overlaps(&Aabb::of(coin)) {
            coin.alive = false;
            events.push(GameEvent::CoinCollected { entity: idx });
        }
    }

    // =========================================================================
    // Contact damage: enemies take precedence, at most one hit per frame
    // =========================================================================
    if !state.is_invulnerable() {
        let mut hit = None;
        for enemy in entities
            .iter()
            .filter(|e| e.alive && e.kind == EntityKind::Enemy)
        {
            if player_box.overlaps(&Aabb::of(enemy)) {
                hit = Some(DamageSource::Enemy);
                break;
            }
        }
        if hit.is_none() {
            for hazard in entities
                .iter()
                .filter(|e| e.alive && e.kind == EntityKind::Hazard)
            {
                if player_box.overlaps(&Aabb::of(hazard)) {
                    hit = Some(DamageSource::Hazard);
                    break;
                }
            }
        }
        if let Some(source) = hit {
            events.push(GameEvent::Damage { source });
        }
    }

    // =========================================================================
    // Goal: only opens once every coin in the level is collected
    // =========================================================================
    if all_coins_collected {
        let reached = entities
            .iter()
            .any(|e| e.alive && e.kind == EntityKind::Goal && player_box.overlaps(&Aabb::of(e)));
        if reached {
            events.push(GameEvent::LevelComplete);
        }
    }

    events
}
