//! Level documents
//!
//! The on-disk shape of a level: ground runs, platforms, coins, enemies
//! and hazards in world coordinates (y up, positions are centers).
//! `build` turns a document into the runtime roster the session plays,
//! merging each tiled ground run into one solid strip.

use macroquad::math::vec2;
use serde::{Deserialize, Serialize};

use crate::game::entity::{Entity, HazardKind, Patrol};
use crate::game::session::Level;
use crate::game::tuning;

/// A run of solid ground: one tile every `TILE_SIZE` px starting at
/// `start_x`, stopping before `end_x`, all at height `y`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GroundRun {
    pub start_x: f32,
    pub end_x: f32,
    pub y: f32,
}

/// An enemy placement with its patrol route.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemySpec {
    pub x: f32,
    pub y: f32,
    pub patrol_min_x: f32,
    pub patrol_max_x: f32,
    /// Patrol speed in px/s
    pub speed: f32,
}

/// A hazard placement. Height is fixed; width varies per instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HazardSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub kind: HazardKind,
}

/// One level file. `goal` and `player_start` are required fields, so a
/// document missing either fails at parse time before gameplay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    pub name: String,
    pub player_start: (f32, f32),
    pub ground: Vec<GroundRun>,
    pub platforms: Vec<(f32, f32)>,
    pub coins: Vec<(f32, f32)>,
    pub goal: (f32, f32),
    #[serde(default)]
    pub enemies: Vec<EnemySpec>,
    #[serde(default)]
    pub hazards: Vec<HazardSpec>,
    #[serde(default = "default_kill_plane")]
    pub kill_plane_y: f32,
}

fn default_kill_plane() -> f32 {
    tuning::KILL_PLANE_Y
}

impl LevelData {
    /// Assemble the runtime level. `index` is the campaign slot.
    pub fn build(&self, index: usize) -> Level {
        let mut entities = Vec::new();

        for run in &self.ground {
            if let Some(strip) = ground_strip(run) {
                entities.push(strip);
            }
        }
        for &(x, y) in &self.platforms {
            entities.push(Entity::platform(
                vec2(x, y),
                vec2(tuning::TILE_SIZE, tuning::TILE_SIZE),
            ));
        }
        for &(x, y) in &self.coins {
            entities.push(Entity::coin(vec2(x, y)));
        }
        entities.push(Entity::goal(vec2(self.goal.0, self.goal.1)));
        for spec in &self.enemies {
            entities.push(Entity::enemy(
                vec2(spec.x, spec.y),
                Patrol {
                    min_x: spec.patrol_min_x,
                    max_x: spec.patrol_max_x,
                    speed: spec.speed,
                },
            ));
        }
        for spec in &self.hazards {
            entities.push(Entity::hazard(vec2(spec.x, spec.y), spec.width, spec.kind));
        }

        Level {
            index,
            name: self.name.clone(),
            total_coins: self.coins.len() as u32,
            coins_collected: 0,
            player_start: vec2(self.player_start.0, self.player_start.1),
            kill_plane_y: self.kill_plane_y,
            entities,
        }
    }
}

/// Collapse a tiled ground run into one solid strip spanning exactly the
/// tiles it would place. Runs that place no tile produce nothing.
fn ground_strip(run: &GroundRun) -> Option<Entity> {
    let tile = tuning::TILE_SIZE;
    let span = run.end_x - run.start_x;
    if span <= 0.0 {
        return None;
    }
    let count = (span / tile).ceil();
    let first_center = run.start_x;
    let last_center = run.start_x + (count - 1.0) * tile;
    let center_x = (first_center + last_center) * 0.5;
    Some(Entity::platform(
        vec2(center_x, run.y),
        vec2(count * tile, tile),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::EntityKind;

    fn sample() -> LevelData {
        LevelData {
            name: "Sample".to_string(),
            player_start: (100.0, 200.0),
            ground: vec![GroundRun {
                start_x: 0.0,
                end_x: 300.0,
                y: 100.0,
            }],
            platforms: vec![(200.0, 150.0), (500.0, 200.0)],
            coins: vec![(250.0, 220.0), (350.0, 220.0), (550.0, 270.0)],
            goal: (950.0, 270.0),
            enemies: vec![EnemySpec {
                x: 300.0,
                y: 170.0,
                patrol_min_x: 250.0,
                patrol_max_x: 350.0,
                speed: 120.0,
            }],
            hazards: vec![HazardSpec {
                x: 250.0,
                y: 75.0,
                width: 150.0,
                kind: HazardKind::Lava,
            }],
            kill_plane_y: -200.0,
        }
    }

    #[test]
    fn test_ground_run_merges_into_one_strip() {
        // Tiles at x = 0, 64, 128, 192, 256: strip spans -32..288
        let strip = ground_strip(&GroundRun {
            start_x: 0.0,
            end_x: 300.0,
            y: 100.0,
        })
        .unwrap();
        assert_eq!(strip.kind, EntityKind::Platform);
        assert!((strip.position.x - 128.0).abs() < 1e-4);
        assert!((strip.position.y - 100.0).abs() < 1e-4);
        assert!((strip.size.x - 320.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_ground_run_places_nothing() {
        assert!(ground_strip(&GroundRun {
            start_x: 100.0,
            end_x: 100.0,
            y: 0.0,
        })
        .is_none());
    }

    #[test]
    fn test_build_assembles_the_roster() {
        let level = sample().build(2);

        assert_eq!(level.index, 2);
        assert_eq!(level.name, "Sample");
        assert_eq!(level.total_coins, 3);
        assert_eq!(level.coins_collected, 0);
        assert_eq!(level.player_start.x, 100.0);
        assert_eq!(level.kill_plane_y, -200.0);

        let count = |kind: EntityKind| {
            level
                .entities
                .iter()
                .filter(|e| e.kind == kind)
                .count()
        };
        assert_eq!(count(EntityKind::Platform), 3); // 1 ground strip + 2 platforms
        assert_eq!(count(EntityKind::Coin), 3);
        assert_eq!(count(EntityKind::Goal), 1);
        assert_eq!(count(EntityKind::Enemy), 1);
        assert_eq!(count(EntityKind::Hazard), 1);
        assert_eq!(count(EntityKind::Player), 0); // the session owns the player
    }

    #[test]
    fn test_built_enemy_carries_its_patrol() {
        let level = sample().build(0);
        let enemy = level
            .entities
            .iter()
            .find(|e| e.kind == EntityKind::Enemy)
            .unwrap();
        let patrol = enemy.patrol.unwrap();
        assert_eq!(patrol.min_x, 250.0);
        assert_eq!(patrol.max_x, 350.0);
        assert_eq!(patrol.speed, 120.0);
    }
}
