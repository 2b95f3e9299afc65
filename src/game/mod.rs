//! Game Simulation Module
//!
//! The whole platformer simulation: entities, collision, the player
//! controller and the per-level session that ties them together.
//!
//! Key concepts:
//! - Entity: Plain data record for everything placed in a level
//! - GameSession: One level in play, advanced once per frame
//! - Event: Decoupled frame outcomes (coins, damage, completion)
//!
//! Design philosophy:
//! - Simple over flexible (we know what game we're making)
//! - Simulation stays free of draw and input calls so it tests headless
//! - Fixed rosters, no entity recycling (levels are small)

// Allow unused code - parts of the simulation API exist for tests and tooling
#![allow(dead_code)]

pub mod collision;
pub mod entity;
pub mod event;
pub mod particles;
pub mod player;
pub mod render;
pub mod session;
pub mod tuning;

// Re-export main types
pub use entity::{Entity, EntityKind, HazardKind, Patrol};
pub use event::{AudioCue, DamageSource, GameEvent};
pub use player::{AnimState, Character, Facing, FrameInput, PlayerState};
pub use session::{GameSession, Level, LevelPhase};
