//! Level module - documents and loading
//!
//! Levels live on disk as RON documents (`LevelData`) and are built into
//! runtime rosters when a session starts. Loading validates every file,
//! so broken data fails at startup instead of mid-game.
//!
//! Note: Some API items (saving, single-file loading) exist for tooling
//! and tests rather than the shipped campaign path.

#![allow(dead_code)]

mod data;
mod loader;

pub use data::*;
pub use loader::*;
