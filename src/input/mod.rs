//! Input handling
//!
//! Provides an action-based input layer over macroquad's keyboard
//! polling, so screens and the player controller ask for game actions
//! instead of raw key codes.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
