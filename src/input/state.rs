//! Input state management
//!
//! Polls macroquad's keyboard state and exposes it as actions. Jump and
//! Confirm are edge-triggered through `action_pressed`, so holding a key
//! never repeats them.

use macroquad::prelude::*;

use super::Action;
use crate::game::player::FrameInput;

/// Action-based view over the keyboard
pub struct InputState;

impl InputState {
    pub fn new() -> Self {
        Self
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            Action::MoveRight => is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            Action::Jump => {
                is_key_down(KeyCode::W) || is_key_down(KeyCode::Up) || is_key_down(KeyCode::Space)
            }
            Action::Confirm => is_key_down(KeyCode::Enter) || is_key_down(KeyCode::Space),
            Action::Cancel => is_key_down(KeyCode::Escape),
        }
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_pressed(KeyCode::A) || is_key_pressed(KeyCode::Left),
            Action::MoveRight => is_key_pressed(KeyCode::D) || is_key_pressed(KeyCode::Right),
            Action::Jump => {
                is_key_pressed(KeyCode::W)
                    || is_key_pressed(KeyCode::Up)
                    || is_key_pressed(KeyCode::Space)
            }
            Action::Confirm => is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Space),
            Action::Cancel => is_key_pressed(KeyCode::Escape),
        }
    }

    /// One frame of input as the player controller consumes it. Held
    /// movement keys combine, so left+right cancels to zero.
    pub fn frame(&self) -> FrameInput {
        let mut move_dir = 0.0;
        if self.action_down(Action::MoveLeft) {
            move_dir -= 1.0;
        }
        if self.action_down(Action::MoveRight) {
            move_dir += 1.0;
        }
        FrameInput {
            move_dir,
            jump_pressed: self.action_pressed(Action::Jump),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
