//! Game action definitions
//!
//! Keyboard mappings:
//! - A / Left arrow = Move Left
//! - D / Right arrow = Move Right
//! - W / Up arrow / Space = Jump
//! - Enter / Space = Confirm (menus)
//! - Escape = Cancel / back to menu

/// All game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,

    // Menus
    Confirm,
    Cancel,
}
