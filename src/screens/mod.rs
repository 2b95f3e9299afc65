//! Menu, character select and game-over screens
//!
//! Each screen is a small state struct: `update` advances animation by
//! `dt` and touches nothing but its own fields, `draw` paints in screen
//! coordinates. Input decisions stay in the flow controller, so these
//! stay headless-testable.

#![allow(dead_code)]

mod game_over;
mod menu;
mod select;

pub use game_over::*;
pub use menu::*;
pub use select::*;

use macroquad::prelude::*;

/// Draw text centered on `cx`, baseline at `y`.
pub(crate) fn draw_text_centered(text: &str, cx: f32, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, cx - dims.width / 2.0, y, size, color);
}
