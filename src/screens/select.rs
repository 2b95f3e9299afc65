//! Character select
//!
//! Two preview boxes on a purple gradient. Left/A and Right/D move the
//! highlight, the glow around the pick pulses on quantized time. The
//! choice only changes the player palette, never the physics.

use macroquad::prelude::*;

use super::draw_text_centered;
use crate::game::player::Character;
use crate::game::render::character_palette;

pub struct SelectScreen {
    time: f32,
    pub selected: Character,
}

impl SelectScreen {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            selected: Character::Male,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.time += dt;
    }

    pub fn draw(&self) {
        let w = screen_width();
        let h = screen_height();

        // === BACKDROP ===
        let bands = [
            Color::from_rgba(80, 60, 120, 255),
            Color::from_rgba(70, 50, 110, 255),
            Color::from_rgba(60, 40, 100, 255),
            Color::from_rgba(50, 30, 90, 255),
        ];
        let band_h = h / bands.len() as f32;
        for (i, color) in bands.iter().enumerate() {
            draw_rectangle(0.0, i as f32 * band_h, w, band_h, *color);
        }

        draw_text_centered("SELECT YOUR CHARACTER", w / 2.0, h * 0.15, 42.0, YELLOW);

        // === PREVIEW BOXES ===
        self.draw_slot(Character::Male, w * 0.3, h * 0.5);
        self.draw_slot(Character::Female, w * 0.7, h * 0.5);

        // === PROMPTS ===
        draw_text_centered(
            "Use LEFT/RIGHT or A/D to select",
            w / 2.0,
            h * 0.8,
            18.0,
            WHITE,
        );
        draw_text_centered(
            "Press ENTER or SPACE to confirm",
            w / 2.0,
            h * 0.85,
            20.0,
            YELLOW,
        );
    }

    fn draw_slot(&self, character: Character, cx: f32, cy: f32) {
        let picked = self.selected == character;
        let accent = match character {
            Character::Male => YELLOW,
            Character::Female => Color::from_rgba(255, 105, 180, 255),
        };

        if picked {
            let glow = 10.0 + ((self.time * 8.0) as i32 % 10) as f32;
            let mut halo = accent;
            halo.a = 0.2;
            draw_circle(cx, cy, 120.0 + glow, halo);
            draw_circle_lines(cx, cy, 130.0, 5.0, accent);
        }

        draw_rectangle(
            cx - 100.0,
            cy - 100.0,
            200.0,
            200.0,
            Color::from_rgba(255, 255, 255, 200),
        );
        draw_rectangle_lines(
            cx - 100.0,
            cy - 100.0,
            200.0,
            200.0,
            3.0,
            if picked { accent } else { WHITE },
        );

        draw_preview_figure(character, cx, cy);

        draw_text_centered(
            character.label(),
            cx,
            cy + 140.0,
            28.0,
            if picked { accent } else { WHITE },
        );
    }
}

/// A big idle-pose figure inside a preview box centered on (cx, cy).
fn draw_preview_figure(character: Character, cx: f32, cy: f32) {
    let (shirt, trim, hair) = character_palette(character);
    let skin = Color::from_rgba(255, 215, 175, 255);
    let pants = Color::from_rgba(45, 45, 65, 255);

    let top = cy - 80.0;
    // Head
    draw_rectangle(cx - 24.0, top, 48.0, 48.0, skin);
    draw_rectangle(cx - 24.0, top, 48.0, 12.0, hair);
    if character == Character::Female {
        draw_rectangle(cx - 30.0, top, 8.0, 70.0, hair);
        draw_rectangle(cx + 22.0, top, 8.0, 70.0, hair);
    }
    draw_circle(cx - 10.0, top + 26.0, 3.5, BLACK);
    draw_circle(cx + 10.0, top + 26.0, 3.5, BLACK);
    // Torso with arms
    draw_rectangle(cx - 28.0, top + 48.0, 56.0, 56.0, shirt);
    draw_rectangle(cx - 40.0, top + 52.0, 12.0, 40.0, trim);
    draw_rectangle(cx + 28.0, top + 52.0, 12.0, 40.0, trim);
    // Legs
    draw_rectangle(cx - 22.0, top + 104.0, 18.0, 48.0, pants);
    draw_rectangle(cx + 4.0, top + 104.0, 18.0, 48.0, pants);
}
