//! Title menu
//!
//! Blue gradient backdrop, drifting particles, the title with a lagging
//! shadow and a pulsing start prompt. All motion is quantized off the
//! accumulated screen time, matching the rest of the game's animations.

use macroquad::prelude::*;

use super::draw_text_centered;
use crate::game::particles::ParticleField;

const TITLE: &str = "COINDASH";
const SUBTITLE: &str = "Collect them all";

pub struct MenuScreen {
    time: f32,
    bounds: Vec2,
    particles: ParticleField,
}

impl MenuScreen {
    pub fn new(bounds: Vec2) -> Self {
        Self {
            time: 0.0,
            bounds,
            particles: ParticleField::menu_drift(bounds),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.time += dt;
        self.particles.update(dt, self.bounds);
    }

    pub fn draw(&self) {
        let w = screen_width();
        let h = screen_height();

        // === BACKDROP ===
        let bands = [
            Color::from_rgba(135, 206, 250, 255),
            Color::from_rgba(100, 180, 255, 255),
            Color::from_rgba(70, 150, 255, 255),
            Color::from_rgba(50, 120, 255, 255),
            Color::from_rgba(30, 90, 255, 255),
        ];
        let band_h = h / bands.len() as f32;
        for (i, color) in bands.iter().enumerate() {
            draw_rectangle(0.0, i as f32 * band_h, w, band_h, *color);
        }
        self.particles.draw();

        // === TITLE ===
        let title_y = h * 0.3;
        let shadow = 4.0 + ((self.time * 2.0) as i32 % 3) as f32;
        draw_text_centered(
            TITLE,
            w / 2.0 + shadow,
            title_y + shadow,
            64.0,
            Color::from_rgba(0, 0, 0, 100),
        );
        draw_text_centered(TITLE, w / 2.0, title_y, 64.0, YELLOW);
        draw_text_centered(SUBTITLE, w / 2.0, title_y + 40.0, 24.0, ORANGE);

        // === INSTRUCTIONS ===
        let box_w = 600.0;
        let box_h = 200.0;
        let box_x = (w - box_w) / 2.0;
        let box_y = h * 0.6 - box_h / 2.0;
        draw_rectangle(box_x, box_y, box_w, box_h, Color::from_rgba(255, 255, 255, 220));
        draw_rectangle_lines(box_x, box_y, box_w, box_h, 4.0, ORANGE);

        let lines: [(&str, Color, f32); 7] = [
            ("CONTROLS", ORANGE, 20.0),
            ("A / D or Arrow Keys - Move", BLACK, 16.0),
            ("W / Up / Space - Jump", BLACK, 16.0),
            ("", BLACK, 16.0),
            ("OBJECTIVE", ORANGE, 20.0),
            ("Collect all coins, then reach the flag", BLACK, 16.0),
            ("Avoid enemies and hazards: 3 hits and you are out", RED, 16.0),
        ];
        let mut line_y = box_y + 36.0;
        for (text, color, size) in lines {
            draw_text_centered(text, w / 2.0, line_y, size, color);
            line_y += 26.0;
        }

        // === START PROMPT ===
        let prompt = "Press ENTER or SPACE to Start";
        let prompt_y = h * 0.88;
        if (self.time * 3.0) as i32 % 2 == 1 {
            let glow = 26.0 + ((self.time * 5.0) as i32 % 4) as f32;
            draw_text_centered(prompt, w / 2.0, prompt_y, glow, WHITE);
        }
        draw_text_centered(prompt, w / 2.0, prompt_y, 24.0, YELLOW);

        // === CORNERS ===
        let corner = 40.0;
        draw_rectangle(0.0, 0.0, corner, corner, ORANGE);
        draw_rectangle(w - corner, 0.0, corner, corner, ORANGE);
        draw_rectangle(0.0, h - corner, corner, corner, ORANGE);
        draw_rectangle(w - corner, h - corner, corner, corner, ORANGE);
    }
}
