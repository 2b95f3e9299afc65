//! Win / lose screen
//!
//! Shared layout with two palettes: gold celebration particles over
//! purple for a win, embers over dark red for a loss. Shows the final
//! level, coin tally and score, then waits for Enter.

use macroquad::prelude::*;

use super::draw_text_centered;
use crate::game::particles::ParticleField;

pub struct GameOverScreen {
    time: f32,
    bounds: Vec2,
    pub won: bool,
    level_name: String,
    coins: u32,
    score: u32,
    particles: ParticleField,
}

impl GameOverScreen {
    pub fn victory(bounds: Vec2, level_name: String, coins: u32, score: u32) -> Self {
        Self {
            time: 0.0,
            bounds,
            won: true,
            level_name,
            coins,
            score,
            particles: ParticleField::victory_burst(bounds),
        }
    }

    pub fn defeat(bounds: Vec2, level_name: String, coins: u32, score: u32) -> Self {
        Self {
            time: 0.0,
            bounds,
            won: false,
            level_name,
            coins,
            score,
            particles: ParticleField::defeat_burst(bounds),
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
        let bands = if self.won {
            [
                Color::from_rgba(40, 20, 80, 255),
                Color::from_rgba(30, 15, 70, 255),
                Color::from_rgba(20, 10, 60, 255),
                Color::from_rgba(10, 5, 50, 255),
            ]
        } else {
            [
                Color::from_rgba(80, 30, 30, 255),
                Color::from_rgba(70, 25, 25, 255),
                Color::from_rgba(60, 20, 20, 255),
                Color::from_rgba(50, 15, 15, 255),
            ]
        };
        let band_h = h / bands.len() as f32;
        for (i, color) in bands.iter().enumerate() {
            draw_rectangle(0.0, i as f32 * band_h, w, band_h, *color);
        }
        self.particles.draw();

        // === TITLE ===
        let (title, title_color) = if self.won {
            ("VICTORY!", Color::from_rgba(255, 215, 0, 255))
        } else {
            ("GAME OVER", RED)
        };
        let pulse = 1.0 + 0.1 * ((self.time * 4.0) as i32 % 2) as f32;
        let size = 48.0 * pulse;
        let title_y = h * 0.35;
        draw_text_centered(
            title,
            w / 2.0 + 4.0,
            title_y + 4.0,
            size + 2.0,
            Color::from_rgba(0, 0, 0, 150),
        );
        draw_text_centered(title, w / 2.0, title_y, size, title_color);

        let (message, message_color) = if self.won {
            ("You collected every coin and reached the goal!", YELLOW)
        } else {
            ("Better luck next time, adventurer!", ORANGE)
        };
        draw_text_centered(message, w / 2.0, h * 0.45, 20.0, message_color);

        // === STATS ===
        let box_w = 500.0;
        let box_h = 140.0;
        let box_x = (w - box_w) / 2.0;
        let box_y = h * 0.6 - box_h / 2.0;
        draw_rectangle(box_x, box_y, box_w, box_h, Color::from_rgba(255, 255, 255, 200));
        draw_rectangle_lines(box_x, box_y, box_w, box_h, 4.0, title_color);

        draw_text_centered(
            &format!("Level: {}", self.level_name),
            w / 2.0,
            box_y + 40.0,
            22.0,
            BLACK,
        );
        draw_text_centered(
            &format!("Coins collected: {}", self.coins),
            w / 2.0,
            box_y + 75.0,
            20.0,
            Color::from_rgba(210, 120, 20, 255),
        );
        draw_text_centered(
            &format!("Score: {}", self.score),
            w / 2.0,
            box_y + 108.0,
            20.0,
            Color::from_rgba(210, 120, 20, 255),
        );

        // === RETURN PROMPT ===
        if (self.time * 2.0) as i32 % 2 == 1 {
            draw_text_centered(
                "Press ENTER to return to menu",
                w / 2.0,
                h * 0.82,
                22.0,
                WHITE,
            );
        }
    }
}
