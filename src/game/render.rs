//! Playfield Renderer
//!
//! Draws the simulation with colored primitives. The simulation runs in
//! y-up world coordinates with the origin at the bottom-left of the
//! window, so every draw call goes through `screen_y`. The HUD draws in
//! plain screen coordinates on top.

use macroquad::prelude::*;

use super::entity::{Entity, EntityKind, HazardKind};
use super::player::{AnimState, Character, Facing, PlayerState};
use super::session::{GameSession, Level};
use super::tuning;

/// World y to screen y (window coordinates run top-down).
fn screen_y(world_y: f32) -> f32 {
    screen_height() - world_y
}

/// Screen-space top-left corner and extent of an entity's box.
fn body_rect(e: &Entity) -> (f32, f32, f32, f32) {
    (
        e.position.x - e.size.x * 0.5,
        screen_y(e.position.y + e.size.y * 0.5),
        e.size.x,
        e.size.y,
    )
}

/// Sky tint per campaign slot: forest, mountain, volcano.
pub fn sky_color(level_index: usize) -> Color {
    match level_index {
        0 => Color::from_rgba(135, 206, 235, 255),
        1 => Color::from_rgba(110, 130, 165, 255),
        _ => Color::from_rgba(75, 35, 35, 255),
    }
}

/// Draw one full frame of play: backdrop, level, player, HUD.
pub fn draw_session(session: &GameSession, character: Character, time: f32) {
    clear_background(sky_color(session.level.index));
    draw_level(&session.level, time);
    draw_player(&session.player, &session.state, character);
    draw_hud(session);
}

pub fn draw_level(level: &Level, time: f32) {
    for entity in &level.entities {
        if !entity.alive {
            continue;
        }
        match entity.kind {
            EntityKind::Platform => draw_platform(entity),
            EntityKind::Coin => draw_coin(entity),
            EntityKind::Enemy => draw_enemy(entity),
            EntityKind::Hazard => draw_hazard(entity, time),
            EntityKind::Goal => draw_goal(entity, level.all_coins_collected()),
            // The session owns and draws the player
            EntityKind::Player => {}
        }
    }
}

fn draw_platform(e: &Entity) {
    let (x, y, w, h) = body_rect(e);
    draw_rectangle(x, y, w, h, Color::from_rgba(110, 72, 38, 255));
    // Grass lip along the walkable top
    draw_rectangle(x, y, w, 10.0, Color::from_rgba(46, 140, 50, 255));
    draw_rectangle(x, y + 10.0, w, 3.0, Color::from_rgba(80, 52, 26, 255));
}

fn draw_coin(e: &Entity) {
    let r = e.size.x * 0.5 - 2.0;
    // Quantized glint, same cadence the hazards pulse at
    let glint = ((e.anim_time * 4.0) as i32 % 2) as f32;
    let cx = e.position.x;
    let cy = screen_y(e.position.y);
    draw_circle(cx, cy, r, Color::from_rgba(255, 200, 40, 255));
    draw_circle_lines(cx, cy, r, 2.0, Color::from_rgba(190, 140, 20, 255));
    draw_circle(
        cx - r * 0.3,
        cy - r * 0.3,
        2.0 + glint,
        Color::from_rgba(255, 245, 200, 255),
    );
}

fn draw_enemy(e: &Entity) {
    let (x, y, w, h) = body_rect(e);
    draw_rectangle(x, y, w, h, Color::from_rgba(178, 34, 34, 255));
    draw_rectangle(x, y + h - 8.0, w, 8.0, Color::from_rgba(120, 20, 20, 255));

    // Pupils lead in the walking direction
    let dir = e.patrol.map(|p| p.speed.signum()).unwrap_or(1.0);
    let eye_y = y + h * 0.3;
    for side in [-1.0, 1.0] {
        let eye_x = e.position.x + side * w * 0.22;
        draw_circle(eye_x, eye_y, 5.0, WHITE);
        draw_circle(eye_x + dir * 2.0, eye_y, 2.5, BLACK);
    }
}

fn draw_hazard(e: &Entity, time: f32) {
    let (x, y, w, h) = body_rect(e);
    match e.hazard {
        Some(HazardKind::Lava) => {
            // Alpha pulses between 200 and 255 at 4 Hz
            let alpha = (200 + 55 * ((time * 4.0) as i32 % 2)) as u8;
            draw_rectangle(x, y, w, h, Color::from_rgba(230, 80, 20, alpha));
            draw_rectangle(x, y, w, 6.0, Color::from_rgba(255, 150, 40, alpha));
        }
        Some(HazardKind::Water) | None => {
            // Surface foam bobs a few pixels at 2 Hz
            let bob = 3.0 * ((time * 2.0) as i32 % 2) as f32;
            draw_rectangle(x, y, w, h, Color::from_rgba(50, 110, 220, 200));
            draw_rectangle(x, y - bob, w, 5.0, Color::from_rgba(200, 225, 255, 220));
        }
    }
}

fn draw_goal(e: &Entity, open: bool) {
    let (x, y, _w, h) = body_rect(e);
    let pole_x = x + 4.0;
    draw_rectangle(pole_x, y, 6.0, h, Color::from_rgba(160, 160, 170, 255));
    draw_rectangle(pole_x - 6.0, y + h - 6.0, 18.0, 6.0, Color::from_rgba(90, 90, 100, 255));

    let flag_color = if open {
        Color::from_rgba(60, 200, 80, 255)
    } else {
        Color::from_rgba(130, 130, 140, 255)
    };
    draw_triangle(
        vec2(pole_x + 6.0, y + 2.0),
        vec2(pole_x + 6.0, y + 30.0),
        vec2(pole_x + 44.0, y + 16.0),
        flag_color,
    );
}

/// Shirt, trim and hair colors for a character model.
pub fn character_palette(character: Character) -> (Color, Color, Color) {
    match character {
        Character::Male => (
            Color::from_rgba(50, 100, 210, 255),
            Color::from_rgba(30, 65, 150, 255),
            Color::from_rgba(90, 60, 30, 255),
        ),
        Character::Female => (
            Color::from_rgba(205, 60, 125, 255),
            Color::from_rgba(150, 40, 90, 255),
            Color::from_rgba(160, 80, 40, 255),
        ),
    }
}

/// Draw the player as a blocky figure posed by the animation state.
/// Skipped on blink frames while the damage grace window runs.
pub fn draw_player(e: &Entity, state: &PlayerState, character: Character) {
    if state.is_invulnerable() && (state.invuln_timer * 10.0) as i32 % 2 == 1 {
        return;
    }

    let (shirt, trim, hair) = character_palette(character);
    let skin = Color::from_rgba(255, 215, 175, 255);
    let pants = Color::from_rgba(45, 45, 65, 255);

    let (x, y, w, h) = body_rect(e);
    let dir = match state.facing {
        Facing::Right => 1.0,
        Facing::Left => -1.0,
    };
    let cx = e.position.x;

    // Head with hair, eyes offset toward the facing side
    let head = w * 0.5;
    draw_rectangle(cx - head * 0.5, y, head, head, skin);
    draw_rectangle(cx - head * 0.5, y, head, 6.0, hair);
    if character == Character::Female {
        draw_rectangle(cx - dir * head * 0.5 - 2.0, y, 4.0, head + 6.0, hair);
    }
    draw_circle(cx + dir * 5.0, y + head * 0.5, 2.0, BLACK);

    // Torso
    let torso_y = y + head;
    let torso_h = h * 0.4;
    draw_rectangle(x + 4.0, torso_y, w - 8.0, torso_h, shirt);

    // Arms: raised while jumping, at the sides otherwise
    let arm_w = 6.0;
    if state.anim == AnimState::Jump {
        draw_rectangle(x - 2.0, torso_y - 8.0, arm_w, 14.0, trim);
        draw_rectangle(x + w - 4.0, torso_y - 8.0, arm_w, 14.0, trim);
    } else {
        draw_rectangle(x - 2.0, torso_y + 2.0, arm_w, 16.0, trim);
        draw_rectangle(x + w - 4.0, torso_y + 2.0, arm_w, 16.0, trim);
    }

    // Legs: stride alternates with the walk frame, tucked mid-jump
    let leg_y = torso_y + torso_h;
    let leg_h = (y + h - leg_y).max(6.0);
    let leg_w = 8.0;
    match state.anim {
        AnimState::Walk => {
            let stride = if state.walk_frame % 2 == 0 { 4.0 } else { -4.0 };
            draw_rectangle(cx - 10.0 + stride * dir, leg_y, leg_w, leg_h, pants);
            draw_rectangle(cx + 2.0 - stride * dir, leg_y, leg_w, leg_h, pants);
        }
        AnimState::Jump => {
            draw_rectangle(cx - 10.0, leg_y, leg_w, leg_h * 0.6, pants);
            draw_rectangle(cx + 2.0, leg_y, leg_w, leg_h * 0.6, pants);
        }
        AnimState::Idle => {
            draw_rectangle(cx - 10.0, leg_y, leg_w, leg_h, pants);
            draw_rectangle(cx + 2.0, leg_y, leg_w, leg_h, pants);
        }
    }
}

/// Top status bar: hearts, coin tally, score, level name.
pub fn draw_hud(session: &GameSession) {
    draw_rectangle(
        0.0,
        0.0,
        screen_width(),
        40.0,
        Color::from_rgba(40, 40, 60, 230),
    );

    for i in 0..tuning::MAX_HEALTH {
        let color = if i < session.state.health {
            Color::from_rgba(225, 50, 60, 255)
        } else {
            Color::from_rgba(100, 100, 100, 255)
        };
        draw_heart(32.0 + i as f32 * 40.0, 20.0, 12.0, color);
    }

    draw_circle(205.0, 20.0, 9.0, Color::from_rgba(255, 200, 40, 255));
    draw_circle_lines(205.0, 20.0, 9.0, 2.0, Color::from_rgba(190, 140, 20, 255));
    draw_text(
        &format!("{}/{}", session.level.coins_collected, session.level.total_coins),
        222.0,
        27.0,
        20.0,
        YELLOW,
    );

    draw_text(
        &format!("SCORE {}", session.state.score),
        320.0,
        27.0,
        20.0,
        Color::from_rgba(255, 220, 120, 255),
    );

    draw_text(
        &format!("Level: {}", session.level.name),
        screen_width() - 250.0,
        27.0,
        18.0,
        WHITE,
    );
}

/// Two lobes and a tip, drawn in screen space around (cx, cy).
fn draw_heart(cx: f32, cy: f32, size: f32, color: Color) {
    let lobe_r = size * 0.32;
    draw_circle(cx - lobe_r, cy - size * 0.15, lobe_r, color);
    draw_circle(cx + lobe_r, cy - size * 0.15, lobe_r, color);
    draw_triangle(
        vec2(cx - size * 0.6, cy - size * 0.05),
        vec2(cx + size * 0.6, cy - size * 0.05),
        vec2(cx, cy + size * 0.55),
        color,
    );
}
