//! COINDASH: a small keyboard platformer
//!
//! Collect every coin, dodge the patrols, reach the flag:
//! - Three handmade levels loaded from RON files
//! - Axis-separated AABB collision reported as events, applied by the session
//! - Menu, character select and end screens driven by a single flow enum

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod audio;
mod game;
mod input;
mod level;
mod screens;

use macroquad::prelude::*;

use app::App;
use audio::AudioBank;

/// Directory scanned for campaign levels, played in filename order.
const LEVEL_DIR: &str = "assets/levels";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("COINDASH v{}", VERSION),
        window_width: 1000,
        window_height: 650,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let levels = match level::load_campaign(LEVEL_DIR) {
        Ok(levels) => levels,
        Err(e) => {
            eprintln!("Failed to load levels from {}: {}", LEVEL_DIR, e);
            // Returning would only finish the future and exit 0
            std::process::exit(1);
        }
    };
    println!("Loaded {} levels from {}", levels.len(), LEVEL_DIR);

    let audio = AudioBank::load().await;

    println!("=== COINDASH v{} ===", VERSION);

    let mut app = App::new(levels, audio, vec2(screen_width(), screen_height()));

    loop {
        app.frame(get_frame_time());
        next_frame().await;
    }
}
