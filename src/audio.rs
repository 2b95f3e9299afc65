//! Sound effects and music
//!
//! Loads the effect bank once at startup. A missing or unreadable file
//! downgrades that cue to silence and logs the path; audio problems
//! never stop the game from running.

use macroquad::audio::{load_sound, play_sound, stop_sound, PlaySoundParams, Sound};

use crate::game::event::AudioCue;

pub struct AudioBank {
    coin: Option<Sound>,
    jump: Option<Sound>,
    hurt: Option<Sound>,
    win: Option<Sound>,
    lose: Option<Sound>,
    music: Option<Sound>,
}

impl AudioBank {
    /// Load every effect from `assets/sounds/`.
    pub async fn load() -> Self {
        Self {
            coin: load_or_warn("assets/sounds/coin.wav").await,
            jump: load_or_warn("assets/sounds/jump.wav").await,
            hurt: load_or_warn("assets/sounds/hurt.wav").await,
            win: load_or_warn("assets/sounds/win.wav").await,
            lose: load_or_warn("assets/sounds/lose.wav").await,
            music: load_or_warn("assets/sounds/music.ogg").await,
        }
    }

    /// A bank with nothing loaded, for headless flow tests.
    pub fn empty() -> Self {
        Self {
            coin: None,
            jump: None,
            hurt: None,
            win: None,
            lose: None,
            music: None,
        }
    }

    /// Fire one cue and forget it. Effect volumes sit between 0.4 and
    /// 0.8 so they read over the 0.3 music bed.
    pub fn play(&self, cue: AudioCue) {
        let (sound, volume) = match cue {
            AudioCue::Coin => (&self.coin, 0.5),
            AudioCue::Jump => (&self.jump, 0.4),
            AudioCue::Hurt => (&self.hurt, 0.7),
            AudioCue::Win => (&self.win, 0.8),
            AudioCue::Lose => (&self.lose, 0.8),
        };
        if let Some(sound) = sound {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume,
                },
            );
        }
    }

    pub fn start_music(&self) {
        if let Some(music) = &self.music {
            play_sound(
                music,
                PlaySoundParams {
                    looped: true,
                    volume: 0.3,
                },
            );
        }
    }

    pub fn stop_music(&self) {
        if let Some(music) = &self.music {
            stop_sound(music);
        }
    }
}

async fn load_or_warn(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            eprintln!("Audio disabled for {}: {}", path, e);
            None
        }
    }
}
