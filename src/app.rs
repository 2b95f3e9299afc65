//! Game flow control
//!
//! One screen owns each frame: Menu -> CharacterSelect -> Playing ->
//! GameOver -> Menu. Levels chain inside Playing with health and score
//! carried across; Escape abandons the run and discards the session.
//! The flow consumes decoded input, so every transition is testable
//! without a window.

use macroquad::math::Vec2;

use crate::audio::AudioBank;
use crate::game::event::AudioCue;
use crate::game::player::{Character, FrameInput};
use crate::game::render;
use crate::game::session::{GameSession, LevelPhase};
use crate::input::{Action, InputState};
use crate::level::LevelData;
use crate::screens::{GameOverScreen, MenuScreen, SelectScreen};

/// The top-level screens (one active at a time)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    CharacterSelect,
    Playing,
    GameOver,
}

/// One frame of decoded input for the flow controller
#[derive(Debug, Clone, Copy, Default)]
pub struct AppInput {
    /// Enter/Space was pressed this frame
    pub confirm: bool,
    /// Escape was pressed this frame
    pub cancel: bool,
    pub select_left: bool,
    pub select_right: bool,
    /// What the player controller sees while a level runs
    pub play: FrameInput,
}

impl AppInput {
    pub fn poll(input: &InputState) -> Self {
        Self {
            confirm: input.action_pressed(Action::Confirm),
            cancel: input.action_pressed(Action::Cancel),
            select_left: input.action_pressed(Action::MoveLeft),
            select_right: input.action_pressed(Action::MoveRight),
            play: input.frame(),
        }
    }
}

/// Main application state: the campaign, the active screen and whatever
/// session is in flight.
pub struct App {
    pub screen: Screen,
    pub character: Character,
    /// Campaign slot of the running level
    pub level_index: usize,
    /// Loaded level documents in campaign order, never empty
    levels: Vec<LevelData>,
    pub session: Option<GameSession>,

    menu: MenuScreen,
    select: SelectScreen,
    game_over: Option<GameOverScreen>,

    audio: AudioBank,
    input: InputState,
    /// Window extent, fixed for the life of the app
    bounds: Vec2,
    /// Accumulated play time, drives the quantized animations
    time: f32,
    /// Coins banked across the whole run, for the end screen
    run_coins: u32,
}

impl App {
    pub fn new(levels: Vec<LevelData>, audio: AudioBank, bounds: Vec2) -> Self {
        Self {
            screen: Screen::Menu,
            character: Character::Male,
            level_index: 0,
            levels,
            session: None,
            menu: MenuScreen::new(bounds),
            select: SelectScreen::new(),
            game_over: None,
            audio,
            input: InputState::new(),
            bounds,
            time: 0.0,
            run_coins: 0,
        }
    }

    /// Poll input, advance one frame, draw. The whole per-frame loop.
    pub fn frame(&mut self, dt: f32) {
        let input = AppInput::poll(&self.input);
        self.advance(input, dt);
        self.draw();
    }

    /// Advance the flow by one frame of decoded input.
    pub fn advance(&mut self, input: AppInput, dt: f32) {
        self.time += dt;

        match self.screen {
            Screen::Menu => {
                self.menu.update(dt);
                if input.confirm {
                    self.select = SelectScreen::new();
                    self.screen = Screen::CharacterSelect;
                }
            }
            Screen::CharacterSelect => {
                self.select.update(dt);
                if input.select_left {
                    self.select.selected = Character::Male;
                } else if input.select_right {
                    self.select.selected = Character::Female;
                }
                if input.cancel {
                    self.return_to_menu();
                } else if input.confirm {
                    self.character = self.select.selected;
                    self.start_run();
                }
            }
            Screen::Playing => {
                if input.cancel {
                    self.abandon_run();
                    return;
                }
                let Some(session) = self.session.as_mut() else {
                    self.return_to_menu();
                    return;
                };
                session.update(input.play, dt);
                let cues: Vec<AudioCue> = session.audio_cues.drain().collect();
                let phase = session.phase;
                for cue in cues {
                    self.audio.play(cue);
                }
                match phase {
                    LevelPhase::Playing => {}
                    LevelPhase::LevelComplete => self.advance_level(),
                    LevelPhase::PlayerDead => self.fail_run(),
                }
            }
            Screen::GameOver => {
                if let Some(over) = self.game_over.as_mut() {
                    over.update(dt);
                }
                if input.confirm || input.cancel {
                    self.return_to_menu();
                }
            }
        }
    }

    pub fn draw(&self) {
        match self.screen {
            Screen::Menu => self.menu.draw(),
            Screen::CharacterSelect => self.select.draw(),
            Screen::Playing => {
                if let Some(session) = &self.session {
                    render::draw_session(session, self.character, self.time);
                }
            }
            Screen::GameOver => {
                if let Some(over) = &self.game_over {
                    over.draw();
                }
            }
        }
    }

    /// Start a fresh run on the first level.
    fn start_run(&mut self) {
        self.level_index = 0;
        self.run_coins = 0;
        let level = self.levels[0].build(0);
        self.session = Some(GameSession::new(level));
        self.screen = Screen::Playing;
        self.audio.start_music();
    }

    /// Move to the next campaign slot, or finish the run on the last one.
    /// Health and score survive the hop, the grace timer does not.
    fn advance_level(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        self.run_coins += session.level.coins_collected;

        let next = self.level_index + 1;
        if next < self.levels.len() {
            self.level_index = next;
            let level = self.levels[next].build(next);
            self.session = Some(GameSession::with_state(level, session.state.carried_over()));
        } else {
            self.audio.stop_music();
            self.game_over = Some(GameOverScreen::victory(
                self.bounds,
                session.level.name.clone(),
                self.run_coins,
                session.state.score,
            ));
            self.screen = Screen::GameOver;
        }
    }

    fn fail_run(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        self.audio.stop_music();
        self.run_coins += session.level.coins_collected;
        self.game_over = Some(GameOverScreen::defeat(
            self.bounds,
            session.level.name.clone(),
            self.run_coins,
            session.state.score,
        ));
        self.screen = Screen::GameOver;
    }

    /// Escape mid-level: throw the session away, nothing is kept.
    fn abandon_run(&mut self) {
        self.audio.stop_music();
        self.session = None;
        self.return_to_menu();
    }

    fn return_to_menu(&mut self) {
        self.game_over = None;
        self.menu = MenuScreen::new(self.bounds);
        self.screen = Screen::Menu;
    }
}
