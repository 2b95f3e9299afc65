//! Game Session
//!
//! Owns one attempt at one level: the entity roster, the player body and
//! state, and the Playing -> {LevelComplete, PlayerDead} phase machine.
//! `update` advances a frame in a fixed order; events coming back from the
//! collision resolver are applied here, and anything audible is queued as
//! a cue for the app to play.

use macroquad::math::Vec2;

use super::collision::{self, Aabb};
use super::entity::{Entity, EntityKind};
use super::event::{AudioCue, DamageSource, EventQueue, GameEvent};
use super::player::{self, FrameInput, PlayerState};
use super::tuning;

/// A loaded level ready to play.
#[derive(Debug, Clone)]
pub struct Level {
    /// Zero-based position in the campaign order
    pub index: usize,
    pub name: String,
    /// Everything except the player
    pub entities: Vec<Entity>,
    pub total_coins: u32,
    pub coins_collected: u32,
    pub player_start: Vec2,
    /// Falling below this y kills outright
    pub kill_plane_y: f32,
}

impl Level {
    pub fn all_coins_collected(&self) -> bool {
        self.coins_collected >= self.total_coins
    }
}

/// Per-level phase. Both end states are terminal; the app decides what
/// happens next (advance, game over, back to menu).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelPhase {
    Playing,
    LevelComplete,
    PlayerDead,
}

/// One attempt at one level.
pub struct GameSession {
    pub level: Level,
    pub player: Entity,
    pub state: PlayerState,
    pub phase: LevelPhase,
    /// Sounds queued during update, drained by the app each frame
    pub audio_cues: EventQueue<AudioCue>,
}

impl GameSession {
    /// Start a level fresh (full health, zero score).
    pub fn new(level: Level) -> Self {
        Self::with_state(level, PlayerState::new())
    }

    /// Start a level with progress carried in from the previous one.
    pub fn with_state(level: Level, state: PlayerState) -> Self {
        let player = Entity::player(level.player_start);
        Self {
            level,
            player,
            state,
            phase: LevelPhase::Playing,
            audio_cues: EventQueue::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase != LevelPhase::Playing
    }

    /// Advance one frame. Inert once the phase is terminal.
    pub fn update(&mut self, input: FrameInput, dt: f32) {
        if self.phase != LevelPhase::Playing {
            return;
        }

        // =====================================================================
        // Grace window
        // =====================================================================
        self.state.tick_invulnerability(dt);

        // =====================================================================
        // Player controller
        // =====================================================================
        if player::update(&mut self.player, &mut self.state, input, dt) {
            self.audio_cues.send(AudioCue::Jump);
        }

        // =====================================================================
        // Enemy patrol and hazard animation
        // =====================================================================
        for entity in self.level.entities.iter_mut().filter(|e| e.alive) {
            entity.tick_patrol(dt);
            entity.tick_anim(dt);
        }

        // =====================================================================
        // Collision and events
        // =====================================================================
        let all_coins = self.level.all_coins_collected();
        let events = collision::resolve(
            &mut self.player,
            &mut self.state,
            &mut self.level.entities,
            all_coins,
            dt,
        );
        for event in events {
            self.apply(event);
        }

        // A coin grabbed on the way into the flag counts this same frame
        if self.phase == LevelPhase::Playing
            && self.level.all_coins_collected()
            && self.touching_goal()
        {
            self.complete_level();
        }

        // =====================================================================
        // Kill plane
        // =====================================================================
        if self.phase == LevelPhase::Playing && self.player.position.y < self.level.kill_plane_y {
            self.kill_player();
        }
    }

    fn apply(&mut self, event: GameEvent) {
        if self.phase != LevelPhase::Playing {
            return;
        }
        match event {
            GameEvent::CoinCollected { .. } => {
                self.level.coins_collected =
                    (self.level.coins_collected + 1).min(self.level.total_coins);
                self.state.score += tuning::COIN_SCORE;
                self.audio_cues.send(AudioCue::Coin);
            }
            GameEvent::Damage { source } => {
                // Ignored entirely during the grace window
                if self.state.is_invulnerable() {
                    return;
                }
                let fatal = self.state.apply_damage();
                match source {
                    DamageSource::Enemy => {
                        self.player.velocity.y = tuning::KNOCKBACK_ENEMY_VY;
                        self.player.velocity.x = -self.player.velocity.x;
                    }
                    DamageSource::Hazard => {
                        self.player.velocity.y = tuning::KNOCKBACK_HAZARD_VY;
                    }
                }
                self.state.grounded = false;
                self.audio_cues.send(AudioCue::Hurt);
                if fatal {
                    self.kill_player();
                }
            }
            GameEvent::LevelComplete => {
                self.complete_level();
            }
        }
    }

    fn touching_goal(&self) -> bool {
        let player_box = Aabb::of(&self.player);
        self.level
            .entities
            .iter()
            .any(|e| e.alive && e.kind == EntityKind::Goal && player_box.overlaps(&Aabb::of(e)))
    }

    fn complete_level(&mut self) {
        self.phase = LevelPhase::LevelComplete;
        self.audio_cues.send(AudioCue::Win);
    }

    fn kill_player(&mut self) {
        self.phase = LevelPhase::PlayerDead;
        self.audio_cues.send(AudioCue::Lose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::{HazardKind, Patrol};
    use macroquad::math::vec2;

    const DT: f32 = 1.0 / 60.0;

    fn fixed(x: f32) -> Patrol {
        Patrol {
            min_x: x,
            max_x: x,
            speed: 0.0,
        }
    }

    /// A flat floor with the player start resting on top of it.
    fn floor() -> Entity {
        Entity::platform(vec2(0.0, 0.0), vec2(1280.0, 64.0))
    }

    fn test_level(mut entities: Vec<Entity>, total_coins: u32) -> Level {
        entities.insert(0, floor());
        Level {
            index: 0,
            name: "Test Grounds".to_string(),
            entities,
            total_coins,
            coins_collected: 0,
            player_start: vec2(0.0, 64.0),
            kill_plane_y: -200.0,
        }
    }

    fn cues(session: &mut GameSession) -> Vec<AudioCue> {
        session.audio_cues.drain().collect()
    }

    #[test]
    fn test_coin_pickup_scores_and_counts() {
        let level = test_level(vec![Entity::coin(vec2(0.0, 64.0))], 1);
        let mut session = GameSession::new(level);

        session.update(FrameInput::none(), DT);

        assert_eq!(session.level.coins_collected, 1);
        assert_eq!(session.state.score, tuning::COIN_SCORE);
        assert!(cues(&mut session).contains(&AudioCue::Coin));
    }

    #[test]
    fn test_collecting_every_coin_then_goal_completes() {
        // Three coins stacked on the start plus the goal flag: one frame
        // grabs the coins, and the goal opens the same frame.
        let level = test_level(
            vec![
                Entity::coin(vec2(0.0, 64.0)),
                Entity::coin(vec2(0.0, 64.0)),
                Entity::coin(vec2(0.0, 64.0)),
                Entity::goal(vec2(0.0, 64.0)),
            ],
            3,
        );
        let mut session = GameSession::new(level);

        session.update(FrameInput::none(), DT);

        assert_eq!(session.phase, LevelPhase::LevelComplete);
        assert_eq!(session.state.score, 3 * tuning::COIN_SCORE);
        assert_eq!(session.level.coins_collected, 3);
        assert!(cues(&mut session).contains(&AudioCue::Win));
    }

    #[test]
    fn test_goal_is_closed_while_coins_remain() {
        let level = test_level(
            vec![
                Entity::coin(vec2(500.0, 64.0)), // far out of reach
                Entity::goal(vec2(0.0, 64.0)),
            ],
            1,
        );
        let mut session = GameSession::new(level);

        for _ in 0..30 {
            session.update(FrameInput::none(), DT);
        }
        assert_eq!(session.phase, LevelPhase::Playing);

        // Once the count is satisfied the flag works
        session.level.coins_collected = 1;
        session.update(FrameInput::none(), DT);
        assert_eq!(session.phase, LevelPhase::LevelComplete);
    }

    #[test]
    fn test_enemy_hit_decrements_and_knocks_back() {
        let level = test_level(vec![Entity::enemy(vec2(0.0, 64.0), fixed(0.0))], 0);
        let mut session = GameSession::new(level);
        session.player.velocity.x = 100.0;

        session.update(FrameInput::none(), DT);

        assert_eq!(session.state.health, tuning::MAX_HEALTH - 1);
        assert_eq!(session.state.invuln_timer, tuning::INVULN_GRACE);
        assert_eq!(session.player.velocity.y, tuning::KNOCKBACK_ENEMY_VY);
        assert!(session.player.velocity.x < 0.0); // direction flipped
        assert!(!session.state.grounded);
        assert!(cues(&mut session).contains(&AudioCue::Hurt));
    }

    #[test]
    fn test_hazard_hit_pops_upward_without_flip() {
        let level = test_level(
            vec![Entity::hazard(vec2(0.0, 64.0), 150.0, HazardKind::Lava)],
            0,
        );
        let mut session = GameSession::new(level);
        session.player.velocity.x = 100.0;

        session.update(FrameInput::none(), DT);

        assert_eq!(session.state.health, tuning::MAX_HEALTH - 1);
        assert_eq!(session.player.velocity.y, tuning::KNOCKBACK_HAZARD_VY);
        assert!(session.player.velocity.x > 0.0);
    }

    #[test]
    fn test_contacts_inside_grace_cost_one_heart() {
        let level = test_level(vec![Entity::enemy(vec2(0.0, 64.0), fixed(0.0))], 0);
        let mut session = GameSession::new(level);

        // Overlapping the enemy for many consecutive frames, all inside
        // the one second grace window
        for _ in 0..20 {
            session.update(FrameInput::none(), DT);
        }

        assert_eq!(session.state.health, tuning::MAX_HEALTH - 1);
    }

    #[test]
    fn test_second_hit_lands_after_grace_expires() {
        let level = test_level(vec![Entity::enemy(vec2(0.0, 64.0), fixed(0.0))], 0);
        let mut session = GameSession::new(level);

        // Knockback tosses the player up; it lands back on the enemy well
        // before the 80 frame mark, and the grace window (60 frames) has
        // expired by then.
        for _ in 0..80 {
            session.update(FrameInput::none(), DT);
        }

        assert_eq!(session.state.health, tuning::MAX_HEALTH - 2);
    }

    #[test]
    fn test_lava_at_one_heart_is_fatal() {
        let level = test_level(
            vec![Entity::hazard(vec2(0.0, 64.0), 150.0, HazardKind::Lava)],
            0,
        );
        let mut state = PlayerState::new();
        state.health = 1;
        let mut session = GameSession::with_state(level, state);

        session.update(FrameInput::none(), DT);

        assert_eq!(session.state.health, 0);
        assert_eq!(session.phase, LevelPhase::PlayerDead);
        let played = cues(&mut session);
        assert!(played.contains(&AudioCue::Hurt));
        assert!(played.contains(&AudioCue::Lose));
    }

    #[test]
    fn test_falling_past_the_kill_plane_is_fatal() {
        let level = Level {
            index: 0,
            name: "Void".to_string(),
            entities: Vec::new(),
            total_coins: 0,
            coins_collected: 0,
            player_start: vec2(0.0, 64.0),
            kill_plane_y: -200.0,
        };
        let mut session = GameSession::new(level);

        for _ in 0..60 {
            session.update(FrameInput::none(), DT);
        }

        assert_eq!(session.phase, LevelPhase::PlayerDead);
        assert_eq!(session.state.health, tuning::MAX_HEALTH); // death by fall, not damage
        assert!(cues(&mut session).contains(&AudioCue::Lose));
    }

    #[test]
    fn test_jump_queues_cue() {
        let level = test_level(Vec::new(), 0);
        let mut session = GameSession::new(level);

        // First frame settles onto the floor, second frame jumps
        session.update(FrameInput::none(), DT);
        session.update(
            FrameInput {
                move_dir: 0.0,
                jump_pressed: true,
            },
            DT,
        );

        assert!(cues(&mut session).contains(&AudioCue::Jump));
        assert_eq!(session.player.velocity.y, tuning::JUMP_SPEED);
    }

    #[test]
    fn test_terminal_phase_is_inert() {
        let level = test_level(Vec::new(), 0);
        let mut session = GameSession::new(level);
        session.phase = LevelPhase::LevelComplete;
        let before = session.player.position;

        session.update(
            FrameInput {
                move_dir: 1.0,
                jump_pressed: true,
            },
            DT,
        );

        assert_eq!(session.player.position, before);
        assert!(session.audio_cues.is_empty());
    }

    #[test]
    fn test_coins_collected_never_exceeds_total() {
        // Two coin entities but a (malformed) total of one: the count
        // clamps while score still pays per pickup.
        let level = test_level(
            vec![
                Entity::coin(vec2(0.0, 64.0)),
                Entity::coin(vec2(0.0, 64.0)),
            ],
            1,
        );
        let mut session = GameSession::new(level);

        session.update(FrameInput::none(), DT);

        assert_eq!(session.level.coins_collected, 1);
        assert!(session.level.coins_collected <= session.level.total_coins);
    }

    #[test]
    fn test_patrolling_enemy_moves_during_update() {
        let level = test_level(
            vec![Entity::enemy(
                vec2(600.0, 84.0),
                Patrol {
                    min_x: 550.0,
                    max_x: 650.0,
                    speed: 120.0,
                },
            )],
            0,
        );
        let mut session = GameSession::new(level);

        session.update(FrameInput::none(), DT);

        let enemy = &session.level.entities[1];
        assert!(enemy.position.x > 600.0);
    }
}
