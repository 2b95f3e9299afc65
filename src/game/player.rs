//! Player Controller
//!
//! Turns one frame of input into player velocity: run acceleration with
//! friction, gravity while airborne, a jump impulse when grounded. Inputs
//! are clamped, never rejected. The animation state is a pure function of
//! (grounded, |vx|) so rendering never second-guesses physics.

use super::entity::Entity;
use super::tuning;

/// Which way the player sprite looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

/// Selectable player model. Cosmetic only, the controller never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Character {
    Male,
    Female,
}

impl Character {
    pub fn label(&self) -> &'static str {
        match self {
            Character::Male => "MALE",
            Character::Female => "FEMALE",
        }
    }
}

/// Animation state, derived each frame from motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimState {
    Idle,
    Walk,
    Jump,
}

impl AnimState {
    /// Jump when airborne, walk when moving on the ground, idle otherwise.
    pub fn from_motion(grounded: bool, vx: f32) -> Self {
        if !grounded {
            AnimState::Jump
        } else if vx.abs() > tuning::ANIM_EPSILON {
            AnimState::Walk
        } else {
            AnimState::Idle
        }
    }
}

/// One frame of input as the controller sees it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Requested horizontal direction, clamped to [-1, 1]
    pub move_dir: f32,
    /// Jump was pressed this frame
    pub jump_pressed: bool,
}

impl FrameInput {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Everything about the player that is not the physical body.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Hearts remaining, always within [0, MAX_HEALTH]
    pub health: i32,
    pub score: u32,
    /// Seconds of damage immunity remaining; > 0 means invulnerable
    pub invuln_timer: f32,
    /// Standing on something solid (set by the collision resolver)
    pub grounded: bool,
    pub facing: Facing,
    pub anim: AnimState,
    /// Current frame of the cosmetic walk cycle
    pub walk_frame: u8,
    pub walk_timer: f32,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            health: tuning::MAX_HEALTH,
            score: 0,
            invuln_timer: 0.0,
            grounded: false,
            facing: Facing::Right,
            anim: AnimState::Idle,
            walk_frame: 0,
            walk_timer: 0.0,
        }
    }

    /// Fresh state for the next level, keeping score and health.
    pub fn carried_over(&self) -> Self {
        Self {
            health: self.health,
            score: self.score,
            ..Self::new()
        }
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invuln_timer > 0.0
    }

    /// Apply one hit: health drops by 1 (floored at 0) and the grace window
    /// opens. Hits during the grace window are ignored entirely.
    /// Returns true when this hit left the player dead.
    pub fn apply_damage(&mut self) -> bool {
        if self.is_invulnerable() {
            return false;
        }
        self.health = (self.health - 1).max(0);
        self.invuln_timer = tuning::INVULN_GRACE;
        self.health == 0
    }

    pub fn tick_invulnerability(&mut self, dt: f32) {
        self.invuln_timer = (self.invuln_timer - dt).max(0.0);
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Move `current` toward `target` by at most `amount`, never overshooting.
fn approach(current: f32, target: f32, amount: f32) -> f32 {
    if current < target {
        (current + amount).min(target)
    } else {
        (current - amount).max(target)
    }
}

/// Advance the player one frame. Horizontal velocity approaches the input
/// direction capped at the run speed, gravity pulls while airborne, and a
/// grounded jump applies the impulse. Returns true when a jump started.
pub fn update(entity: &mut Entity, state: &mut PlayerState, input: FrameInput, dt: f32) -> bool {
    let move_dir = input.move_dir.clamp(-1.0, 1.0);

    // =========================================================================
    // Run: accelerate toward the input direction, friction when idle
    // =========================================================================
    let target = move_dir * tuning::MOVE_SPEED;
    let rate = if move_dir == 0.0 {
        tuning::RUN_FRICTION
    } else {
        tuning::RUN_ACCEL
    };
    entity.velocity.x = approach(entity.velocity.x, target, rate * dt);

    // =========================================================================
    // Gravity: only bites while airborne, capped at the fall speed limit
    // =========================================================================
    if !state.grounded {
        entity.velocity.y = (entity.velocity.y - tuning::GRAVITY * dt).max(-tuning::MAX_FALL_SPEED);
    }

    // =========================================================================
    // Jump
    // =========================================================================
    let mut jumped = false;
    if input.jump_pressed && state.grounded {
        entity.velocity.y = tuning::JUMP_SPEED;
        state.grounded = false;
        jumped = true;
    }

    // Facing follows the input direction; neutral input keeps the old facing
    if move_dir > 0.0 {
        state.facing = Facing::Right;
    } else if move_dir < 0.0 {
        state.facing = Facing::Left;
    }

    // =========================================================================
    // Animation state plus the cosmetic walk cycle
    // =========================================================================
    state.anim = AnimState::from_motion(state.grounded, entity.velocity.x);
    if state.anim == AnimState::Walk {
        state.walk_timer += dt;
        if state.walk_timer >= tuning::WALK_FRAME_TIME {
            state.walk_timer = 0.0;
            state.walk_frame = (state.walk_frame + 1) % tuning::WALK_FRAMES;
        }
    } else {
        state.walk_timer = 0.0;
        state.walk_frame = 0;
    }

    jumped
}
