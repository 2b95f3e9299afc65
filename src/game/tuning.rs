//! Gameplay tuning constants
//!
//! Every gameplay number lives here so the feel of the game can be adjusted
//! in one place. Speeds are px/s and accelerations px/s^2; the values were
//! picked for a 200 px jump apex and a snappy run on a 1000x650 playfield.

/// Downward acceleration while airborne (px/s^2)
pub const GRAVITY: f32 = 3600.0;

/// Maximum horizontal run speed (px/s)
pub const MOVE_SPEED: f32 = 300.0;

/// Horizontal acceleration toward the input direction (px/s^2)
pub const RUN_ACCEL: f32 = 2400.0;

/// Horizontal deceleration with no input (px/s^2)
pub const RUN_FRICTION: f32 = 2400.0;

/// Upward velocity applied on jump (px/s). Apex = JUMP_SPEED^2 / (2 * GRAVITY) = 200 px
pub const JUMP_SPEED: f32 = 1200.0;

/// Fall speed cap (px/s)
pub const MAX_FALL_SPEED: f32 = 1800.0;

/// Starting and maximum player health (hearts)
pub const MAX_HEALTH: i32 = 3;

/// Seconds of invulnerability granted after taking damage
pub const INVULN_GRACE: f32 = 1.0;

/// Score awarded per coin
pub const COIN_SCORE: u32 = 100;

/// Default world y below which the player dies outright
pub const KILL_PLANE_Y: f32 = -200.0;

/// Upward pop when bounced off an enemy (the horizontal velocity also flips)
pub const KNOCKBACK_ENEMY_VY: f32 = JUMP_SPEED / 2.0;

/// Upward pop when stepping into a hazard
pub const KNOCKBACK_HAZARD_VY: f32 = JUMP_SPEED / 1.5;

/// |vx| below this renders as idle rather than walking (px/s)
pub const ANIM_EPSILON: f32 = 10.0;

/// Seconds per walk-cycle frame
pub const WALK_FRAME_TIME: f32 = 0.12;

/// Number of frames in the walk cycle
pub const WALK_FRAMES: u8 = 8;

/// Ground and platform tiles are square at this size (px)
pub const TILE_SIZE: f32 = 64.0;

/// Player bounding box (w, h)
pub const PLAYER_SIZE: (f32, f32) = (48.0, 64.0);

/// Coin bounding box (w, h)
pub const COIN_SIZE: (f32, f32) = (32.0, 32.0);

/// Enemy bounding box (w, h)
pub const ENEMY_SIZE: (f32, f32) = (48.0, 40.0);

/// Goal flag bounding box (w, h)
pub const GOAL_SIZE: (f32, f32) = (64.0, 96.0);

/// Hazard height; width comes from level data (px)
pub const HAZARD_HEIGHT: f32 = 64.0;
