//! Astro Siege - an asteroids-style 2D arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `render`: Draw-list composition for a pluggable presentation layer
//! - `audio`: Sound effect routing
//! - `settings`: Startup configuration and debug toggles

pub mod audio;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (origin top-left, +y down)
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Target frame timestep (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Clamp for measured frame time (stalls don't teleport entities)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Projectiles die once fully past this margin outside the screen
    pub const OFFSCREEN_MARGIN: f32 = 50.0;

    /// Asteroid tier base radius (tiers multiply this)
    pub const ASTEROID_MIN_RADIUS: f32 = 10.0;
    /// Seconds between spawn attempts at level 0
    pub const ASTEROID_SPAWN_INTERVAL: f32 = 0.8;
    /// Interval shrinks per level, down to this floor
    pub const ASTEROID_SPAWN_INTERVAL_STEP: f32 = 0.02;
    pub const ASTEROID_SPAWN_INTERVAL_FLOOR: f32 = 0.6;
    /// Spawn position offset outside the chosen edge
    pub const ASTEROID_SPAWN_MARGIN: f32 = 60.0;
    /// Spawns this close to the player are rejected
    pub const ASTEROID_SAFE_SPAWN_DIST: f32 = 200.0;
    /// Live-asteroid cap: min(base + level, limit)
    pub const ASTEROID_BASE_CAP: usize = 3;
    pub const ASTEROID_CAP_LIMIT: usize = 10;
    /// Spawn speed range: [min + 2*level, max + 4*level]
    pub const ASTEROID_BASE_SPEED_MIN: f32 = 40.0;
    pub const ASTEROID_BASE_SPEED_MAX: f32 = 80.0;
    pub const ASTEROID_SPEED_MIN_PER_LEVEL: f32 = 2.0;
    pub const ASTEROID_SPEED_MAX_PER_LEVEL: f32 = 4.0;
    /// Inward spawn velocity is deflected uniformly within +/- this
    pub const ASTEROID_SPAWN_DEFLECTION: f32 = 30.0;
    /// Split deflection angle range (degrees)
    pub const ASTEROID_SPLIT_ANGLE_MIN: f32 = 20.0;
    pub const ASTEROID_SPLIT_ANGLE_MAX: f32 = 50.0;
    /// Children leave the split this much faster than the parent
    pub const ASTEROID_SPLIT_SPEED_SCALE: f32 = 1.2;
    /// Spin sample range, degrees per second
    pub const ASTEROID_MAX_SPIN: f32 = 90.0;
    /// Wrapping this many times kills an asteroid without splitting
    pub const ASTEROID_MAX_WRAPS: u8 = 3;

    /// Player collision radius
    pub const PLAYER_RADIUS: f32 = 30.0;
    /// Turn rate, degrees per second
    pub const PLAYER_TURN_SPEED: f32 = 300.0;
    /// Thrust acceleration, pixels per second squared
    pub const PLAYER_ACCELERATION: f32 = 200.0;
    /// Velocity retained each update
    pub const PLAYER_FRICTION: f32 = 0.98;
    pub const PLAYER_MAX_SPEED: f32 = 400.0;
    pub const PLAYER_LIVES: u8 = 5;
    /// Grace period after losing a life
    pub const PLAYER_INVINCIBILITY_TIME: f32 = 2.0;
    /// Inverted-controls duration
    pub const PLAYER_DIZZY_TIME: f32 = 3.0;
    /// Impulse applied when shoved off an enemy or the boss
    pub const PLAYER_PUSHBACK_FORCE: f32 = 8.0;
    /// Hard-bounds inset during the boss fight, as a fraction of the radius
    pub const PLAYER_BOUNDS_BUFFER: f32 = 0.8;

    pub const SHOT_RADIUS: f32 = 5.0;
    pub const SHOT_SPEED: f32 = 500.0;
    pub const PLAYER_SHOOT_COOLDOWN: f32 = 0.3;
    /// Boss health removed per shot
    pub const SHOT_BOSS_DAMAGE: i32 = 1;

    /// Mikito collision radius
    pub const MIKITO_RADIUS: f32 = 40.0;
    /// Chase speed toward the player
    pub const MIKITO_SPEED: f32 = 40.0;
    /// Seconds between shots, sampled uniformly
    pub const MIKITO_SHOOT_DELAY_MIN: f32 = 3.0;
    pub const MIKITO_SHOOT_DELAY_MAX: f32 = 5.0;
    /// Side-to-side wobble (visual rotation), amplitude in degrees
    pub const MIKITO_WOBBLE_AMPLITUDE: f32 = 10.0;
    pub const MIKITO_WOBBLE_RATE: f32 = 4.0;
    pub const ENEMY_BULLET_RADIUS: f32 = 12.0;
    pub const ENEMY_BULLET_SPEED: f32 = 120.0;
    /// Director enemy scheduling
    pub const ENEMY_START_LEVEL: u32 = 5;
    pub const ENEMY_SPAWN_INTERVAL: f32 = 6.0;
    pub const ENEMY_CAP: usize = 3;

    /// Level the boss arrives at; the director stops here
    pub const BOSS_LEVEL: u32 = 10;
    pub const BOSS_HEALTH: i32 = 60;
    /// Health at or below which stage 2 triggers
    pub const BOSS_STAGE2_HEALTH: i32 = 30;
    /// Boss hitbox (rect, centered on position)
    pub const BOSS_WIDTH: f32 = 280.0;
    pub const BOSS_HEIGHT: f32 = 350.0;
    /// The boss glides left until it reaches this x
    pub const BOSS_ENTRY_X: f32 = SCREEN_WIDTH - 200.0;
    pub const BOSS_ENTRY_SPEED: f32 = 100.0;
    /// Vertical bounce speed and band
    pub const BOSS_SPEED_Y: f32 = 100.0;
    pub const BOSS_BOUNCE_MARGIN: f32 = 100.0;
    /// Stage 2 moves this much faster
    pub const BOSS_STAGE2_SPEED_SCALE: f32 = 1.2;
    /// Stage transition: duration and shake jitter
    pub const BOSS_TRANSITION_TIME: f32 = 0.5;
    pub const BOSS_SHAKE_AMPLITUDE: f32 = 5.0;

    /// Bone bullet: cadence, muzzle offset, motion
    pub const BONE_INTERVAL: f32 = 3.5;
    pub const BONE_OFFSET_X: f32 = -80.0;
    pub const BONE_OFFSET_Y: f32 = 60.0;
    pub const BONE_SPEED: f32 = 150.0;
    pub const BONE_RADIUS: f32 = 28.0;
    pub const BONE_DAMAGE: i32 = 10;
    pub const BONE_SPIN: f32 = 180.0;

    /// Cookie bullet (stage 2): per-frame chance, muzzle offset, motion
    pub const COOKIE_CHANCE: f64 = 0.005;
    pub const COOKIE_OFFSET_X: f32 = -80.0;
    pub const COOKIE_OFFSET_Y: f32 = -60.0;
    pub const COOKIE_SPEED: f32 = 200.0;
    pub const COOKIE_RADIUS: f32 = 50.0;
    pub const COOKIE_DAMAGE: i32 = 20;
    /// Shot hits a cookie absorbs before dying
    pub const COOKIE_HITS: u8 = 3;

    /// Stage 2 Mikito spawns
    pub const BOSS_MIKITO_INTERVAL: f32 = 5.0;
    pub const BOSS_MIKITO_OFFSET_X: f32 = -40.0;

    /// Seconds of play per difficulty level
    pub const LEVEL_UP_INTERVAL: f32 = 15.0;

    /// Score awards
    pub const SCORE_MIKITO: u32 = 150;
    pub const SCORE_BOSS_HIT: u32 = 10;
}

/// Rotate a vector by an angle in degrees (matrix form; on the y-down
/// playfield a positive angle turns clockwise on screen)
#[inline]
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_deg(degrees: f32) -> f32 {
    degrees.rem_euclid(360.0)
}

/// Ship-forward unit vector for a rotation in degrees (0 points up)
#[inline]
pub fn forward_dir(rotation_deg: f32) -> Vec2 {
    rotate_deg(Vec2::NEG_Y, rotation_deg)
}
