//! Neon Flap - a side-scrolling flap-through-the-gap arcade game
//!
//! Core modules:
//! - `sim`: Simulation engine (physics, obstacles, scoring, damage)
//! - `tuning`: Construction parameters and device presets
//! - `settings`: Player audio preferences
//! - `audio`: Sound cue mapping for the audio layer

pub mod audio;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::{InputMode, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Nominal frame rate the timer durations are expressed against
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Craft dimensions
    pub const CRAFT_WIDTH: f32 = 60.0;
    pub const CRAFT_HEIGHT: f32 = 45.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.3;
    /// Terminal fall speed (pixels/tick)
    pub const MAX_FALL_SPEED: f32 = 10.0;
    /// Gentle impulse for touch taps
    pub const TAP_BOOST_IMPULSE: f32 = -6.2;
    /// Stronger impulse for mouse clicks and key presses
    pub const DESKTOP_BOOST_IMPULSE: f32 = -8.0;

    /// Obstacle geometry
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    pub const OBSTACLE_SPACING: f32 = 400.0;
    pub const MIN_GAP: f32 = 180.0;
    pub const GAP_SCREEN_FRACTION: f32 = 0.22;
    pub const MIN_EASY_GAP: f32 = 220.0;
    pub const EASY_GAP_SCREEN_FRACTION: f32 = 0.28;
    /// Vertical margin kept clear above and below normal gaps
    pub const NORMAL_GAP_MARGIN: f32 = 100.0;

    /// Scroll speed per device class
    pub const TOUCH_INITIAL_SPEED: f32 = 3.2;
    pub const DESKTOP_INITIAL_SPEED: f32 = 2.0;
    pub const TOUCH_SPEED_INCREMENT: f32 = 1.0;
    pub const DESKTOP_SPEED_INCREMENT: f32 = 0.5;
    /// Speed steps up every this many points
    pub const SPEED_INCREASE_INTERVAL: u32 = 7;

    pub const INITIAL_LIVES: u32 = 3;
    /// Below this score gaps are taller and kept near mid-screen
    pub const EASY_MODE_SCORE_THRESHOLD: u32 = 10;

    /// Post-hit windows in milliseconds
    pub const INVINCIBLE_MS: u32 = 3000;
    pub const KNOCKBACK_MS: u32 = 200;
    pub const HIT_FLASH_MS: u32 = 300;

    /// Craft tilt range (degrees) and degrees per unit of velocity
    pub const TILT_MIN_DEGREES: f32 = -25.0;
    pub const TILT_MAX_DEGREES: f32 = 90.0;
    pub const TILT_PER_VELOCITY: f32 = 3.0;
}

/// Convert a millisecond duration to a whole number of ticks (rounded up)
#[inline]
pub fn ms_to_ticks(ms: u32, ticks_per_second: u32) -> u32 {
    (ms as u64 * ticks_per_second as u64).div_ceil(1000) as u32
}

/// Visual tilt of the craft for a given vertical velocity
#[inline]
pub fn tilt_degrees(velocity: f32) -> f32 {
    use consts::*;
    (velocity * TILT_PER_VELOCITY).clamp(TILT_MIN_DEGREES, TILT_MAX_DEGREES)
}
