//! Data-driven game balance
//!
//! Every number the engine is built from lives in [`Tuning`]. The
//! canonical values are derived from the screen size and the device class
//! with [`Tuning::for_screen`]; a JSON document can override any of them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::ms_to_ticks;

/// Device/input classification, decided outside the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputMode {
    /// Touch screens: faster start, bigger speed steps, gentler boost
    Touch,
    /// Mouse and keyboard
    #[default]
    Desktop,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Touch => "Touch",
            InputMode::Desktop => "Desktop",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "touch" | "mobile" => Some(InputMode::Touch),
            "desktop" | "mouse" | "keyboard" => Some(InputMode::Desktop),
            _ => None,
        }
    }

    /// Scroll speed at the start of a run
    pub fn initial_speed(&self) -> f32 {
        match self {
            InputMode::Touch => TOUCH_INITIAL_SPEED,
            InputMode::Desktop => DESKTOP_INITIAL_SPEED,
        }
    }

    /// Scroll speed added at every interval multiple
    pub fn speed_increment(&self) -> f32 {
        match self {
            InputMode::Touch => TOUCH_SPEED_INCREMENT,
            InputMode::Desktop => DESKTOP_SPEED_INCREMENT,
        }
    }

    /// Impulse the input layer should pass to `boost`
    pub fn boost_impulse(&self) -> f32 {
        match self {
            InputMode::Touch => TAP_BOOST_IMPULSE,
            InputMode::Desktop => DESKTOP_BOOST_IMPULSE,
        }
    }
}

/// Rejected construction parameter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("screen size must be positive and finite, got {width}x{height}")]
    ScreenSize { width: f32, height: f32 },
    #[error("initial scroll speed must be positive, got {0}")]
    InitialSpeed(f32),
    #[error("scroll speed increment must be non-negative, got {0}")]
    SpeedIncrement(f32),
    #[error("speed increase interval must be at least 1")]
    SpeedInterval,
    #[error("starting lives must be at least 1")]
    StartingLives,
    #[error("gravity must be non-negative and finite, got {0}")]
    Gravity(f32),
    #[error("max fall speed must be positive, got {0}")]
    MaxFallSpeed(f32),
    #[error("{name} gap must be positive, got {value}")]
    Gap { name: &'static str, value: f32 },
    #[error("obstacle width must be positive, got {0}")]
    ObstacleWidth(f32),
    #[error("obstacle spacing must be positive, got {0}")]
    ObstacleSpacing(f32),
    #[error("craft size must be positive, got {width}x{height}")]
    CraftSize { width: f32, height: f32 },
    #[error("craft start position must be finite, got ({x}, {y})")]
    CraftStart { x: f32, y: f32 },
    #[error("{0} duration must be at least one tick")]
    Duration(&'static str),
    #[error("{name} window ({ticks} ticks) outlasts invincibility ({invincible} ticks)")]
    WindowOrder {
        name: &'static str,
        ticks: u32,
        invincible: u32,
    },
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

/// Construction parameters for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,

    // === Scroll speed ===
    pub initial_speed: f32,
    pub speed_increment: f32,
    /// Score interval between speed increases
    pub speed_interval: u32,

    pub starting_lives: u32,

    // === Craft physics ===
    pub gravity: f32,
    pub max_fall_speed: f32,
    /// Fixed horizontal position of the craft's left edge
    pub craft_x: f32,
    /// Vertical position the craft starts (and respawns) at
    pub craft_start_y: f32,
    pub craft_width: f32,
    pub craft_height: f32,

    // === Obstacles ===
    pub easy_threshold: u32,
    pub gap: f32,
    pub easy_gap: f32,
    pub obstacle_width: f32,
    pub obstacle_spacing: f32,

    // === Post-hit windows (ticks) ===
    pub invincible_ticks: u32,
    pub knockback_ticks: u32,
    pub hit_flash_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::for_screen(800.0, 600.0, InputMode::Desktop)
    }
}

impl Tuning {
    /// Canonical tuning for a screen size and device class
    pub fn for_screen(width: f32, height: f32, mode: InputMode) -> Self {
        Self {
            screen_width: width,
            screen_height: height,

            initial_speed: mode.initial_speed(),
            speed_increment: mode.speed_increment(),
            speed_interval: SPEED_INCREASE_INTERVAL,

            starting_lives: INITIAL_LIVES,

            gravity: GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,
            craft_x: width / 4.0,
            craft_start_y: height / 2.0,
            craft_width: CRAFT_WIDTH,
            craft_height: CRAFT_HEIGHT,

            easy_threshold: EASY_MODE_SCORE_THRESHOLD,
            gap: MIN_GAP.max(height * GAP_SCREEN_FRACTION),
            easy_gap: MIN_EASY_GAP.max(height * EASY_GAP_SCREEN_FRACTION),
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_spacing: OBSTACLE_SPACING,

            invincible_ticks: ms_to_ticks(INVINCIBLE_MS, TICKS_PER_SECOND),
            knockback_ticks: ms_to_ticks(KNOCKBACK_MS, TICKS_PER_SECOND),
            hit_flash_ticks: ms_to_ticks(HIT_FLASH_MS, TICKS_PER_SECOND),
        }
    }

    /// Parse a JSON tuning document and validate it
    pub fn from_json(json: &str) -> Result<Self, crate::sim::SimError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every parameter, reporting the first one that is unusable
    pub fn validate(&self) -> Result<(), TuningError> {
        if !positive(self.screen_width) || !positive(self.screen_height) {
            return Err(TuningError::ScreenSize {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if !positive(self.initial_speed) {
            return Err(TuningError::InitialSpeed(self.initial_speed));
        }
        if !self.speed_increment.is_finite() || self.speed_increment < 0.0 {
            return Err(TuningError::SpeedIncrement(self.speed_increment));
        }
        if self.speed_interval == 0 {
            return Err(TuningError::SpeedInterval);
        }
        if self.starting_lives == 0 {
            return Err(TuningError::StartingLives);
        }
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(TuningError::Gravity(self.gravity));
        }
        if !positive(self.max_fall_speed) {
            return Err(TuningError::MaxFallSpeed(self.max_fall_speed));
        }
        if !positive(self.gap) {
            return Err(TuningError::Gap {
                name: "normal",
                value: self.gap,
            });
        }
        if !positive(self.easy_gap) {
            return Err(TuningError::Gap {
                name: "easy",
                value: self.easy_gap,
            });
        }
        if !positive(self.obstacle_width) {
            return Err(TuningError::ObstacleWidth(self.obstacle_width));
        }
        if !positive(self.obstacle_spacing) {
            return Err(TuningError::ObstacleSpacing(self.obstacle_spacing));
        }
        if !positive(self.craft_width) || !positive(self.craft_height) {
            return Err(TuningError::CraftSize {
                width: self.craft_width,
                height: self.craft_height,
            });
        }
        if !self.craft_x.is_finite() || !self.craft_start_y.is_finite() {
            return Err(TuningError::CraftStart {
                x: self.craft_x,
                y: self.craft_start_y,
            });
        }
        if self.invincible_ticks == 0 {
            return Err(TuningError::Duration("invincible"));
        }
        if self.knockback_ticks == 0 {
            return Err(TuningError::Duration("knockback"));
        }
        if self.hit_flash_ticks == 0 {
            return Err(TuningError::Duration("hit flash"));
        }
        // Knockback and hit flash both sit inside the invincible window
        let windows = [
            ("knockback", self.knockback_ticks),
            ("hit flash", self.hit_flash_ticks),
        ];
        for (name, ticks) in windows {
            if ticks > self.invincible_ticks {
                return Err(TuningError::WindowOrder {
                    name,
                    ticks,
                    invincible: self.invincible_ticks,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_screen_derived_values() {
        let t = Tuning::for_screen(800.0, 600.0, InputMode::Desktop);
        assert_eq!(t.craft_x, 200.0);
        assert_eq!(t.craft_start_y, 300.0);
        // 0.22 * 600 = 132 < 180
        assert_eq!(t.gap, 180.0);
        // 0.28 * 600 = 168 < 220
        assert_eq!(t.easy_gap, 220.0);
        assert_eq!(t.initial_speed, 2.0);
        assert_eq!(t.speed_increment, 0.5);
        assert_eq!(t.invincible_ticks, 180);
        assert_eq!(t.knockback_ticks, 12);
        assert_eq!(t.hit_flash_ticks, 18);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_tall_screen_gaps_scale() {
        let t = Tuning::for_screen(400.0, 1000.0, InputMode::Touch);
        assert!((t.gap - 220.0).abs() < 0.001);
        assert!((t.easy_gap - 280.0).abs() < 0.001);
        assert_eq!(t.initial_speed, 3.2);
        assert_eq!(t.speed_increment, 1.0);
    }

    #[test]
    fn test_boost_impulses() {
        assert_eq!(InputMode::Touch.boost_impulse(), -6.2);
        assert_eq!(InputMode::Desktop.boost_impulse(), -8.0);
        assert_eq!(InputMode::from_str("MOBILE"), Some(InputMode::Touch));
        assert_eq!(InputMode::from_str("joystick"), None);
        assert_eq!(InputMode::from_str(InputMode::Touch.as_str()), Some(InputMode::Touch));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut t = Tuning::default();
        t.screen_width = 0.0;
        assert!(matches!(t.validate(), Err(TuningError::ScreenSize { .. })));

        let mut t = Tuning::default();
        t.screen_height = f32::NAN;
        assert!(matches!(t.validate(), Err(TuningError::ScreenSize { .. })));

        let mut t = Tuning::default();
        t.initial_speed = 0.0;
        assert_eq!(t.validate(), Err(TuningError::InitialSpeed(0.0)));

        let mut t = Tuning::default();
        t.speed_increment = -0.5;
        assert_eq!(t.validate(), Err(TuningError::SpeedIncrement(-0.5)));

        let mut t = Tuning::default();
        t.starting_lives = 0;
        assert_eq!(t.validate(), Err(TuningError::StartingLives));

        let mut t = Tuning::default();
        t.speed_interval = 0;
        assert_eq!(t.validate(), Err(TuningError::SpeedInterval));

        let mut t = Tuning::default();
        t.knockback_ticks = 0;
        assert_eq!(t.validate(), Err(TuningError::Duration("knockback")));
    }

    #[test]
    fn test_windows_must_fit_inside_invincibility() {
        let mut t = Tuning::default();
        t.knockback_ticks = t.invincible_ticks + 1;
        assert_eq!(
            t.validate(),
            Err(TuningError::WindowOrder {
                name: "knockback",
                ticks: 181,
                invincible: 180,
            })
        );

        let mut t = Tuning::default();
        t.hit_flash_ticks = 200;
        assert!(matches!(
            t.validate(),
            Err(TuningError::WindowOrder { name: "hit flash", .. })
        ));

        // Equal lengths are fine
        let mut t = Tuning::default();
        t.knockback_ticks = t.invincible_ticks;
        t.hit_flash_ticks = t.invincible_ticks;
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_zero_increment_allowed() {
        let mut t = Tuning::default();
        t.speed_increment = 0.0;
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip_and_validation() {
        let t = Tuning::for_screen(1024.0, 768.0, InputMode::Touch);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), t);

        let mut bad = t.clone();
        bad.starting_lives = 0;
        let json = serde_json::to_string(&bad).unwrap();
        assert!(Tuning::from_json(&json).is_err());
        assert!(Tuning::from_json("{ not json").is_err());
    }
}
