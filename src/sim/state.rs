//! Game state and core simulation types
//!
//! The engine owns one [`GameState`]; observers only ever see a
//! [`RenderState`] copied out of it.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives exhausted; the run is finished
    GameOver,
}

/// The player-controlled craft
///
/// Only the vertical axis moves; the horizontal position and size come
/// from [`Tuning`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Craft {
    /// Top edge (pixels, y grows downward)
    pub y: f32,
    /// Pixels per tick, negative is upward
    pub velocity: f32,
}

impl Craft {
    pub fn new(y: f32) -> Self {
        Self { y, velocity: 0.0 }
    }
}

/// A barrier pair with a passable gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Bottom of the upper bar
    pub gap_top: f32,
    pub gap_height: f32,
    /// Set once the craft has passed it
    pub scored: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_top: f32, gap_height: f32) -> Self {
        Self {
            x,
            gap_top,
            gap_height,
            scored: false,
        }
    }

    /// Top of the lower bar
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + self.gap_height
    }

    #[inline]
    pub fn right_edge(&self, width: f32) -> f32 {
        self.x + width
    }
}

/// Tick countdown backing one post-hit flag
///
/// The flag is set while `remaining > 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    /// (Re)start the countdown, superseding any pending one
    pub fn start(&mut self, ticks: u32) {
        self.remaining = ticks;
    }

    pub fn cancel(&mut self) {
        self.remaining = 0;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Count down one tick. Returns true on the tick the flag clears.
    pub fn step(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }
}

/// What the craft ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitCause {
    /// Left the screen through the top or bottom
    Bounds,
    Obstacle,
}

/// Things that happened since the previous frame, for audio/presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Boosted { impulse: f32 },
    ObstacleSpawned { gap_top: f32, gap_height: f32 },
    Scored { score: u32 },
    SpeedIncreased { speed: f32 },
    Hit { cause: HitCause, lives_left: u32 },
    InvincibilityEnded,
    KnockbackEnded,
    HitFlashEnded,
    GameOver { final_score: u32 },
}

/// Complete mutable state of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Simulation tick counter
    pub tick: u64,
    pub phase: GamePhase,
    pub craft: Craft,
    /// Leftmost first, in spawn order
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub lives: u32,
    pub scroll_speed: f32,
    /// Score at which scroll speed last stepped up
    pub last_speed_increase_score: u32,
    /// Collision detection suspended
    pub invincible: Countdown,
    /// Obstacles frozen
    pub knockback: Countdown,
    /// Screen flash (cosmetic)
    pub hit_flash: Countdown,
    /// Events not yet reported to the caller
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh run state for the given tuning
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            tick: 0,
            phase: GamePhase::Playing,
            craft: Craft::new(tuning.craft_start_y),
            obstacles: Vec::new(),
            score: 0,
            lives: tuning.starting_lives,
            scroll_speed: tuning.initial_speed,
            last_speed_increase_score: 0,
            invincible: Countdown::default(),
            knockback: Countdown::default(),
            hit_flash: Countdown::default(),
            events: Vec::new(),
        }
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible.is_active()
    }

    pub fn is_knocked_back(&self) -> bool {
        self.knockback.is_active()
    }

    pub fn is_hit_flash(&self) -> bool {
        self.hit_flash.is_active()
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Below the easy threshold gaps are more forgiving
    pub fn is_easy_mode(&self, tuning: &Tuning) -> bool {
        self.score < tuning.easy_threshold
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Copy out everything a presentation layer needs
    pub fn snapshot(&self, tuning: &Tuning, events: Vec<GameEvent>) -> RenderState {
        RenderState {
            tick: self.tick,
            craft: self.craft,
            craft_x: tuning.craft_x,
            craft_width: tuning.craft_width,
            craft_height: tuning.craft_height,
            obstacles: self.obstacles.clone(),
            obstacle_width: tuning.obstacle_width,
            score: self.score,
            lives: self.lives,
            scroll_speed: self.scroll_speed,
            easy_mode: self.is_easy_mode(tuning),
            invincible: self.is_invincible(),
            knocked_back: self.is_knocked_back(),
            hit_flash: self.is_hit_flash(),
            events,
        }
    }
}

/// Immutable per-frame snapshot handed to rendering and audio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub tick: u64,
    pub craft: Craft,
    pub craft_x: f32,
    pub craft_width: f32,
    pub craft_height: f32,
    pub obstacles: Vec<Obstacle>,
    pub obstacle_width: f32,
    pub score: u32,
    pub lives: u32,
    pub scroll_speed: f32,
    pub easy_mode: bool,
    pub invincible: bool,
    pub knocked_back: bool,
    pub hit_flash: bool,
    /// Events since the previous frame, in the order they happened
    pub events: Vec<GameEvent>,
}

impl RenderState {
    /// Craft tilt for the current velocity
    pub fn tilt_degrees(&self) -> f32 {
        crate::tilt_degrees(self.craft.velocity)
    }

    pub fn scored_this_frame(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::Scored { .. }))
    }

    pub fn hit_this_frame(&self) -> bool {
        self.events.iter().any(|e| matches!(e, GameEvent::Hit { .. }))
    }
}

/// Result of one `advance`
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Running(RenderState),
    /// Terminal signal; the engine accepts no further ticks
    GameOver {
        final_score: u32,
        /// Events of the final tick, ending with `GameEvent::GameOver`
        events: Vec<GameEvent>,
    },
}

impl Frame {
    pub fn is_game_over(&self) -> bool {
        matches!(self, Frame::GameOver { .. })
    }

    pub fn events(&self) -> &[GameEvent] {
        match self {
            Frame::Running(render) => &render.events,
            Frame::GameOver { events, .. } => events,
        }
    }
}
