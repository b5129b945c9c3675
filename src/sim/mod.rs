//! Simulation module
//!
//! All gameplay logic lives here. One engine owns one run:
//! - Tick-counted post-hit windows, no wall-clock timers
//! - Injected, seedable gap randomness
//! - Stable obstacle order (spawn order, leftmost first)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod damage;
pub mod error;
pub mod physics;
pub mod scoring;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{Aabb, detect};
pub use damage::{DamageState, HitOutcome};
pub use error::SimError;
pub use spawn::{GapRandom, ScriptedRandom, gap_for_score};
pub use state::{
    Countdown, Craft, Frame, GameEvent, GamePhase, GameState, HitCause, Obstacle, RenderState,
};
pub use tick::{Engine, tick};
