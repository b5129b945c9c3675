//! Hit handling and the post-hit windows
//!
//! A hit costs a life. While lives remain the craft respawns at rest and
//! three independent countdowns start together: invincibility (collision
//! off), knockback (obstacles frozen) and hit flash (cosmetic). Each one
//! clears its own flag when it runs out. The last life ends the run.

use serde::{Deserialize, Serialize};

use super::physics;
use super::state::{GameEvent, GamePhase, GameState, HitCause};
use crate::tuning::Tuning;

/// Gameplay state of the damage machine, derived from the countdowns
///
/// Knockback always sits inside an invincibility window, so it takes
/// precedence when both are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageState {
    Normal,
    Invincible,
    KnockedBack,
    GameOver,
}

impl DamageState {
    pub fn of(state: &GameState) -> Self {
        if state.is_over() {
            DamageState::GameOver
        } else if state.is_knocked_back() {
            DamageState::KnockedBack
        } else if state.is_invincible() {
            DamageState::Invincible
        } else {
            DamageState::Normal
        }
    }

    /// Whether collision tests run this tick
    pub fn collides(&self) -> bool {
        *self == DamageState::Normal
    }
}

/// What a hit did to the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    Survived { lives_left: u32 },
    Fatal { final_score: u32 },
}

/// Count every post-hit window down by one tick
pub fn expire_timers(state: &mut GameState) {
    if state.invincible.step() {
        state.push_event(GameEvent::InvincibilityEnded);
        log::debug!("Invincibility ended at tick {}", state.tick);
    }
    if state.knockback.step() {
        state.push_event(GameEvent::KnockbackEnded);
    }
    if state.hit_flash.step() {
        state.push_event(GameEvent::HitFlashEnded);
    }
}

/// Cancel all pending windows
pub fn cancel_timers(state: &mut GameState) {
    state.invincible.cancel();
    state.knockback.cancel();
    state.hit_flash.cancel();
}

/// Take a hit
pub fn apply_hit(state: &mut GameState, tuning: &Tuning, cause: HitCause) -> HitOutcome {
    // A new hit supersedes anything still pending from the previous one
    cancel_timers(state);

    state.lives = state.lives.saturating_sub(1);
    state.push_event(GameEvent::Hit {
        cause,
        lives_left: state.lives,
    });

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::GameOver {
            final_score: state.score,
        });
        log::info!(
            "Game over at tick {} ({:?}), final score {}",
            state.tick,
            cause,
            state.score
        );
        return HitOutcome::Fatal {
            final_score: state.score,
        };
    }

    physics::reset(&mut state.craft, tuning.craft_start_y);
    state.invincible.start(tuning.invincible_ticks);
    state.knockback.start(tuning.knockback_ticks);
    state.hit_flash.start(tuning.hit_flash_ticks);
    log::info!(
        "Hit ({:?}) at tick {}, {} lives left",
        cause,
        state.tick,
        state.lives
    );
    HitOutcome::Survived {
        lives_left: state.lives,
    }
}
