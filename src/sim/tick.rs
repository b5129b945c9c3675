//! Per-tick simulation step and the engine that owns a run
//!
//! One tick runs, in order: expire post-hit windows, integrate the craft,
//! scroll/despawn/spawn obstacles (unless knocked back), score, then test
//! collisions (unless invincible or knocked back) and apply any hit.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision;
use super::damage::{self, DamageState, HitOutcome};
use super::error::SimError;
use super::physics;
use super::scoring;
use super::spawn::{self, GapRandom};
use super::state::{Frame, GameEvent, GameState, RenderState};
use crate::tuning::Tuning;

/// Advance the game state by one tick
///
/// Returns the outcome of a hit if one happened. Does nothing once the
/// run is over.
pub fn tick(
    state: &mut GameState,
    tuning: &Tuning,
    rng: &mut impl GapRandom,
) -> Option<HitOutcome> {
    if state.is_over() {
        return None;
    }
    state.tick += 1;

    damage::expire_timers(state);

    physics::integrate(&mut state.craft, tuning.gravity, tuning.max_fall_speed);

    // Knockback gives a breather: obstacles hold still
    if !state.is_knocked_back() {
        spawn::scroll(state, tuning);
        spawn::maybe_spawn(state, tuning, rng);
    }

    scoring::score_passed(state, tuning);

    if !DamageState::of(state).collides() {
        return None;
    }
    collision::detect(&state.craft, &state.obstacles, tuning)
        .map(|cause| damage::apply_hit(state, tuning, cause))
}

/// The simulation engine: canonical state for one run plus its tuning and
/// gap randomness
#[derive(Debug, Clone)]
pub struct Engine<R = Pcg32> {
    tuning: Tuning,
    state: GameState,
    rng: R,
}

impl Engine<Pcg32> {
    /// Engine with a seeded PCG source
    pub fn with_seed(tuning: Tuning, seed: u64) -> Result<Self, SimError> {
        Self::new(tuning, Pcg32::seed_from_u64(seed))
    }
}

impl<R: GapRandom> Engine<R> {
    /// Validate the tuning and start a fresh run
    pub fn new(tuning: Tuning, rng: R) -> Result<Self, SimError> {
        tuning.validate()?;
        let state = GameState::new(&tuning);
        log::info!(
            "Engine ready: {}x{}, speed {} (+{} every {}), {} lives",
            tuning.screen_width,
            tuning.screen_height,
            tuning.initial_speed,
            tuning.speed_increment,
            tuning.speed_interval,
            tuning.starting_lives
        );
        Ok(Self { tuning, state, rng })
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Final score once the run has ended
    pub fn final_score(&self) -> Option<u32> {
        self.is_over().then_some(self.state.score)
    }

    fn ensure_running(&self, op: &str) -> Result<(), SimError> {
        if self.state.is_over() {
            log::warn!("{} called after game over", op);
            return Err(SimError::GameOver {
                final_score: self.state.score,
            });
        }
        Ok(())
    }

    /// Run one tick and report the resulting frame
    pub fn advance(&mut self) -> Result<Frame, SimError> {
        self.ensure_running("advance")?;

        let outcome = tick(&mut self.state, &self.tuning, &mut self.rng);
        let events = self.state.take_events();

        match outcome {
            Some(HitOutcome::Fatal { final_score }) => Ok(Frame::GameOver {
                final_score,
                events,
            }),
            _ => Ok(Frame::Running(self.state.snapshot(&self.tuning, events))),
        }
    }

    /// Overwrite the craft's vertical velocity with `impulse`
    ///
    /// Takes effect on the next tick; calling again before then simply
    /// replaces the impulse.
    pub fn boost(&mut self, impulse: f32) -> Result<(), SimError> {
        self.ensure_running("boost")?;
        physics::boost(&mut self.state.craft, impulse);
        self.state.push_event(GameEvent::Boosted { impulse });
        Ok(())
    }

    /// Current state without advancing (pending events stay queued)
    pub fn snapshot(&self) -> RenderState {
        self.state.snapshot(&self.tuning, Vec::new())
    }
}
