//! Scoring and difficulty progression

use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// Mark the first unscored obstacle whose right edge is left of the craft
/// as passed and award a point. At most one obstacle scores per tick.
///
/// Returns true if a point was awarded.
pub fn score_passed(state: &mut GameState, tuning: &Tuning) -> bool {
    let passed = state
        .obstacles
        .iter_mut()
        .find(|o| !o.scored && o.right_edge(tuning.obstacle_width) < tuning.craft_x);

    let Some(obstacle) = passed else {
        return false;
    };
    obstacle.scored = true;
    state.score += 1;
    state.push_event(GameEvent::Scored { score: state.score });

    if state.score == tuning.easy_threshold {
        log::info!("Easy mode over at score {}", state.score);
    }
    step_speed(state, tuning);
    true
}

/// Raise scroll speed when the score lands on a new interval multiple
///
/// `score > last_speed_increase_score` keeps a score that stays on a
/// multiple from stepping twice.
pub fn step_speed(state: &mut GameState, tuning: &Tuning) -> bool {
    let score = state.score;
    if score > 0
        && score % tuning.speed_interval == 0
        && score > state.last_speed_increase_score
    {
        state.scroll_speed += tuning.speed_increment;
        state.last_speed_increase_score = score;
        state.push_event(GameEvent::SpeedIncreased {
            speed: state.scroll_speed,
        });
        log::info!("Speed up at score {}: {:.2}", score, state.scroll_speed);
        return true;
    }
    false
}
