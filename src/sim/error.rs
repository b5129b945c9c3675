use thiserror::Error;

use crate::tuning::TuningError;

/// Misuse of the engine. None of these are recoverable game conditions.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid tuning: {0}")]
    Tuning(#[from] TuningError),
    #[error("failed to parse tuning: {0}")]
    Json(#[from] serde_json::Error),
    #[error("run is over (final score {final_score}); construct a new engine")]
    GameOver { final_score: u32 },
}
