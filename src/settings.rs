//! Player preferences
//!
//! Only what the core's collaborators read: whether cues play and how
//! loud the music runs. Storing them between sessions is the host's job.

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Play sound effects
    pub sound_enabled: bool,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            music_volume: 0.5,
        }
    }
}

impl Settings {
    /// Set music volume, clamped to 0.0 - 1.0
    pub fn set_music_volume(&mut self, volume: f32) {
        self.music_volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }
}
