//! Sound cues
//!
//! The engine only reports events; this maps them to cues for whatever
//! audio backend the host provides. Synthesis lives in the backend.
//! Background music runs for the length of one run: it starts with the
//! run and stops on the game-over frame.

use crate::settings::Settings;
use crate::sim::{Frame, GameEvent};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Craft boosted
    Boost,
    /// Obstacle passed
    Score,
    /// Craft took a hit
    Hit,
    /// Run ended
    GameOver,
}

impl SoundEffect {
    /// Cue for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Boosted { .. } => Some(SoundEffect::Boost),
            GameEvent::Scored { .. } => Some(SoundEffect::Score),
            GameEvent::Hit { .. } => Some(SoundEffect::Hit),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            GameEvent::ObstacleSpawned { .. }
            | GameEvent::SpeedIncreased { .. }
            | GameEvent::InvincibilityEnded
            | GameEvent::KnockbackEnded
            | GameEvent::HitFlashEnded => None,
        }
    }
}

/// Audio backend
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);

    /// Begin the background music at `volume` (0.0 - 1.0)
    fn start_music(&mut self, _volume: f32) {}

    fn set_music_volume(&mut self, _volume: f32) {}

    fn stop_music(&mut self) {}
}

/// Start the music for a new run at the player's volume
///
/// Music ignores `sound_enabled`; only the cues are muted by it.
pub fn start_run(settings: &Settings, sink: &mut impl AudioSink) {
    sink.start_music(settings.music_volume);
}

/// Change the music volume mid-run
pub fn change_music_volume(settings: &mut Settings, volume: f32, sink: &mut impl AudioSink) {
    settings.set_music_volume(volume);
    sink.set_music_volume(settings.music_volume);
}

/// Play a frame's cues, then stop the music if the run just ended
///
/// Returns the number of cues played.
pub fn play_frame(frame: &Frame, settings: &Settings, sink: &mut impl AudioSink) -> usize {
    let played = dispatch(frame.events(), settings, sink);
    if frame.is_game_over() {
        sink.stop_music();
    }
    played
}

/// Play the cues for a frame's events in order
///
/// Returns the number of cues played.
pub fn dispatch(events: &[GameEvent], settings: &Settings, sink: &mut impl AudioSink) -> usize {
    if !settings.sound_enabled {
        return 0;
    }
    let mut played = 0;
    for effect in events.iter().filter_map(SoundEffect::for_event) {
        sink.play(effect);
        played += 1;
    }
    played
}

/// Sink that writes cues to the log
#[derive(Debug, Default)]
pub struct LogSink {
    pub played: usize,
}

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect) {
        self.played += 1;
        log::debug!("cue: {:?}", effect);
    }

    fn start_music(&mut self, volume: f32) {
        log::info!("Music started at volume {:.2}", volume);
    }

    fn set_music_volume(&mut self, volume: f32) {
        log::info!("Music volume {:.2}", volume);
    }

    fn stop_music(&mut self) {
        log::info!("Music stopped");
    }
}
