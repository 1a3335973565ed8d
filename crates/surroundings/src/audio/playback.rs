//! Host-side sound playback
//!
//! Mixing and output belong to the host engine; acoustics only hand it
//! sound events to start.

use super::sound_event::SoundEvent;
use crate::foundation::math::DVec3;

/// Sink that starts sounds in the host engine
pub trait SoundPlayer {
    /// Start playing `event` with the given parameters
    fn play_sound(&mut self, event: &SoundEvent, request: &PlayRequest);
}

/// Parameters for a single playback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayRequest {
    /// Volume (0.0 to 1.0)
    pub volume: f32,
    /// Pitch multiplier (0.5 to 2.0)
    pub pitch: f32,
    /// World position, or `None` for non-positional playback
    pub position: Option<DVec3>,
}

impl PlayRequest {
    /// Lowest pitch the host engine accepts
    pub const MIN_PITCH: f32 = 0.5;
    /// Highest pitch the host engine accepts
    pub const MAX_PITCH: f32 = 2.0;

    /// Full volume, normal pitch, not positioned
    pub fn new() -> Self {
        Self {
            volume: 1.0,
            pitch: 1.0,
            position: None,
        }
    }

    /// Set volume, clamped to `[0, 1]`
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume.clamp(0.0, 1.0);
        self
    }

    /// Set pitch, clamped to `[0.5, 2.0]`
    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch.clamp(Self::MIN_PITCH, Self::MAX_PITCH);
        self
    }

    /// Position the sound in the world
    pub fn at(mut self, position: DVec3) -> Self {
        self.position = Some(position);
        self
    }
}

impl Default for PlayRequest {
    fn default() -> Self {
        Self::new()
    }
}
