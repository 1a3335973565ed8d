//! Audio: acoustics and their resolution
//!
//! Playback itself is the host engine's job. This module turns acoustic names
//! from game content into [`Acoustic`] values that know which sound events to
//! start.

pub mod acoustic;
pub mod library;
pub mod playback;
pub mod registry;
pub mod resource;
pub mod sound_event;

pub use acoustic::{Acoustic, SimpleAcoustic, SimultaneousAcoustic, NULL_ACOUSTIC_NAME};
pub use library::AcousticLibrary;
pub use playback::{PlayRequest, SoundPlayer};
pub use registry::{SoundRegistry, StaticSoundRegistry};
pub use resource::{ResourceLocation, ResourceLocationError};
pub use sound_event::SoundEvent;
