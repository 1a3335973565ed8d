//! Acoustics: named, playable sound configurations
//!
//! An acoustic is either a single sound event, a group of acoustics started
//! together, or the shared no-op acoustic. Compiled acoustics are handed out
//! as `Arc<Acoustic>` so the library can return the same instance every time.

use std::sync::{Arc, OnceLock};

use super::playback::{PlayRequest, SoundPlayer};
use super::sound_event::SoundEvent;

/// Name reported by the null acoustic
pub const NULL_ACOUSTIC_NAME: &str = "<NULL>";

/// A playable acoustic
#[derive(Debug)]
pub enum Acoustic {
    /// One sound event
    Simple(SimpleAcoustic),
    /// Several acoustics triggered together
    Simultaneous(SimultaneousAcoustic),
    /// Plays nothing
    Null,
}

impl Acoustic {
    /// The shared null acoustic
    ///
    /// Every call returns the same instance.
    pub fn null() -> Arc<Acoustic> {
        static NULL: OnceLock<Arc<Acoustic>> = OnceLock::new();
        Arc::clone(NULL.get_or_init(|| Arc::new(Acoustic::Null)))
    }

    /// Wrap a sound event
    pub fn simple(event: SoundEvent) -> Self {
        Acoustic::Simple(SimpleAcoustic::new(event))
    }

    /// Group acoustics under one name
    pub fn simultaneous(name: impl Into<String>, children: Vec<Arc<Acoustic>>) -> Self {
        Acoustic::Simultaneous(SimultaneousAcoustic::new(name, children))
    }

    /// Name this acoustic was compiled under
    pub fn name(&self) -> &str {
        match self {
            Acoustic::Simple(simple) => simple.name(),
            Acoustic::Simultaneous(group) => group.name(),
            Acoustic::Null => NULL_ACOUSTIC_NAME,
        }
    }

    /// Check if this is the no-op acoustic
    pub fn is_null(&self) -> bool {
        matches!(self, Acoustic::Null)
    }

    /// Child acoustics of a simultaneous acoustic, empty otherwise
    pub fn children(&self) -> &[Arc<Acoustic>] {
        match self {
            Acoustic::Simultaneous(group) => group.children(),
            Acoustic::Simple(_) | Acoustic::Null => &[],
        }
    }

    /// Start the acoustic through the host player
    pub fn play(&self, player: &mut dyn SoundPlayer, request: &PlayRequest) {
        match self {
            Acoustic::Simple(simple) => player.play_sound(simple.event(), request),
            Acoustic::Simultaneous(group) => {
                for child in group.children() {
                    child.play(player, request);
                }
            }
            Acoustic::Null => {}
        }
    }
}

/// Acoustic backed by a single sound event
#[derive(Debug, Clone)]
pub struct SimpleAcoustic {
    name: String,
    event: SoundEvent,
}

impl SimpleAcoustic {
    /// Create an acoustic named after the event
    pub fn new(event: SoundEvent) -> Self {
        Self {
            name: event.name(),
            event,
        }
    }

    /// Canonical name of the sound event
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped sound event
    pub fn event(&self) -> &SoundEvent {
        &self.event
    }
}

/// Ordered group of acoustics played at the same time
#[derive(Debug)]
pub struct SimultaneousAcoustic {
    name: String,
    children: Vec<Arc<Acoustic>>,
}

impl SimultaneousAcoustic {
    /// Create a group from its children, in playback order
    pub fn new(name: impl Into<String>, children: Vec<Arc<Acoustic>>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Name of the group
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in playback order
    pub fn children(&self) -> &[Arc<Acoustic>] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingPlayer {
        played: Vec<String>,
    }

    impl SoundPlayer for RecordingPlayer {
        fn play_sound(&mut self, event: &SoundEvent, _request: &PlayRequest) {
            self.played.push(event.name());
        }
    }

    fn event(name: &str) -> SoundEvent {
        SoundEvent::new(name.parse().unwrap())
    }

    #[test]
    fn test_null_is_shared() {
        let a = Acoustic::null();
        let b = Acoustic::null();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(a.is_null());
        assert_eq!(a.name(), NULL_ACOUSTIC_NAME);
        assert!(a.children().is_empty());
    }

    #[test]
    fn test_simple_named_after_event() {
        let acoustic = Acoustic::simple(event("ambient.cave"));
        assert_eq!(acoustic.name(), "minecraft:ambient.cave");
        assert!(!acoustic.is_null());
    }

    #[test]
    fn test_play_simple() {
        let mut player = RecordingPlayer::default();
        Acoustic::simple(event("ambient.cave")).play(&mut player, &PlayRequest::new());
        assert_eq!(player.played, vec!["minecraft:ambient.cave"]);
    }

    #[test]
    fn test_play_simultaneous_in_order() {
        let group = Acoustic::simultaneous(
            "wind,crickets",
            vec![
                Arc::new(Acoustic::simple(event("wind"))),
                Acoustic::null(),
                Arc::new(Acoustic::simple(event("surroundings:crickets"))),
            ],
        );

        let mut player = RecordingPlayer::default();
        group.play(&mut player, &PlayRequest::new());

        assert_eq!(group.name(), "wind,crickets");
        assert_eq!(group.children().len(), 3);
        assert_eq!(player.played, vec!["minecraft:wind", "surroundings:crickets"]);
    }

    #[test]
    fn test_play_null_is_silent() {
        let mut player = RecordingPlayer::default();
        Acoustic::null().play(&mut player, &PlayRequest::new());
        assert!(player.played.is_empty());
    }
}
