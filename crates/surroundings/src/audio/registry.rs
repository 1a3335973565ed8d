//! Sound registry collaborator
//!
//! The host engine owns the authoritative list of sound events. The acoustic
//! library only asks it one question: is there a sound at this location?

use std::collections::HashMap;

use super::resource::ResourceLocation;
use super::sound_event::SoundEvent;
use crate::config::{ConfigError, SoundsConfig};

/// Lookup of sound events by location
///
/// A missing sound is a normal outcome, not an error.
pub trait SoundRegistry: Send + Sync {
    /// Find the sound event registered at `location`
    fn get_sound(&self, location: &ResourceLocation) -> Option<SoundEvent>;
}

/// In-memory registry, populated up front
#[derive(Debug, Default, Clone)]
pub struct StaticSoundRegistry {
    sounds: HashMap<ResourceLocation, SoundEvent>,
}

impl StaticSoundRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from the configured sound names
    pub fn from_config(config: &SoundsConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        for name in &config.events {
            let location = name.parse::<ResourceLocation>().map_err(|source| ConfigError::InvalidSound {
                name: name.clone(),
                source,
            })?;
            registry.register(location);
        }
        log::debug!("Registered {} sound event(s) from configuration", registry.len());
        Ok(registry)
    }

    /// Register a sound at `location`, returning its event
    ///
    /// Registering the same location twice keeps the first event.
    pub fn register(&mut self, location: ResourceLocation) -> SoundEvent {
        self.sounds
            .entry(location)
            .or_insert_with_key(|location| SoundEvent::new(location.clone()))
            .clone()
    }

    /// Number of registered sounds
    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }
}

impl SoundRegistry for StaticSoundRegistry {
    fn get_sound(&self, location: &ResourceLocation) -> Option<SoundEvent> {
        self.sounds.get(location).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(s: &str) -> ResourceLocation {
        s.parse().unwrap()
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = StaticSoundRegistry::new();
        assert!(registry.is_empty());

        let event = registry.register(loc("ambient.cave"));
        assert_eq!(event.name(), "minecraft:ambient.cave");
        assert_eq!(registry.get_sound(&loc("minecraft:ambient.cave")), Some(event));
        assert!(registry.get_sound(&loc("ambient.wind")).is_none());
    }

    #[test]
    fn test_register_twice_keeps_one() {
        let mut registry = StaticSoundRegistry::new();
        registry.register(loc("ambient.cave"));
        registry.register(loc("minecraft:ambient.cave"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_from_config() {
        let config = SoundsConfig {
            events: vec!["ambient.cave".to_string(), "surroundings:crickets".to_string()],
        };
        let registry = StaticSoundRegistry::from_config(&config).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.get_sound(&loc("surroundings:crickets")).is_some());
    }

    #[test]
    fn test_from_config_rejects_bad_name() {
        let config = SoundsConfig {
            events: vec!["ambient.cave".to_string(), "Bad Name".to_string()],
        };
        let result = StaticSoundRegistry::from_config(&config);
        assert!(matches!(result, Err(ConfigError::InvalidSound { ref name, .. }) if name == "Bad Name"));
    }
}
