//! Engine sound events

use super::resource::ResourceLocation;

/// Handle to a sound registered with the host engine
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SoundEvent {
    location: ResourceLocation,
}

impl SoundEvent {
    /// Create a sound event for a location
    pub fn new(location: ResourceLocation) -> Self {
        Self { location }
    }

    /// Location the sound is registered under
    pub fn location(&self) -> &ResourceLocation {
        &self.location
    }

    /// Canonical `namespace:path` name
    pub fn name(&self) -> String {
        self.location.to_string()
    }
}
