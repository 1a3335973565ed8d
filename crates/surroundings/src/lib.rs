//! # Surroundings
//!
//! Ambient sound and particle augmentation for voxel-world game clients,
//! driven by the host engine's day/night cycle and lighting.
//!
//! ## Features
//!
//! - **Acoustic Library**: Compiles acoustic names, including comma separated
//!   composites, into shared playable acoustics
//! - **Day Cycle**: Classifies the sky into day, night, dawn and dusk
//! - **Motes**: World-lit particle base for ambient effects
//! - **Configuration**: Sounds and acoustic definitions from TOML or RON
//!
//! The host engine is reached only through traits: [`audio::SoundRegistry`],
//! [`audio::SoundPlayer`], [`world::WorldView`], [`world::LightReader`] and
//! [`particles::VertexConsumer`].
//!
//! ## Quick Start
//!
//! ```rust
//! use surroundings::prelude::*;
//!
//! let mut registry = StaticSoundRegistry::new();
//! registry.register("ambient.cave".parse().unwrap());
//! registry.register("surroundings:crickets".parse().unwrap());
//!
//! let library = AcousticLibrary::new(registry);
//! let night = library.resolve("surroundings:crickets,ambient.cave");
//! assert_eq!(night.children().len(), 2);
//! assert!(std::sync::Arc::ptr_eq(&night, &library.resolve("SURROUNDINGS:CRICKETS,AMBIENT.CAVE")));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod foundation;
pub mod config;
pub mod audio;
pub mod world;
pub mod particles;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        audio::{
            Acoustic, AcousticLibrary, PlayRequest, ResourceLocation, SoundEvent, SoundPlayer,
            SoundRegistry, StaticSoundRegistry,
        },
        config::{Config, ConfigError, SurroundingsConfig},
        foundation::localization::Localizer,
        particles::{Camera, MoteState, ParticleMote, VertexConsumer},
        world::{BlockPos, DayCycle, LightReader, LightType, WorldView},
    };
}
