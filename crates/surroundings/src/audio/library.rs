//! Acoustic library: compiles acoustic names into playable acoustics
//!
//! A name is either a single acoustic or a comma separated list of fragments.
//! Each fragment resolves to a previously compiled acoustic or to a sound
//! event known to the [`SoundRegistry`]. Every compiled result, including
//! failures (the null acoustic), is memoized under its case-insensitive name
//! and never recomputed.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockUpgradableReadGuard};

use super::acoustic::Acoustic;
use super::registry::{SoundRegistry, StaticSoundRegistry};
use super::resource::ResourceLocation;
use crate::config::{AcousticsConfig, ConfigError, SurroundingsConfig};

/// Separator between fragments of a composite acoustic name
pub const FRAGMENT_SEPARATOR: char = ',';

type CompiledMap = HashMap<String, Arc<Acoustic>>;

/// Thread-safe, memoizing acoustic resolver
pub struct AcousticLibrary {
    /// Compiled acoustics keyed by lower-cased name
    compiled: RwLock<CompiledMap>,
    registry: Box<dyn SoundRegistry>,
}

impl AcousticLibrary {
    /// Create an empty library backed by `registry`
    pub fn new(registry: impl SoundRegistry + 'static) -> Self {
        Self {
            compiled: RwLock::new(HashMap::new()),
            registry: Box::new(registry),
        }
    }

    /// Build a library from configuration
    ///
    /// Registers the configured sounds in a [`StaticSoundRegistry`] and then
    /// compiles the configured acoustic definitions.
    pub fn from_config(config: &SurroundingsConfig) -> Result<Self, ConfigError> {
        let registry = StaticSoundRegistry::from_config(&config.sounds)?;
        let library = Self::new(registry);
        library.seed(&config.acoustics);
        Ok(library)
    }

    /// Add or replace the acoustic registered under `name`
    pub fn add_acoustic(&self, name: &str, acoustic: Arc<Acoustic>) {
        self.compiled.write().insert(cache_key(name), acoustic);
    }

    /// Resolve an acoustic name
    ///
    /// Never fails: unknown fragments are dropped with a warning, and a name
    /// with no resolvable fragment yields [`Acoustic::null`]. Repeated calls
    /// with the same name (in any letter case) return the same instance.
    pub fn resolve(&self, name: &str) -> Arc<Acoustic> {
        let key = cache_key(name);
        if let Some(acoustic) = self.compiled.read().get(&key) {
            return Arc::clone(acoustic);
        }

        // Upgradable read keeps other resolvers out until the result is cached
        let compiled = self.compiled.upgradable_read();
        if let Some(acoustic) = compiled.get(&key) {
            return Arc::clone(acoustic);
        }

        let mut pending = CompiledMap::new();
        let result = self.compile(&compiled, &mut pending, name, split_fragments(name));

        let mut compiled = RwLockUpgradableReadGuard::upgrade(compiled);
        compiled.extend(pending);
        compiled.insert(key, Arc::clone(&result));
        result
    }

    /// Compile `fragments` into an acoustic registered as `name`
    ///
    /// Replaces any existing entry for `name`. A composite built here carries
    /// `name` rather than the joined fragments.
    pub fn define<S: AsRef<str>>(&self, name: &str, fragments: &[S]) -> Arc<Acoustic> {
        let compiled = self.compiled.upgradable_read();

        let mut pending = CompiledMap::new();
        let result = self.compile(
            &compiled,
            &mut pending,
            name,
            fragments.iter().map(AsRef::as_ref),
        );

        let mut compiled = RwLockUpgradableReadGuard::upgrade(compiled);
        compiled.extend(pending);
        compiled.insert(cache_key(name), Arc::clone(&result));
        result
    }

    /// Pre-compile every configured acoustic definition
    pub fn seed(&self, config: &AcousticsConfig) {
        for (name, fragments) in &config.definitions {
            let acoustic = self.define(name, fragments.as_slice());
            if acoustic.is_null() {
                log::warn!("Acoustic definition '{}' has no playable fragments", name);
            }
        }
        log::info!("Seeded {} acoustic definition(s)", config.definitions.len());
    }

    /// Look up a compiled acoustic without compiling anything
    pub fn get(&self, name: &str) -> Option<Arc<Acoustic>> {
        self.compiled.read().get(&cache_key(name)).cloned()
    }

    /// Check if `name` has been compiled or registered
    pub fn contains(&self, name: &str) -> bool {
        self.compiled.read().contains_key(&cache_key(name))
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.compiled.read().len()
    }

    /// Check if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.compiled.read().is_empty()
    }

    fn compile<'a>(
        &self,
        compiled: &CompiledMap,
        pending: &mut CompiledMap,
        name: &str,
        fragments: impl Iterator<Item = &'a str>,
    ) -> Arc<Acoustic> {
        let mut parsed = Vec::new();
        for fragment in fragments {
            match self.generate(compiled, pending, fragment) {
                Some(acoustic) => parsed.push(acoustic),
                None => log::warn!("Acoustic '{}' not found!", fragment),
            }
        }

        let result = match parsed.len() {
            0 => Acoustic::null(),
            1 => parsed.swap_remove(0),
            _ => Arc::new(Acoustic::simultaneous(name, parsed)),
        };
        log::debug!("Compiled acoustic '{}' as '{}'", name, result.name());
        result
    }

    /// Resolve a single fragment, staging newly built acoustics in `pending`
    fn generate(
        &self,
        compiled: &CompiledMap,
        pending: &mut CompiledMap,
        fragment: &str,
    ) -> Option<Arc<Acoustic>> {
        let key = cache_key(fragment);
        if let Some(acoustic) = lookup(compiled, pending, &key) {
            return Some(acoustic);
        }

        let location = match key.parse::<ResourceLocation>() {
            Ok(location) => location,
            Err(err) => {
                log::debug!("Fragment '{}' is not a sound location: {}", fragment, err);
                return None;
            }
        };
        let event = self.registry.get_sound(&location)?;

        let canonical = cache_key(&event.name());
        if let Some(acoustic) = lookup(compiled, pending, &canonical) {
            return Some(acoustic);
        }

        let acoustic = Arc::new(Acoustic::simple(event));
        pending.insert(canonical, Arc::clone(&acoustic));
        Some(acoustic)
    }
}

fn lookup(compiled: &CompiledMap, pending: &CompiledMap, key: &str) -> Option<Arc<Acoustic>> {
    compiled.get(key).or_else(|| pending.get(key)).cloned()
}

fn cache_key(name: &str) -> String {
    name.to_lowercase()
}

/// Split a composite name into fragments
///
/// Trailing empty fragments are dropped, so `"a,b,"` has two fragments and
/// `",,"` has none. `""` itself is a single empty fragment.
fn split_fragments(name: &str) -> impl Iterator<Item = &str> {
    let trimmed = name.trim_end_matches(FRAGMENT_SEPARATOR);
    let mut fragments = trimmed.split(FRAGMENT_SEPARATOR);
    if trimmed.is_empty() && !name.is_empty() {
        fragments.next();
    }
    fragments
}
