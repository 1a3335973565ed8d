//! Namespaced resource identifiers
//!
//! Sound events are addressed as `namespace:path`. A bare `path` lives in the
//! default `minecraft` namespace.

use std::fmt;
use std::str::FromStr;

/// Namespace assumed when an identifier does not name one
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Errors produced when parsing a [`ResourceLocation`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocationError {
    /// Nothing to address after the namespace separator
    #[error("Empty resource path in '{0}'")]
    Empty(String),

    /// Namespace contains characters outside `[a-z0-9_.-]`
    #[error("Non [a-z0-9_.-] character in namespace of location: {0}")]
    InvalidNamespace(String),

    /// Path contains characters outside `[a-z0-9/._-]`
    #[error("Non [a-z0-9/._-] character in path of location: {0}")]
    InvalidPath(String),
}

/// A `namespace:path` identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceLocation {
    namespace: String,
    path: String,
}

impl ResourceLocation {
    /// Build a location from already separated parts
    pub fn new(namespace: &str, path: &str) -> Result<Self, ResourceLocationError> {
        let namespace = if namespace.is_empty() { DEFAULT_NAMESPACE } else { namespace };
        let full = format!("{namespace}:{path}");

        if path.is_empty() {
            return Err(ResourceLocationError::Empty(full));
        }
        if !namespace.chars().all(is_valid_namespace_char) {
            return Err(ResourceLocationError::InvalidNamespace(full));
        }
        if !path.chars().all(is_valid_path_char) {
            return Err(ResourceLocationError::InvalidPath(full));
        }

        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// The namespace, e.g. `minecraft`
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The path within the namespace, e.g. `ambient.cave`
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl FromStr for ResourceLocation {
    type Err = ResourceLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(DEFAULT_NAMESPACE, s),
        }
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

fn is_valid_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

fn is_valid_path_char(c: char) -> bool {
    is_valid_namespace_char(c) || c == '/'
}
