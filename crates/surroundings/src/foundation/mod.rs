//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types and helpers
//! - Logging utilities
//! - Localization lookup

pub mod math;
pub mod logging;
pub mod localization;
