//! Configuration types for mermalade conversions.
//!
//! This module provides configuration structures that control how the
//! converter treats its input. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources
//! (the CLI loads them from TOML).
//!
//! # Example
//!
//! ```
//! # use mermalade::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(!config.convert().strict());
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Conversion configuration section.
    #[serde(default)]
    convert: ConvertConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified conversion configuration.
    pub fn new(convert: ConvertConfig) -> Self {
        Self { convert }
    }

    /// Returns the conversion configuration.
    pub fn convert(&self) -> &ConvertConfig {
        &self.convert
    }
}

/// Conversion behavior configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConvertConfig {
    /// Fail the conversion when relationship lines have to be dropped.
    ///
    /// The default is permissive: unconvertible lines are skipped and
    /// the conversion always succeeds. Strict mode surfaces those lines
    /// as an error instead, without changing the emitted text for
    /// inputs that convert cleanly.
    #[serde(default)]
    strict: bool,
}

impl ConvertConfig {
    /// Creates a new [`ConvertConfig`].
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Whether strict mode is enabled.
    pub fn strict(&self) -> bool {
        self.strict
    }
}
