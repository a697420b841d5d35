//! Configuration types for relationship graph building.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! configuration file. Every field has a default, so an empty file is a
//! valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`AssociationConfig`] - Whether member associations are computed.
//! - [`OutputConfig`] - How the annotated document is written.
//!
//! # Example
//!
//! ```
//! # use umlgraph::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.associations().enabled());
//! assert!(config.output().pretty());
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Association section.
    #[serde(default)]
    associations: AssociationConfig,

    /// Output section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(associations: AssociationConfig, output: OutputConfig) -> Self {
        Self {
            associations,
            output,
        }
    }

    /// Returns the association configuration.
    pub fn associations(&self) -> &AssociationConfig {
        &self.associations
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Controls member association extraction.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssociationConfig {
    /// When `false`, files are passed through with empty association lists.
    enabled: bool,
}

impl AssociationConfig {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for AssociationConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Controls how annotated documents are serialized.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Indent the JSON output.
    pretty: bool,
}

impl OutputConfig {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}
