//! Configuration types for SceneTree output.
//!
//! All types implement [`serde::Deserialize`] with every field defaulted, so
//! a partial configuration file only overrides what it names.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`OutputConfig`] - Controls the export format and its layout.
//!
//! # Example
//!
//! ```
//! # use scenetree::config::{AppConfig, OutputFormat};
//! let config = AppConfig::default();
//! assert_eq!(config.output().format(), OutputFormat::Json);
//! assert!(config.output().pretty());
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified output configuration.
    pub fn new(output: OutputConfig) -> Self {
        Self { output }
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns a copy of this configuration exporting in `format`.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output.format = format;
        self
    }
}

/// Export format of a scene tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tagged JSON tree.
    #[default]
    Json,
    /// Indented text outline, one node per line.
    Outline,
}

/// Export settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    format: OutputFormat,

    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pretty: bool,
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`].
    ///
    /// # Arguments
    ///
    /// * `format` - The export format.
    /// * `pretty` - Whether JSON output is indented.
    pub fn new(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}
