//! Configuration for plot surfaces and outputs.
//!
//! Loaded from YAML; every field is optional and falls back to its default.
//! The world scale (pixels per unit) is fixed and deliberately absent.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::geometry::Viewport;
use crate::style::Theme;

/// Initial viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Width in pixels.
    #[serde(default = "default_side")]
    pub width: u32,

    /// Height in pixels.
    #[serde(default = "default_side")]
    pub height: u32,
}

fn default_side() -> u32 {
    400
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_side(),
            height: default_side(),
        }
    }
}

impl From<ViewportConfig> for Viewport {
    fn from(config: ViewportConfig) -> Self {
        Viewport::new(f64::from(config.width), f64::from(config.height))
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Initial viewport size.
    #[serde(default)]
    pub viewport: ViewportConfig,

    /// Stroke and background colors.
    #[serde(default)]
    pub theme: Theme,

    /// Anti-alias raster output.
    #[serde(default = "default_antialias")]
    pub antialias: bool,
}

fn default_version() -> u32 {
    1
}
fn default_antialias() -> bool {
    true
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            viewport: ViewportConfig::default(),
            theme: Theme::default(),
            antialias: default_antialias(),
        }
    }
}

impl PlotConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Initial viewport from the configured size.
    #[must_use]
    pub fn initial_viewport(&self) -> Viewport {
        self.viewport.into()
    }
}
