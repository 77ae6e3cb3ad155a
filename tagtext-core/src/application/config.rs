//! Render configuration
//!
//! Defines the TOML schema shared by the library and the CLI.

use crate::domain::{ExtractOptions, StyleSheet};
use crate::error::Result;
use crate::press::NotifierKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Which recognizers run
    #[serde(default)]
    pub extract: ExtractOptions,

    /// Style per segment kind
    #[serde(default)]
    pub styles: StyleSheet,

    /// Press handling
    #[serde(default)]
    pub press: PressConfig,
}

/// Press handling configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PressConfig {
    /// Notifier used for hashtag, mention and prop presses
    #[serde(default)]
    pub notifier: NotifierKind,
}

impl RenderConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: RenderConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        self.styles.validate()
    }
}
