//! Configuration module
//!
//! Loads the shared TOML [`RenderConfig`] and layers command-line flags on
//! top of it.

use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;
use tagtext_core::{ExtractOptions, RenderConfig};

/// Flags that switch recognizers off for one run
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct ExtractFlags {
    /// Do not recognize links
    #[arg(long)]
    pub no_links: bool,

    /// Do not recognize #hashtags
    #[arg(long)]
    pub no_hashtags: bool,

    /// Do not recognize @mentions
    #[arg(long)]
    pub no_mentions: bool,

    /// Do not recognize ?props
    #[arg(long)]
    pub no_props: bool,

    /// Do not recognize emoji
    #[arg(long)]
    pub no_emoji: bool,
}

impl ExtractFlags {
    /// Apply the flags over options loaded from configuration
    ///
    /// Flags only ever disable; a recognizer disabled in the file stays off.
    pub fn apply(&self, options: ExtractOptions) -> ExtractOptions {
        options
            .links(options.links && !self.no_links)
            .hashtags(options.hashtags && !self.no_hashtags)
            .mentions(options.mentions && !self.no_mentions)
            .props(options.props && !self.no_props)
            .emoji(options.emoji && !self.no_emoji)
    }
}

/// Load the configuration at `path`, or defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };

    log::info!("Loading configuration from {}", path.display());
    RenderConfig::from_file(path)
        .with_context(|| format!("Failed to load configuration: {}", path.display()))
}
