//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tagtext_core::{RenderConfig, SegmentKind, Segmenter};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let checked = RenderConfig::from_file(&self.config)
            .and_then(|config| Segmenter::from_config(&config).map(|_| config));

        match checked {
            Ok(config) => {
                let enabled: Vec<&str> = SegmentKind::ALL
                    .iter()
                    .filter(|kind| match kind {
                        SegmentKind::Link => config.extract.links,
                        SegmentKind::Prop => config.extract.props,
                        SegmentKind::Hashtag => config.extract.hashtags,
                        SegmentKind::Mention => config.extract.mentions,
                        SegmentKind::Emoji => config.extract.emoji,
                        SegmentKind::Plain => false,
                    })
                    .map(|kind| kind.as_str())
                    .collect();

                println!("✓ Configuration is valid!");
                println!("  Recognizers: {}", enabled.join(", "));
                println!("  Notifier: {:?}", config.press.notifier);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
