//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tagtext_core::{DEFAULT_EMOJI_FONT, DEFAULT_LINK_COLOR};

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to adjust recognizers and styles");
        println!("2. Validate your configuration:");
        println!("   tagtext validate -c {}", self.output.display());
        println!("3. Use it for rendering:");
        println!("   tagtext render -i input.txt -c {}", self.output.display());

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> String {
        format!(
            r##"# tagtext render configuration

# Recognizers to run. A token is claimed by the first enabled recognizer in
# the order link, prop, hashtag, mention, emoji; otherwise it is plain text.
[extract]
links = true
hashtags = true
mentions = true
props = true
emoji = true

# Style hints attached to matched segments.
# Colors are "#rgb" or "#rrggbb"; font_family must not be empty.
[styles.link]
color = "{color}"

[styles.hashtag]
color = "{color}"

[styles.mention]
color = "{color}"

[styles.prop]
color = "{color}"

[styles.emoji]
font_family = "{font}"

# What pressing a hashtag, mention or prop does:
#   "log"   - write the message to the log
#   "alert" - print "[!] message" on stderr
[press]
notifier = "log"
"##,
            color = DEFAULT_LINK_COLOR,
            font = DEFAULT_EMOJI_FONT
        )
    }
}
