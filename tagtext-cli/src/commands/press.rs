//! Press command implementation

use crate::config::load_config;
use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tagtext_core::press::{press_message, DryRunOpener, SystemLinkOpener};
use tagtext_core::{DefaultPressHandler, PressAction, Segmenter};

/// Arguments for the press command
#[derive(Debug, Args)]
pub struct PressArgs {
    /// Text to render
    #[arg(short, long, value_name = "TEXT")]
    pub text: String,

    /// Index of the segment to press, as listed by `render`
    #[arg(short, long, value_name = "N")]
    pub segment: usize,

    /// Report the link target instead of opening it
    #[arg(long)]
    pub dry_run: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "TAGTEXT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl PressArgs {
    /// Execute the press command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, false);

        let config = load_config(self.config.as_deref())?;
        let segmenter = Segmenter::from_config(&config).context("Failed to build segmenter")?;
        let segments = segmenter.segment(&self.text);

        let segment = segments.get(self.segment).ok_or(CliError::SegmentOutOfRange {
            index: self.segment,
            count: segments.len(),
        })?;
        let Some(action) = &segment.action else {
            return Err(CliError::NotPressable(self.segment).into());
        };

        let handler = if self.dry_run {
            DefaultPressHandler::new(config.press.notifier.build(), Box::new(DryRunOpener))
        } else {
            DefaultPressHandler::with_notifier_kind(config.press.notifier)
        };

        println!("Pressed {} {:?}", segment.kind, segment.text);
        match action {
            PressAction::OpenLink { url } => match SystemLinkOpener::target(url) {
                Some(target) if self.dry_run => println!("Would open: {target}"),
                Some(target) => println!("Opening: {target}"),
                None => println!("Cannot open: {url}"),
            },
            other => {
                if let Some(message) = press_message(other) {
                    println!("{message}");
                }
            }
        }

        segment.press(&handler);
        Ok(())
    }
}
