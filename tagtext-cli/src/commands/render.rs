//! Render command implementation

use crate::config::{load_config, ExtractFlags};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, SegmentFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tagtext_core::{ExtractOptions, RenderRequest, Rendered, Segmenter};

/// Arguments for the render command
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Input files or patterns (supports glob)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub input: Vec<String>,

    /// Render this text instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "TAGTEXT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub flags: ExtractFlags,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One segment per line with kind and action
    Text,
    /// JSON array of documents with segments and counts
    Json,
    /// Markdown with inline emphasis
    Markdown,
}

impl OutputFormat {
    /// Every format, in listing order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Name accepted by `--format`
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "one segment per line with kind and action",
            OutputFormat::Json => "JSON array of documents with segments and counts",
            OutputFormat::Markdown => "inline markdown plus a list of pressable segments",
        }
    }

    /// Formatter writing to `writer`
    pub fn formatter<W: Write + Send + 'static>(&self, writer: W) -> Box<dyn SegmentFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting render");
        log::debug!("Arguments: {:?}", self);

        let config = load_config(self.config.as_deref())?;
        let segmenter = Segmenter::from_config(&config).context("Failed to build segmenter")?;
        let options = self.flags.apply(config.extract);

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output: {}", path.display()))?,
            )),
            None => Box::new(io::stdout()),
        };
        let mut formatter = self.format.formatter(writer);

        if let Some(text) = &self.text {
            let rendered = segmenter.render(RenderRequest::new(text.as_str()).with_options(options))?;
            formatter.format_document(None, &rendered)?;
        } else {
            let files = resolve_patterns(&self.input)?;
            log::info!("Rendering {} file(s)", files.len());

            for (path, rendered) in self.render_files(&segmenter, &options, &files)? {
                formatter.format_document(Some(&path.display().to_string()), &rendered)?;
            }
        }

        formatter.finish()?;
        log::info!("Render complete");
        Ok(())
    }

    /// Render files in parallel, keeping input order
    fn render_files<'a>(
        &self,
        segmenter: &Segmenter,
        options: &ExtractOptions,
        files: &'a [PathBuf],
    ) -> Result<Vec<(&'a Path, Rendered)>> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let rendered = files
            .par_iter()
            .map(|path| -> Result<(&'a Path, Rendered)> {
                let text = FileReader::read_text(path)?;
                let rendered =
                    segmenter.render(RenderRequest::new(text).with_options(*options))?;
                progress.file_completed(&path.display().to_string());
                Ok((path.as_path(), rendered))
            })
            .collect::<Result<Vec<_>>>();

        progress.finish();
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(output: PathBuf, format: OutputFormat) -> RenderArgs {
        RenderArgs {
            input: Vec::new(),
            text: None,
            output: Some(output),
            format,
            config: None,
            flags: ExtractFlags::default(),
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_render_text_to_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.json");
        let mut args = args(out.clone(), OutputFormat::Json);
        args.text = Some("#a @b".into());
        args.flags.no_mentions = true;

        args.execute().unwrap();

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(json[0]["stats"]["hashtags"], 1);
        assert_eq!(json[0]["stats"]["mentions"], 0);
    }

    #[test]
    fn test_render_files_in_order() {
        let dir = TempDir::new().unwrap();
        for (name, body) in [("b.txt", "#second"), ("a.txt", "#first"), ("c.txt", "#third")] {
            fs::write(dir.path().join(name), body).unwrap();
        }
        let out = dir.path().join("out.txt");
        let mut args = args(out.clone(), OutputFormat::Text);
        args.input = vec![format!("{}/*.txt", dir.path().display())];

        args.execute().unwrap();

        let text = fs::read_to_string(out).unwrap();
        let first = text.find("#first").unwrap();
        let second = text.find("#second").unwrap();
        let third = text.find("#third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_render_missing_files() {
        let dir = TempDir::new().unwrap();
        let mut args = args(dir.path().join("out.txt"), OutputFormat::Text);
        args.input = vec![format!("{}/*.nothing", dir.path().display())];
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_format_names() {
        let names: Vec<&str> = OutputFormat::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["text", "json", "markdown"]);
    }
}
