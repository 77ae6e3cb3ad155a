//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use tagtext_core::SegmentKind;

pub mod generate_config;
pub mod press;
pub mod render;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render text or files into segments
    Render(render::RenderArgs),

    /// Render text and press one segment
    Press(press::PressArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List segment kinds in classification order
    Kinds,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Render(args) => args.execute(),
            Commands::Press(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Kinds => {
                println!("Segment kinds (classification order):");
                for kind in SegmentKind::ALL {
                    println!("  {:<8} {}", kind.as_str(), kind.description());
                }
            }
            ListCommands::Formats => {
                println!("Output formats:");
                for format in render::OutputFormat::ALL {
                    println!("  {:<8} {}", format.name(), format.description());
                }
            }
        }
    }
}

/// Initialize logging based on verbosity level
///
/// `quiet` leaves the logger uninitialised so nothing is printed.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Ignored when a logger is already installed
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_commands_execute() {
        let cmd = Commands::List {
            subcommand: ListCommands::Kinds,
        };
        assert!(cmd.execute().is_ok());

        let cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        assert!(cmd.execute().is_ok());
    }

    #[test]
    fn test_commands_debug_format() {
        let cmd = Commands::List {
            subcommand: ListCommands::Kinds,
        };
        let debug_str = format!("{:?}", cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Kinds"));
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(2, false);
        init_logging(0, false);
        init_logging(0, true);
    }
}
