//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Invalid file pattern
    InvalidPattern(String),
    /// Segment index past the end of the rendered text
    SegmentOutOfRange {
        /// Requested index
        index: usize,
        /// Number of segments rendered
        count: usize,
    },
    /// Segment exists but has no press action
    NotPressable(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::SegmentOutOfRange { index, count } => {
                write!(f, "Segment {index} out of range ({count} segments)")
            }
            CliError::NotPressable(index) => write!(f, "Segment {index} is not pressable"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
