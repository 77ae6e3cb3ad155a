//! Segmenter assembly and configuration

pub mod config;
pub mod segmenter;

pub use config::{PressConfig, RenderConfig};
pub use segmenter::{RenderRequest, Rendered, SegmentStats, Segmenter, SegmenterBuilder};
