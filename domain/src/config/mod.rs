//! Domain-level configuration values shared by the outer layers.

pub mod output_format;

pub use output_format::OutputFormat;
