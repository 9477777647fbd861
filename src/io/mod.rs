//! Error handling, configuration and the file-based command-line harness

/// Command-line parsing and batch processing
pub mod cli;
/// Algorithm constants and defaults
pub mod configuration;
/// Error types shared by the whole crate
pub mod error;
/// PNG loading and export
pub mod image;
/// Terminal progress display
pub mod progress;
