//! Input/output around the generator: CLI, session documents, previews

/// Command-line parsing and batch generation
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types for I/O and validation
pub mod error;
/// PNG preview export
pub mod image;
/// Batch progress display
pub mod progress;
/// JSON session documents
pub mod session;
