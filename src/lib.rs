//! genfile generates files from templates with given variables.
//! Variables come from a JSON or TOML file, templates from a single file or a
//! directory tree whose layout is mirrored in the output directory.

/// Command-line interface module for genfile
pub mod cli;

/// Exit codes, supported extensions and naming constants
pub mod constants;

/// Error types and exit code mapping
pub mod error;

/// Template discovery from a file or a directory tree
pub mod loader;

/// Logger setup
pub mod logger;

/// Core generation orchestration
/// Renders every template into the output directory
pub mod processor;

/// Template set parsing and rendering
pub mod renderer;

/// Variable file decoding (JSON and TOML)
pub mod variables;
