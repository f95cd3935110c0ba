//! Common constants used throughout genfile.

/// Exit code after printing the usage text.
pub const EXIT_USAGE: i32 = 1;

/// Exit code when the variable file or the templates cannot be loaded.
pub const EXIT_INPUT_ERROR: i32 = 2;

/// Exit code when an output file cannot be generated.
pub const EXIT_OUTPUT_ERROR: i32 = 3;

/// Variable file extension decoded as JSON.
pub const JSON_EXTENSION: &str = ".json";

/// Variable file extension decoded as TOML.
pub const TOML_EXTENSION: &str = ".toml";

/// Separator used inside template names, independent of the platform.
pub const NAME_SEPARATOR: &str = "/";
