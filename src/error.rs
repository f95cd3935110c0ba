//! Error handling for genfile.
//! Defines the error type shared by the loaders and the processor, and the
//! mapping from an error to the process exit code.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::constants::{EXIT_INPUT_ERROR, EXIT_OUTPUT_ERROR};
use crate::variables::Format;

/// Errors that can occur while loading inputs or generating output files.
///
/// Every variant names the offending path (or template) and, where there is
/// one, wraps the underlying cause.
#[derive(Error, Debug)]
pub enum Error {
    /// The variable file could not be opened.
    #[error("load varfile error: cannot open '{path}': {source}")]
    OpenError { path: PathBuf, source: io::Error },

    /// The variable file has an extension that no decoder handles.
    #[error("invalid varfile '{path}': it should be json/toml format, but the extension is '{extension}'")]
    UnsupportedFormatError { path: PathBuf, extension: String },

    /// The variable file content is not a valid document of its format.
    #[error("parse varfile '{path}' as {format} error: {source}")]
    VariablesParseError {
        path: PathBuf,
        format: Format,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The template input path does not exist or cannot be inspected.
    #[error("load templates from '{path}' error: cannot determine if it is a directory: {source}")]
    StatError { path: PathBuf, source: io::Error },

    /// A file could not be read.
    #[error("read '{path}' error: {source}")]
    ReadError { path: PathBuf, source: io::Error },

    /// A template file name cannot be used as a template name.
    #[error("template file '{path}' does not have a valid UTF-8 name")]
    InvalidNameError { path: PathBuf },

    /// A template file is not syntactically valid.
    #[error("parse template '{path}' error: {source}")]
    TemplateParseError {
        path: PathBuf,
        source: minijinja::Error,
    },

    /// A parent directory of an output file could not be created.
    #[error("create directory '{path}' error: {source}")]
    DirectoryCreateError { path: PathBuf, source: io::Error },

    /// An output file could not be created or truncated.
    #[error("create '{path}' error: {source}")]
    FileCreateError { path: PathBuf, source: io::Error },

    /// The template engine failed while executing a template.
    #[error("generate '{name}' error: {source}")]
    RenderError {
        name: String,
        source: minijinja::Error,
    },

    /// Rendered output could not be written to its file.
    #[error("write '{path}' error: {source}")]
    WriteError { path: PathBuf, source: io::Error },
}

impl Error {
    /// Returns the process exit code for this error.
    ///
    /// Loading failures (variables or templates) map to `2`, failures while
    /// producing output map to `3`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::OpenError { .. }
            | Error::UnsupportedFormatError { .. }
            | Error::VariablesParseError { .. }
            | Error::StatError { .. }
            | Error::ReadError { .. }
            | Error::InvalidNameError { .. }
            | Error::TemplateParseError { .. } => EXIT_INPUT_ERROR,
            Error::DirectoryCreateError { .. }
            | Error::FileCreateError { .. }
            | Error::RenderError { .. }
            | Error::WriteError { .. } => EXIT_OUTPUT_ERROR,
        }
    }
}

/// Convenience type alias for Results with genfile's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
