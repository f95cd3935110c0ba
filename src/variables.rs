//! Variable file loading.
//! Decodes a JSON or TOML file into a single generic value that every
//! template is rendered against.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::constants::{JSON_EXTENSION, TOML_EXTENSION};
use crate::error::{Error, Result};

/// The decoded variables: null, booleans, numbers, strings, sequences and
/// string-keyed mappings, nested arbitrarily.
pub type Variables = serde_json::Value;

type DecodeError = Box<dyn std::error::Error + Send + Sync>;

/// Serialization formats accepted for variable files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Toml => write!(f, "toml"),
        }
    }
}

impl Format {
    /// Picks the decoder for an extension such as `.json`.
    ///
    /// Matching is case-sensitive, so `.JSON` is not recognised.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            JSON_EXTENSION => Some(Format::Json),
            TOML_EXTENSION => Some(Format::Toml),
            _ => None,
        }
    }

    /// Decodes `content` into a generic value.
    pub fn decode(self, content: &str) -> std::result::Result<Variables, DecodeError> {
        match self {
            Format::Json => Ok(serde_json::from_str(content)?),
            Format::Toml => {
                let table: toml::Table = toml::from_str(content)?;
                Ok(table_to_value(table))
            }
        }
    }
}

/// Returns the extension of the final path component, leading dot included.
///
/// The extension starts at the last `.` of the file name, so `.json` (a file
/// named only by its extension) yields `.json`. Returns an empty string when
/// there is no dot.
pub fn extension_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.rfind('.').map(|idx| name[idx..].to_string()))
        .unwrap_or_default()
}

/// Loads the variable file at `path`.
///
/// # Errors
/// * `Error::OpenError` if the file cannot be opened
/// * `Error::UnsupportedFormatError` if the extension is neither `.json` nor `.toml`
/// * `Error::ReadError` if the content cannot be read
/// * `Error::VariablesParseError` if the content is not a valid document
pub fn load_variables<P: AsRef<Path>>(path: P) -> Result<Variables> {
    let path = path.as_ref();
    let mut file = File::open(path)
        .map_err(|source| Error::OpenError { path: path.to_path_buf(), source })?;

    let extension = extension_of(path);
    let format = Format::from_extension(&extension).ok_or_else(|| {
        Error::UnsupportedFormatError { path: path.to_path_buf(), extension }
    })?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|source| Error::ReadError { path: path.to_path_buf(), source })?;

    debug!("Decoding variables from '{}' as {}.", path.display(), format);

    format.decode(&content).map_err(|source| Error::VariablesParseError {
        path: path.to_path_buf(),
        format,
        source,
    })
}

fn table_to_value(table: toml::Table) -> Variables {
    Variables::Object(table.into_iter().map(|(key, value)| (key, toml_to_value(value))).collect())
}

// Datetimes keep their TOML spelling. Non-finite floats have no JSON number
// and become null.
fn toml_to_value(value: toml::Value) -> Variables {
    match value {
        toml::Value::String(s) => Variables::String(s),
        toml::Value::Integer(i) => Variables::from(i),
        toml::Value::Float(f) => {
            serde_json::Number::from_f64(f).map_or(Variables::Null, Variables::Number)
        }
        toml::Value::Boolean(b) => Variables::Bool(b),
        toml::Value::Datetime(dt) => Variables::String(dt.to_string()),
        toml::Value::Array(items) => {
            Variables::Array(items.into_iter().map(toml_to_value).collect())
        }
        toml::Value::Table(table) => table_to_value(table),
    }
}
