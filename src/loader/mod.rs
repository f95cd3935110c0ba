//! Template loading for genfile.
//! Turns a template file or a directory of templates into a [`TemplateSet`].

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::renderer::TemplateSet;

pub mod local;

pub use local::TemplateFile;

/// Represents where templates are loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// A single template file
    File(PathBuf),
    /// A directory walked recursively for template files
    Directory(PathBuf),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::File(path) => write!(f, "template file: '{}'", path.display()),
            TemplateSource::Directory(path) => {
                write!(f, "template directory: '{}'", path.display())
            }
        }
    }
}

impl TemplateSource {
    /// Inspects `path` to tell a single file from a directory.
    ///
    /// # Errors
    /// * `Error::StatError` if the path does not exist or cannot be inspected
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)
            .map_err(|source| Error::StatError { path: path.to_path_buf(), source })?;

        if metadata.is_dir() {
            Ok(Self::Directory(path.to_path_buf()))
        } else {
            Ok(Self::File(path.to_path_buf()))
        }
    }

    /// Reads every template file of this source.
    pub fn collect(&self) -> Result<Vec<TemplateFile>> {
        match self {
            TemplateSource::File(path) => local::collect_file(path),
            TemplateSource::Directory(path) => local::collect_dir(path),
        }
    }
}

/// Loads the template file or template directory at `path`.
///
/// All files are read first and parsed afterwards; a single unreadable or
/// malformed file fails the whole load.
pub fn load_templates<P: AsRef<Path>>(path: P) -> Result<TemplateSet> {
    let source = TemplateSource::from_path(path)?;
    debug!("Loading templates from the {}.", source);

    let files = source.collect()?;
    let templates = TemplateSet::from_files(files)?;
    if templates.is_empty() {
        warn!("No templates found in the {}.", source);
    } else {
        debug!("Loaded {} template(s) from the {}.", templates.len(), source);
    }

    Ok(templates)
}
