//! Collects template files from the local filesystem.
//!
//! Collection only reads files and computes their names; parsing happens
//! afterwards when the [`TemplateSet`](crate::renderer::TemplateSet) is built.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::constants::NAME_SEPARATOR;
use crate::error::{Error, Result};

/// A template file read from disk but not parsed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Name the template is registered and rendered under.
    pub name: String,
    /// File the content was read from.
    pub path: PathBuf,
    /// Raw template body.
    pub content: String,
}

impl TemplateFile {
    /// Reads the file at `path` and registers it under `name`.
    pub fn read<P: AsRef<Path>>(path: P, name: String) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|source| Error::ReadError { path: path.to_path_buf(), source })?;
        Ok(Self { name, path: path.to_path_buf(), content })
    }
}

/// Strips trailing separators (and inner `.` components) from a walk root.
pub fn normalize_root(path: &Path) -> PathBuf {
    path.components().collect()
}

/// Computes the name of `path` relative to `root`, joined with `/`.
///
/// # Errors
/// * `Error::InvalidNameError` if `path` is not under `root` or is not valid UTF-8
pub fn template_name(root: &Path, path: &Path) -> Result<String> {
    let invalid = || Error::InvalidNameError { path: path.to_path_buf() };
    let relative = path.strip_prefix(root).map_err(|_| invalid())?;
    let parts = relative
        .components()
        .map(|component| component.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()
        .ok_or_else(invalid)?;

    if parts.is_empty() {
        return Err(invalid());
    }
    Ok(parts.join(NAME_SEPARATOR))
}

/// Collects a single template file, named by its base file name.
pub fn collect_file(path: &Path) -> Result<Vec<TemplateFile>> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::InvalidNameError { path: path.to_path_buf() })?;

    debug!("Found template '{}' at '{}'.", name, path.display());
    Ok(vec![TemplateFile::read(path, name.to_string())?])
}

/// Collects every non-directory entry under `root`, recursively.
///
/// Entries are visited sorted by file name, so the result order is stable
/// across platforms.
pub fn collect_dir(root: &Path) -> Result<Vec<TemplateFile>> {
    let root = normalize_root(root);
    let mut files = Vec::new();

    for entry in WalkDir::new(&root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().map_or_else(|| root.clone(), Path::to_path_buf);
            Error::ReadError { path, source: e.into() }
        })?;
        if entry.file_type().is_dir() {
            continue;
        }

        let name = template_name(&root, entry.path())?;
        debug!("Found template '{}' at '{}'.", name, entry.path().display());
        files.push(TemplateFile::read(entry.path(), name)?);
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_root() {
        assert_eq!(normalize_root(Path::new("templates/")), PathBuf::from("templates"));
        assert_eq!(normalize_root(Path::new("templates//")), PathBuf::from("templates"));
        assert_eq!(normalize_root(Path::new("./templates/")), PathBuf::from("./templates"));
        assert_eq!(normalize_root(Path::new("/")), PathBuf::from("/"));
    }

    #[test]
    fn test_template_name() {
        let root = Path::new("templates");
        assert_eq!(template_name(root, Path::new("templates/file1")).unwrap(), "file1");
        assert_eq!(
            template_name(root, Path::new("templates/etc/conf/file3")).unwrap(),
            "etc/conf/file3"
        );
        assert!(template_name(root, Path::new("other/file1")).is_err());
        assert!(template_name(root, Path::new("templates")).is_err());
    }
}
