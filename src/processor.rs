//! Core generation orchestration.
//! Renders every template of a set into a file below the output root.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::NAME_SEPARATOR;
use crate::error::{Error, Result};
use crate::loader::load_templates;
use crate::renderer::TemplateSet;
use crate::variables::{load_variables, Variables};

/// Joins `output_root` with every `/`-separated component of a template name.
pub fn resolve_output_path<P: AsRef<Path>>(output_root: P, name: &str) -> PathBuf {
    let mut target = output_root.as_ref().to_path_buf();
    target.extend(name.split(NAME_SEPARATOR).filter(|part| !part.is_empty()));
    target
}

/// Creates every missing parent directory of `path`.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|source| Error::DirectoryCreateError { path: parent.to_path_buf(), source }),
        _ => Ok(()),
    }
}

/// Renders templates against one set of variables into an output directory.
#[derive(Debug)]
pub struct Processor<'a> {
    templates: &'a TemplateSet,
    variables: &'a Variables,
    output_root: &'a Path,
}

impl<'a> Processor<'a> {
    pub fn new(templates: &'a TemplateSet, variables: &'a Variables, output_root: &'a Path) -> Self {
        Self { templates, variables, output_root }
    }

    /// Generates the output file of template `name` and returns its path.
    ///
    /// An existing file is truncated. If rendering fails midway, whatever was
    /// written so far stays in the file.
    pub fn process(&self, name: &str) -> Result<PathBuf> {
        let target = resolve_output_path(self.output_root, name);
        println!("Generating '{}' to '{}'.", name, target.display());

        ensure_parent_dir(&target)?;
        let file = File::create(&target)
            .map_err(|source| Error::FileCreateError { path: target.clone(), source })?;

        let mut writer = BufWriter::new(file);
        self.templates.render_to(name, self.variables, &mut writer)?;
        writer
            .flush()
            .map_err(|source| Error::WriteError { path: target.clone(), source })?;

        debug!(
            "Wrote '{}' from '{}'.",
            target.display(),
            self.templates.source_path(name).unwrap_or_else(|| Path::new(name)).display()
        );
        Ok(target)
    }

    /// Generates every template in set order, stopping at the first failure.
    pub fn process_all(&self) -> Result<Vec<PathBuf>> {
        self.templates.names().map(|name| self.process(name)).collect()
    }
}

/// Loads variables and templates, then generates every output file.
///
/// Returns the paths written, in generation order.
pub fn generate<V, I, O>(varfile: V, input: I, output_root: O) -> Result<Vec<PathBuf>>
where
    V: AsRef<Path>,
    I: AsRef<Path>,
    O: AsRef<Path>,
{
    let variables = load_variables(varfile)?;
    let templates = load_templates(input)?;

    Processor::new(&templates, &variables, output_root.as_ref()).process_all()
}
