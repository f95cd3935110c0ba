//! Template set and rendering functionality for genfile.
//! All templates of a run share one MiniJinja environment, so a template can
//! include, import or extend another one by name.

use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::error::{Error, Result};
use crate::loader::TemplateFile;
use crate::variables::Variables;

/// Creates the environment templates are parsed into.
///
/// * printing or dereferencing an undefined field or index is an error,
///   while testing one in `if` treats it as false
/// * a trailing newline of a template is kept in its output
/// * nothing is escaped, whatever the file extension
pub fn new_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::SemiStrict);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_: &str| AutoEscape::None);
    env
}

/// A named collection of parsed templates.
#[derive(Debug)]
pub struct TemplateSet {
    env: Environment<'static>,
    /// Template names in load order, mapped to the file each was read from.
    sources: IndexMap<String, PathBuf>,
}

impl TemplateSet {
    /// Parses `files` into a new set.
    ///
    /// # Errors
    /// * `Error::TemplateParseError` naming the first file that fails to parse
    pub fn from_files<I>(files: I) -> Result<Self>
    where
        I: IntoIterator<Item = TemplateFile>,
    {
        let mut env = new_environment();
        let mut sources = IndexMap::new();

        for TemplateFile { name, path, content } in files {
            if let Err(source) = env.add_template_owned(name.clone(), content) {
                return Err(Error::TemplateParseError { path, source });
            }
            sources.insert(name, path);
        }

        Ok(Self { env, sources })
    }

    /// Number of templates in the set.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the set holds no template at all.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Template names in load order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// The file a template was read from.
    pub fn source_path(&self, name: &str) -> Option<&Path> {
        self.sources.get(name).map(PathBuf::as_path)
    }

    /// Renders template `name` against `variables`, streaming into `writer`.
    ///
    /// # Errors
    /// * `Error::RenderError` if the template is unknown or its execution fails
    pub fn render_to<W: Write>(&self, name: &str, variables: &Variables, writer: W) -> Result<()> {
        let render_error = |source| Error::RenderError { name: name.to_string(), source };
        let template = self.env.get_template(name).map_err(render_error)?;
        template.render_to_write(variables, writer).map_err(render_error)?;
        Ok(())
    }
}
