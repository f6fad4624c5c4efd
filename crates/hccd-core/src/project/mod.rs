//! Project files and the card generation pipeline
//!
//! A project is a directory holding `<base>.html` (template page with one
//! `.card` element), `<base>.css` and `<base>.csv`. Generation writes
//! `<base>-GENERATED.html` next to them.

pub mod create;
mod generate;

pub use generate::{assemble_sheet, generate_cards, GenerationOutcome, Sheet};

use crate::config::consts::GENERATED_SUFFIX;
use crate::error::{HccdError, Result};
use std::path::{Path, PathBuf};

/// The files of one card project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFiles {
    pub dir: PathBuf,
    pub template: PathBuf,
    pub stylesheet: PathBuf,
    pub data: PathBuf,
}

impl ProjectFiles {
    pub fn new(
        template: impl Into<PathBuf>,
        stylesheet: impl Into<PathBuf>,
        data: impl Into<PathBuf>,
    ) -> Self {
        let template = template.into();
        Self {
            dir: parent_dir(&template),
            template,
            stylesheet: stylesheet.into(),
            data: data.into(),
        }
    }

    /// Derive `<base>.css` and `<base>.csv` from the template path
    ///
    /// # Errors
    ///
    /// `ProjectInvalidStructure` when the path has no file name.
    pub fn from_template(template: impl AsRef<Path>) -> Result<Self> {
        let template = template.as_ref();
        let base = file_stem(template)?;
        let dir = parent_dir(template);

        Ok(Self {
            template: template.to_path_buf(),
            stylesheet: dir.join(format!("{}.css", base)),
            data: dir.join(format!("{}.csv", base)),
            dir,
        })
    }

    /// Template file name without extension
    pub fn base_name(&self) -> Result<String> {
        file_stem(&self.template)
    }

    /// `<dir>/<base>-GENERATED.html`
    pub fn target_path(&self) -> Result<PathBuf> {
        Ok(self
            .dir
            .join(format!("{}{}.html", self.base_name()?, GENERATED_SUFFIX)))
    }

    /// Lock file serializing runs for this project
    pub fn lock_path(&self) -> Result<PathBuf> {
        Ok(self
            .dir
            .join(format!(".{}{}.lock", self.base_name()?, GENERATED_SUFFIX)))
    }

    /// Stylesheet reference written into the generated document, relative
    /// to `dir` when the stylesheet lives below it
    pub fn stylesheet_href(&self) -> String {
        let relative = self
            .stylesheet
            .strip_prefix(&self.dir)
            .ok()
            .or_else(|| self.stylesheet.file_name().map(Path::new))
            .unwrap_or(&self.stylesheet);

        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| {
            HccdError::ProjectInvalidStructure(format!(
                "'{}' does not name a template file",
                path.display()
            ))
        })
}
