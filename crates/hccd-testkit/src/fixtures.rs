//! Card project fixtures
//!
//! Writes the template page, stylesheet, data file and config of a project
//! into a temporary directory.

use crate::temp_dir_in_workspace;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Wrap a card element in a minimal template page
pub fn card_page(card: &str) -> String {
    format!(
        "<!doctype html>\n<html><head><title>preview</title></head>\n<body>\n<h1>Preview</h1>\n{}\n</body></html>\n",
        card
    )
}

/// A card project in its own temporary directory
///
/// ```rust
/// use hccd_testkit::ProjectFixture;
///
/// let project = ProjectFixture::new("cards")
///     .with_card(r#"<div class="card">{{name}}</div>"#)
///     .with_csv("name\nGoblin\n");
/// assert!(project.template_path().is_file());
/// ```
pub struct ProjectFixture {
    dir: TempDir,
    name: String,
}

impl ProjectFixture {
    /// Empty project named `name`; nothing is written yet
    pub fn new(name: &str) -> Self {
        Self {
            dir: temp_dir_in_workspace(),
            name: name.to_string(),
        }
    }

    /// Write `<name>.html` with `card` inside a template page
    pub fn with_card(self, card: &str) -> Self {
        self.with_template_html(&card_page(card))
    }

    /// Write `<name>.html` verbatim
    pub fn with_template_html(self, html: &str) -> Self {
        let file = format!("{}.html", self.name);
        self.write(&file, html)
    }

    pub fn with_stylesheet(self, css: &str) -> Self {
        let file = format!("{}.css", self.name);
        self.write(&file, css)
    }

    pub fn with_csv(self, csv: &str) -> Self {
        let file = format!("{}.csv", self.name);
        self.write(&file, csv)
    }

    /// Write the data file as raw bytes (BOMs, invalid UTF-8)
    pub fn with_csv_bytes(self, bytes: &[u8]) -> Self {
        let path = self.path(&format!("{}.csv", self.name));
        fs::write(&path, bytes).expect("Failed to write fixture file");
        self
    }

    /// Write `hccd.toml`
    pub fn with_config(self, toml: &str) -> Self {
        self.write("hccd.toml", toml)
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.path().join(file)
    }

    pub fn template_path(&self) -> PathBuf {
        self.path(&format!("{}.html", self.name))
    }

    pub fn csv_path(&self) -> PathBuf {
        self.path(&format!("{}.csv", self.name))
    }

    /// `<name>-GENERATED.html`
    pub fn generated_path(&self) -> PathBuf {
        self.path(&format!("{}-GENERATED.html", self.name))
    }

    /// Contents of the generated sheet
    ///
    /// # Panics
    ///
    /// Panics if the sheet has not been generated.
    pub fn read_generated(&self) -> String {
        let path = self.generated_path();
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    fn write(self, file: &str, content: &str) -> Self {
        let path = self.path(file);
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_writes_project_files() {
        let project = ProjectFixture::new("deck")
            .with_card(r#"<div class="card">{{name}}</div>"#)
            .with_stylesheet(".card { width: 60mm; }")
            .with_csv("name\nA\n")
            .with_config("[grid]\nrows = 1\n");

        assert!(project.template_path().ends_with("deck.html"));
        assert!(fs::read_to_string(project.template_path())
            .unwrap()
            .contains(r#"<div class="card">{{name}}</div>"#));
        assert!(project.path("deck.css").is_file());
        assert_eq!(fs::read_to_string(project.csv_path()).unwrap(), "name\nA\n");
        assert!(project.path("hccd.toml").is_file());
        assert!(!project.generated_path().exists());
    }
}
