//! Starter project scaffold

use crate::config::consts::CONFIG_FILE_NAME;
use crate::config::Config;
use crate::error::{HccdError, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

const STARTER_HTML: &str = include_str!("../../starter/card.html");
const STARTER_CSS: &str = include_str!("../../starter/card.css");
const STARTER_CSV: &str = include_str!("../../starter/card.csv");
const STYLESHEET_PLACEHOLDER: &str = "__STYLESHEET__";

/// Check that `name` is a plain file base name
///
/// Rejects empty names, path separators, `.`/`..` and rooted paths.
///
/// ```
/// # use hccd_core::project::create::validate_name;
/// assert!(validate_name("monsters").is_ok());
/// assert!(validate_name("../monsters").is_err());
/// assert!(validate_name("/tmp/monsters").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| {
        Err(HccdError::ProjectInvalidStructure(format!(
            "invalid project name '{}': {}",
            name, reason
        )))
    };

    if name.trim().is_empty() {
        return invalid("name cannot be empty");
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => {}
        (Some(Component::Normal(_)), Some(_)) => {
            return invalid("name cannot contain path separators")
        }
        _ => return invalid("name must not be a relative or absolute path"),
    }

    if name.contains(['\\', '/']) {
        return invalid("name cannot contain path separators");
    }

    Ok(())
}

/// Write a starter project into `dir`
///
/// Creates `dir` if needed, then writes `<name>.html`, `<name>.css`,
/// `<name>.csv` and `hccd.toml` holding `config`. Returns the written paths.
///
/// # Errors
///
/// `ProjectInvalidStructure` for a bad name or when any of the files already
/// exists; nothing is written in that case.
pub fn create_project(dir: &Path, name: &str, config: &Config) -> Result<Vec<PathBuf>> {
    validate_name(name)?;

    let html = dir.join(format!("{}.html", name));
    let css = dir.join(format!("{}.css", name));
    let csv = dir.join(format!("{}.csv", name));
    let toml = dir.join(CONFIG_FILE_NAME);

    let targets = [&html, &css, &csv, &toml];
    if let Some(existing) = targets.iter().find(|path| path.exists()) {
        return Err(HccdError::ProjectInvalidStructure(format!(
            "'{}' already exists; refusing to overwrite",
            existing.display()
        )));
    }

    fs::create_dir_all(dir)?;

    let stylesheet = format!("{}.css", name);
    fs::write(&html, STARTER_HTML.replace(STYLESHEET_PLACEHOLDER, &stylesheet))?;
    fs::write(&css, STARTER_CSS)?;
    fs::write(&csv, STARTER_CSV)?;
    config.to_file(&toml)?;

    tracing::debug!(dir = %dir.display(), name, "starter project created");

    Ok(targets.into_iter().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::read_card_fragment;
    use tempfile::TempDir;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("cards").is_ok());
        assert!(validate_name("my-cards_2").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("  ").is_err());
        assert!(validate_name("..").is_err());
        assert!(validate_name(".").is_err());
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("a\\b").is_err());
        assert!(validate_name("/abs").is_err());
    }

    #[test]
    fn test_create_project_writes_files() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("deck");

        let written = create_project(&root, "monsters", &Config::default()).unwrap();

        assert_eq!(written.len(), 4);
        for path in &written {
            assert!(path.is_file(), "{} missing", path.display());
        }

        let html = fs::read_to_string(root.join("monsters.html")).unwrap();
        assert!(html.contains("href=\"monsters.css\""));
        assert!(!html.contains(STYLESHEET_PLACEHOLDER));

        let fragment = read_card_fragment(&root.join("monsters.html")).unwrap();
        assert!(fragment.starts_with("<div class=\"card\">"));

        let config = Config::from_file(root.join("hccd.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_create_project_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("hccd.toml"), "# mine").unwrap();

        let err = create_project(dir.path(), "cards", &Config::default()).unwrap_err();

        assert!(err.to_string().contains("already exists"));
        assert!(!dir.path().join("cards.html").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("hccd.toml")).unwrap(),
            "# mine"
        );
    }
}
