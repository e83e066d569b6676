//! Gate configuration.
//!
//! Settings live in an optional `prnotes.toml` at the repository root. Every
//! field has a default, so an absent file behaves like an empty one.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up by [`GateConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "prnotes.toml";

/// Default location of the release-notes file.
pub const DEFAULT_RELEASE_NOTES: &str = "docs/source/release_notes.rst";

/// Default name of the step output carrying the classification.
pub const DEFAULT_OUTPUT_NAME: &str = "is_dev";

/// Release-notes gate configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GateConfig {
    /// Path to the release-notes file, relative to the repository root.
    pub release_notes: PathBuf,
    /// Name of the step output that carries `True`/`False`.
    pub output_name: String,
    /// Pull request actions that run the gate.
    pub actions: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            release_notes: PathBuf::from(DEFAULT_RELEASE_NOTES),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            actions: vec!["opened".to_string(), "synchronize".to_string()],
        }
    }
}

impl GateConfig {
    /// Load configuration from an explicit file. The file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(
                format!("failed to read {}: {e}", path.display()),
                "Check that the --config path exists",
            )
        })?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "Loaded gate configuration");
        Ok(config)
    }

    /// Load `prnotes.toml` from `dir`, falling back to defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            tracing::debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Whether a pull request action should run the gate.
    #[must_use]
    pub fn accepts_action(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }

    fn validate(&self) -> Result<()> {
        if self.output_name.is_empty() || self.output_name.contains(['=', '\n', '\r']) {
            return Err(Error::config(
                format!("invalid output-name {:?}", self.output_name),
                "Step output names must be non-empty and contain no '=' or newlines",
            ));
        }
        if self.release_notes.as_os_str().is_empty() {
            return Err(Error::config(
                "release-notes path is empty",
                "Set release-notes to the documentation file holding :pr: markers",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GateConfig::default();
        assert_eq!(
            config.release_notes,
            PathBuf::from("docs/source/release_notes.rst")
        );
        assert_eq!(config.output_name, "is_dev");
        assert!(config.accepts_action("opened"));
        assert!(config.accepts_action("synchronize"));
        assert!(!config.accepts_action("closed"));
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = GateConfig::discover(tmp.path()).unwrap();
        assert_eq!(config, GateConfig::default());
    }

    #[test]
    fn test_discover_reads_partial_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "release-notes = \"CHANGES.rst\"\n",
        )
        .unwrap();

        let config = GateConfig::discover(tmp.path()).unwrap();
        assert_eq!(config.release_notes, PathBuf::from("CHANGES.rst"));
        assert_eq!(config.output_name, "is_dev");
    }

    #[test]
    fn test_load_full_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        std::fs::write(
            &path,
            r#"
release-notes = "docs/changelog.rst"
output-name = "needs_note"
actions = ["opened", "reopened", "synchronize"]
"#,
        )
        .unwrap();

        let config = GateConfig::load(&path).unwrap();
        assert_eq!(config.output_name, "needs_note");
        assert!(config.accepts_action("reopened"));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = GateConfig::load(tmp.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "release-notes = [").unwrap();
        assert!(matches!(
            GateConfig::load(&path),
            Err(Error::TomlParse(_))
        ));
    }

    #[test]
    fn test_rejects_bad_output_name() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "output-name = \"a=b\"\n").unwrap();
        assert!(matches!(GateConfig::load(&path), Err(Error::Config { .. })));
    }
}
