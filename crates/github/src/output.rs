//! Step outputs and workflow command annotations.

use prnotes_gate::{Error, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where step outputs are published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutput {
    /// Append to the file named by `GITHUB_OUTPUT`.
    File(PathBuf),
    /// Print `name=value` to stdout when not running under Actions.
    Stdout,
}

impl StepOutput {
    /// Use `GITHUB_OUTPUT` when set, stdout otherwise.
    #[must_use]
    pub fn detect() -> Self {
        match std::env::var_os("GITHUB_OUTPUT") {
            Some(path) if !path.is_empty() => Self::File(PathBuf::from(path)),
            _ => Self::Stdout,
        }
    }

    /// Publish a single-line `name=value` output.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or value would break the line format, or
    /// if the output file cannot be written.
    pub fn set(&self, name: &str, value: &str) -> Result<()> {
        if name.is_empty() || name.contains(['=', '\n', '\r']) {
            return Err(Error::output(format!("invalid output name {name:?}"), None));
        }
        if value.contains(['\n', '\r']) {
            return Err(Error::output(
                format!("output {name} must be a single line"),
                None,
            ));
        }

        let line = format!("{name}={value}");
        match self {
            Self::File(path) => append_line(path, &line)?,
            Self::Stdout => println!("{line}"),
        }
        tracing::info!(name, value, destination = ?self, "Published step output");
        Ok(())
    }
}

fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::output(format!("cannot open {}", path.display()), Some(e)))?;
    writeln!(file, "{line}")
        .map_err(|e| Error::output(format!("cannot write {}", path.display()), Some(e)))
}

/// Workflow command annotations (`::error ...::message`).
pub mod annotation {
    /// Render an error annotation attached to `file`.
    #[must_use]
    pub fn error(file: &str, message: &str) -> String {
        format!(
            "::error file={}::{}",
            escape_property(file),
            escape_data(message)
        )
    }

    fn escape_data(value: &str) -> String {
        value
            .replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A")
    }

    fn escape_property(value: &str) -> String {
        escape_data(value).replace(':', "%3A").replace(',', "%2C")
    }
}
