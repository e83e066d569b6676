//! Release-notes presence check.
//!
//! Each pull request that needs a release note references itself in the
//! release-notes file with a Sphinx role such as ``:pr:`42` ``. The check
//! passes when that marker appears anywhere in the file.

use crate::error::{Error, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A pull request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrNumber(u64);

impl PrNumber {
    /// Wrap a raw pull request number.
    #[must_use]
    pub const fn new(number: u64) -> Self {
        Self(number)
    }

    /// The raw number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PrNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        match digits.parse::<u64>() {
            Ok(n) if n > 0 => Ok(Self(n)),
            _ => Err(Error::invalid_pr_number(s)),
        }
    }
}

impl From<u64> for PrNumber {
    fn from(number: u64) -> Self {
        Self(number)
    }
}

/// Where the marker was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatch {
    /// 1-based line number.
    pub line_number: usize,
    /// The full matching line, without its line terminator.
    pub line: String,
}

/// The marker text for a pull request, e.g. ``:pr:`42` ``.
#[must_use]
pub fn marker(pr: PrNumber) -> String {
    format!(":pr:`{pr}`")
}

/// First line of `contents` containing the marker for `pr`.
#[must_use]
pub fn find_marker(contents: &str, pr: PrNumber) -> Option<MarkerMatch> {
    let needle = marker(pr);
    contents
        .lines()
        .enumerate()
        .find(|(_, line)| line.contains(&needle))
        .map(|(idx, line)| MarkerMatch {
            line_number: idx + 1,
            line: line.to_string(),
        })
}

/// Check that the release-notes file at `path` references `pr`.
///
/// # Errors
///
/// Returns [`Error::ReleaseNotesIo`] when the file cannot be read and
/// [`Error::MissingReleaseNote`] when it has no marker for `pr`.
pub fn check_release_notes(path: &Path, pr: PrNumber) -> Result<MarkerMatch> {
    let bytes = std::fs::read(path).map_err(|e| Error::release_notes_io(path, e))?;
    let contents = String::from_utf8_lossy(&bytes);

    match find_marker(&contents, pr) {
        Some(found) => {
            tracing::info!(
                path = %path.display(),
                pr = pr.get(),
                line = found.line_number,
                "Release note found"
            );
            Ok(found)
        }
        None => {
            tracing::warn!(path = %path.display(), pr = pr.get(), "Release note missing");
            Err(Error::missing_release_note(path, pr.get(), marker(pr)))
        }
    }
}
