//! The classify-then-check flow shared by every entry point.

use crate::error::{Error, Result};
use crate::refs::{self, RefKind};
use crate::release_notes::{self, MarkerMatch, PrNumber};
use std::fmt;
use std::path::Path;

/// Result of running the gate for one pull request event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// The ref is not a development branch, so no release note is needed.
    NotRequired {
        /// How the ref was classified
        kind: RefKind,
    },
    /// The release note is present.
    Passed {
        /// Where the marker was found
        found: MarkerMatch,
    },
}

impl GateOutcome {
    /// Whether the ref was classified as a development branch.
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }
}

impl fmt::Display for GateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRequired { kind } => write!(f, "release note not required ({kind} ref)"),
            Self::Passed { found } => write!(f, "release note found on line {}", found.line_number),
        }
    }
}

/// Classify `git_ref` and, for development branches only, check the
/// release notes for `pr`.
///
/// # Errors
///
/// Returns [`Error::Context`] when a development branch has no pull request
/// number, and the errors of [`release_notes::check_release_notes`].
pub fn evaluate(
    git_ref: &str,
    pr: Option<PrNumber>,
    release_notes_path: &Path,
) -> Result<GateOutcome> {
    let kind = refs::classify(git_ref);
    if !kind.is_development() {
        tracing::info!(git_ref, %kind, "Skipping release notes check");
        return Ok(GateOutcome::NotRequired { kind });
    }

    let pr = pr.ok_or_else(|| {
        Error::context(format!(
            "{git_ref:?} is a development branch but no pull request number is available"
        ))
    })?;
    let found = release_notes::check_release_notes(release_notes_path, pr)?;
    Ok(GateOutcome::Passed { found })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn notes_dir(contents: &str) -> (TempDir, std::path::PathBuf) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("release_notes.rst");
        std::fs::write(&path, contents).unwrap();
        (tmp, path)
    }

    #[test]
    fn test_development_branch_with_note_passes() {
        let (_tmp, path) = notes_dir("* Added thing (:pr:`42`)\n");
        let outcome = evaluate("refs/heads/feature-x", Some(PrNumber::new(42)), &path).unwrap();
        assert!(outcome.is_development());
        assert!(matches!(outcome, GateOutcome::Passed { found } if found.line_number == 1));
    }

    #[test]
    fn test_development_branch_without_note_fails() {
        let (_tmp, path) = notes_dir("* Added thing (:pr:`41`)\n");
        let err = evaluate("feature-x", Some(PrNumber::new(42)), &path).unwrap_err();
        assert!(err.is_missing_release_note());
    }

    #[test]
    fn test_non_development_ref_never_reads_notes() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does-not-exist.rst");

        for git_ref in ["refs/heads/main", "refs/tags/v1.2.3", "dep-update-a1b2c3d"] {
            let outcome = evaluate(git_ref, Some(PrNumber::new(1)), &missing).unwrap();
            assert!(matches!(outcome, GateOutcome::NotRequired { .. }), "{git_ref}");
        }
    }

    #[test]
    fn test_non_development_ref_needs_no_pr_number() {
        let outcome = evaluate("main", None, Path::new("unused.rst")).unwrap();
        assert_eq!(outcome, GateOutcome::NotRequired { kind: RefKind::Main });
    }

    #[test]
    fn test_development_branch_without_pr_number() {
        let err = evaluate("feature-x", None, Path::new("unused.rst")).unwrap_err();
        assert!(matches!(err, Error::Context { .. }));
    }

    #[test]
    fn test_outcome_display() {
        let outcome = GateOutcome::NotRequired {
            kind: RefKind::VersionTag,
        };
        assert_eq!(outcome.to_string(), "release note not required (version-tag ref)");
    }
}
