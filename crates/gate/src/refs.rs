//! Branch classification.
//!
//! A ref is a *development branch* unless its basename is the main line
//! (`main`), a release tag (`v1.2.3`), or an automated dependency-update
//! branch (`dep-update-` followed by a seven character short SHA).
//! Unrecognized shapes, including empty refs, are development branches.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

const MAIN_BRANCH: &str = "main";

#[allow(clippy::expect_used)] // literal pattern
static VERSION_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v[0-9]+\.[0-9]+\.[0-9]+$").expect("valid version tag pattern"));

#[allow(clippy::expect_used)] // literal pattern
static DEPENDENCY_UPDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^dep-update-[a-f0-9]{7}$").expect("valid dep-update pattern"));

/// The recognized shapes of a ref basename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    /// The main line.
    Main,
    /// A release tag of the form `vMAJOR.MINOR.PATCH`.
    VersionTag,
    /// A dependency-update branch, `dep-update-<7 hex chars>`.
    DependencyUpdate,
    /// Anything else.
    Development,
}

impl RefKind {
    /// Whether pull requests from this ref must carry a release note.
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::VersionTag => write!(f, "version-tag"),
            Self::DependencyUpdate => write!(f, "dependency-update"),
            Self::Development => write!(f, "development"),
        }
    }
}

/// Final `/`-delimited segment of a ref.
///
/// `refs/heads/feature-x` yields `feature-x`; a ref without a `/` is its own
/// basename and a trailing `/` yields an empty basename.
#[must_use]
pub fn basename(git_ref: &str) -> &str {
    git_ref.rsplit('/').next().unwrap_or(git_ref)
}

/// Classify a ref by its basename.
#[must_use]
pub fn classify(git_ref: &str) -> RefKind {
    let name = basename(git_ref);
    let kind = if name == MAIN_BRANCH {
        RefKind::Main
    } else if VERSION_TAG.is_match(name) {
        RefKind::VersionTag
    } else if DEPENDENCY_UPDATE.is_match(name) {
        RefKind::DependencyUpdate
    } else {
        RefKind::Development
    };
    tracing::debug!(git_ref, basename = name, kind = %kind, "Classified ref");
    kind
}

/// Shorthand for `classify(git_ref).is_development()`.
#[must_use]
pub fn is_development(git_ref: &str) -> bool {
    classify(git_ref).is_development()
}

/// Render a flag the way the workflow condition compares it.
#[must_use]
pub const fn format_flag(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
