//! Error types for the release-notes gate.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while classifying refs or checking release notes.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The release-notes file could not be read.
    #[error("Failed to read release notes at {}", path.display())]
    #[diagnostic(
        code(prnotes::release_notes::io),
        help("Check that the release notes path is correct and the file is readable")
    )]
    ReleaseNotesIo {
        /// The release-notes path
        path: PathBuf,
        /// The underlying source error
        #[source]
        source: std::io::Error,
    },

    /// The release-notes file has no entry for the pull request.
    #[error("Release notes at {} have no entry for pull request #{pr}", path.display())]
    #[diagnostic(
        code(prnotes::release_notes::missing),
        help("Add a release note entry containing {marker} and push again")
    )]
    MissingReleaseNote {
        /// The release-notes path
        path: PathBuf,
        /// The pull request number
        pr: u64,
        /// The marker that was searched for
        marker: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    #[diagnostic(code(prnotes::config), help("{help}"))]
    Config {
        /// The error message
        message: String,
        /// Help text for the user
        help: String,
    },

    /// A pull request number could not be parsed.
    #[error("Invalid pull request number: {value}")]
    #[diagnostic(
        code(prnotes::invalid_pr_number),
        help("Pull request numbers are positive integers such as 42")
    )]
    InvalidPrNumber {
        /// The rejected input
        value: String,
    },

    /// The CI event context is missing or malformed.
    #[error("Event context error: {message}")]
    #[diagnostic(
        code(prnotes::context),
        help("Run inside a GitHub Actions pull_request workflow or pass the values explicitly")
    )]
    Context {
        /// The error message
        message: String,
    },

    /// A step output could not be published.
    #[error("Failed to write step output: {message}")]
    #[diagnostic(code(prnotes::output))]
    Output {
        /// The error message
        message: String,
        /// The underlying source error
        #[source]
        source: Option<std::io::Error>,
    },

    /// The workflow definition could not be rendered.
    #[error("Failed to render workflow: {message}")]
    #[diagnostic(code(prnotes::workflow))]
    Workflow {
        /// The error message
        message: String,
    },

    /// Wrapped I/O error.
    #[error("I/O error: {0}")]
    #[diagnostic(code(prnotes::io))]
    Io(#[from] std::io::Error),

    /// Wrapped JSON error.
    #[error("JSON error: {0}")]
    #[diagnostic(code(prnotes::json))]
    Json(#[from] serde_json::Error),

    /// Wrapped TOML parsing error.
    #[error("TOML parse error: {0}")]
    #[diagnostic(code(prnotes::toml_parse))]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Create a new release-notes I/O error.
    #[must_use]
    pub fn release_notes_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReleaseNotesIo {
            path: path.into(),
            source,
        }
    }

    /// Create a new missing release note error.
    #[must_use]
    pub fn missing_release_note(
        path: impl Into<PathBuf>,
        pr: u64,
        marker: impl Into<String>,
    ) -> Self {
        Self::MissingReleaseNote {
            path: path.into(),
            pr,
            marker: marker.into(),
        }
    }

    /// Create a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: help.into(),
        }
    }

    /// Create a new invalid PR number error.
    #[must_use]
    pub fn invalid_pr_number(value: impl Into<String>) -> Self {
        Self::InvalidPrNumber {
            value: value.into(),
        }
    }

    /// Create a new event context error.
    #[must_use]
    pub fn context(message: impl Into<String>) -> Self {
        Self::Context {
            message: message.into(),
        }
    }

    /// Create a new step output error.
    #[must_use]
    pub fn output(message: impl Into<String>, source: Option<std::io::Error>) -> Self {
        Self::Output {
            message: message.into(),
            source,
        }
    }

    /// Create a new workflow rendering error.
    #[must_use]
    pub fn workflow(message: impl Into<String>) -> Self {
        Self::Workflow {
            message: message.into(),
        }
    }

    /// Whether this error means the gate ran and the release note was absent.
    #[must_use]
    pub const fn is_missing_release_note(&self) -> bool {
        matches!(self, Self::MissingReleaseNote { .. })
    }
}
