//! Pull request event context from the GitHub Actions environment.
//!
//! Actions exposes the triggering event through `GITHUB_*` variables and a
//! JSON payload at `GITHUB_EVENT_PATH`. Only the fields the gate needs are
//! deserialized; everything else in the payload is ignored.

use prnotes_gate::{Error, GateConfig, PrNumber, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

const PULL_REQUEST_EVENTS: [&str; 2] = ["pull_request", "pull_request_target"];

/// The parts of a pull request event that the gate consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestContext {
    /// The event that triggered the workflow (e.g., "`pull_request`").
    pub event_name: String,
    /// The event activity type (e.g., "opened", "synchronize").
    pub action: Option<String>,
    /// The workflow ref (e.g., "refs/pull/42/merge").
    pub ref_name: String,
    /// The pull request head branch (e.g., "feature-login").
    pub head_ref: Option<String>,
    /// Full name of the repository holding the head branch.
    pub head_repository: Option<String>,
    /// The pull request number.
    pub pr_number: Option<PrNumber>,
}

#[derive(Debug, Default, Deserialize)]
struct EventPayload {
    action: Option<String>,
    number: Option<u64>,
    pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: Option<u64>,
    head: Option<HeadPayload>,
}

#[derive(Debug, Deserialize)]
struct HeadPayload {
    #[serde(rename = "ref")]
    git_ref: Option<String>,
    repo: Option<RepoPayload>,
}

#[derive(Debug, Deserialize)]
struct RepoPayload {
    full_name: Option<String>,
}

impl PullRequestContext {
    /// Read the context from the GitHub Actions environment.
    ///
    /// Returns `Ok(None)` outside GitHub Actions.
    ///
    /// # Errors
    ///
    /// Returns an error if `GITHUB_EVENT_PATH` names a file that cannot be
    /// read or parsed.
    pub fn detect() -> Result<Option<Self>> {
        if std::env::var("GITHUB_ACTIONS").ok().as_deref() != Some("true") {
            return Ok(None);
        }

        let event_name = std::env::var("GITHUB_EVENT_NAME").unwrap_or_default();
        let ref_name = std::env::var("GITHUB_REF").unwrap_or_default();

        let mut context = match non_empty_var("GITHUB_EVENT_PATH") {
            Some(path) => Self::from_event_file(event_name, ref_name, Path::new(&path))?,
            None => Self {
                pr_number: parse_pr_number(&ref_name),
                event_name,
                ref_name,
                ..Self::default()
            },
        };

        if context.head_ref.is_none() {
            context.head_ref = non_empty_var("GITHUB_HEAD_REF");
        }

        tracing::debug!(context = %context, "Detected GitHub Actions context");
        Ok(Some(context))
    }

    /// Build a context from an event payload file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_event_file(
        event_name: impl Into<String>,
        ref_name: impl Into<String>,
        path: &Path,
    ) -> Result<Self> {
        let payload = std::fs::read_to_string(path).map_err(|e| {
            Error::context(format!("failed to read event payload {}: {e}", path.display()))
        })?;
        Self::from_payload(event_name, ref_name, &payload)
    }

    /// Build a context from the JSON event payload.
    ///
    /// The PR number comes from the payload and falls back to the
    /// `refs/pull/<n>/merge` shape of `ref_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if `payload` is not valid JSON.
    pub fn from_payload(
        event_name: impl Into<String>,
        ref_name: impl Into<String>,
        payload: &str,
    ) -> Result<Self> {
        let ref_name = ref_name.into();
        let event: EventPayload = serde_json::from_str(payload)?;

        let (pr_from_payload, head) = match event.pull_request {
            Some(pr) => (pr.number, pr.head),
            None => (None, None),
        };
        let (head_ref, head_repository) = match head {
            Some(head) => (head.git_ref, head.repo.and_then(|r| r.full_name)),
            None => (None, None),
        };

        let pr_number = pr_from_payload
            .or(event.number)
            .filter(|n| *n > 0)
            .map(PrNumber::new)
            .or_else(|| parse_pr_number(&ref_name));

        Ok(Self {
            event_name: event_name.into(),
            action: event.action,
            ref_name,
            head_ref: head_ref.filter(|r| !r.is_empty()),
            head_repository,
            pr_number,
        })
    }

    /// The ref to classify: the PR head branch when known, else the
    /// workflow ref.
    #[must_use]
    pub fn branch_ref(&self) -> &str {
        self.head_ref.as_deref().unwrap_or(&self.ref_name)
    }

    /// Whether this is a pull request event with an action that runs the gate.
    #[must_use]
    pub fn is_qualifying(&self, config: &GateConfig) -> bool {
        PULL_REQUEST_EVENTS.contains(&self.event_name.as_str())
            && self
                .action
                .as_deref()
                .is_some_and(|action| config.accepts_action(action))
    }
}

impl fmt::Display for PullRequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} on {}",
            self.event_name,
            self.action.as_deref().unwrap_or("-"),
            self.branch_ref()
        )?;
        if let Some(pr) = self.pr_number {
            write!(f, " (#{pr})")?;
        }
        Ok(())
    }
}

/// Extract the PR number from a ref such as `refs/pull/123/merge`.
#[must_use]
pub fn parse_pr_number(github_ref: &str) -> Option<PrNumber> {
    github_ref
        .strip_prefix("refs/pull/")?
        .split('/')
        .next()?
        .parse()
        .ok()
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
