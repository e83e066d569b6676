//! GitHub Actions integration for prnotes.
//!
//! This crate provides:
//! - [`PullRequestContext`] for reading the triggering pull request event
//! - [`StepOutput`] and [`annotation`] for reporting back to the workflow
//! - [`workflow::ReleaseNotesWorkflowBuilder`] for generating the workflow file

#![warn(missing_docs)]

pub mod context;
pub mod output;
pub mod workflow;

// Re-exports for convenience
pub use context::PullRequestContext;
pub use output::{StepOutput, annotation};
pub use workflow::ReleaseNotesWorkflowBuilder;
