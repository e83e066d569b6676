//! GitHub Actions Workflow Generator
//!
//! Generates the committed workflow file that runs the release-notes gate.
//!
//! # Example
//!
//! ```ignore
//! use prnotes_github::workflow::{ReleaseNotesWorkflowBuilder, WORKFLOW_PATH, render};
//! use prnotes_gate::GateConfig;
//!
//! let workflow = ReleaseNotesWorkflowBuilder::new(GateConfig::default())
//!     .with_runner("ubuntu-latest")
//!     .build();
//! std::fs::write(WORKFLOW_PATH, render(&workflow)?)?;
//! ```

pub mod emitter;
pub mod schema;

pub use emitter::{ReleaseNotesWorkflowBuilder, WORKFLOW_PATH, render};
pub use schema::*;
