//! Release-notes gate for pull requests.
//!
//! Pull requests from development branches must reference themselves in
//! the project's release notes. This crate holds the pieces that do not
//! depend on a CI provider:
//!
//! - [`refs`] - classify a ref as main, release tag, dependency update or
//!   development branch
//! - [`release_notes`] - look for the ``:pr:`<number>` `` marker
//! - [`outcome`] - the combined classify-then-check flow
//! - [`config`] - `prnotes.toml` settings
//! - [`error`] - diagnostics for everything above
//!
//! # Example
//!
//! ```rust,ignore
//! use prnotes_gate::{evaluate, PrNumber};
//! use std::path::Path;
//!
//! let outcome = evaluate(
//!     "refs/heads/feature-login",
//!     Some(PrNumber::new(42)),
//!     Path::new("docs/source/release_notes.rst"),
//! )?;
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod outcome;
pub mod refs;
pub mod release_notes;

pub use config::GateConfig;
pub use error::{Error, Result};
pub use outcome::{GateOutcome, evaluate};
pub use refs::{RefKind, basename, classify, format_flag, is_development};
pub use release_notes::{MarkerMatch, PrNumber, check_release_notes, find_marker, marker};
