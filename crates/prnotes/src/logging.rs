//! Log setup for the prnotes CLI.
//!
//! Logs always go to stderr. Stdout carries only command output: flags,
//! step outputs and workflow commands.

use std::io;
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Multi-line, human-readable
    Pretty,
    /// One line per event
    Compact,
    /// Newline-delimited JSON
    Json,
}

/// Minimum level for prnotes' own crates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Everything, including per-step tracing
    Trace,
    /// Classification and config decisions
    Debug,
    /// Outcomes and published outputs
    Info,
    /// Missing notes and skipped checks (default)
    Warn,
    /// Errors only
    Error,
}

impl LogLevel {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

const CRATES: [&str; 3] = ["prnotes", "prnotes_gate", "prnotes_github"];

static RUN_ID: OnceLock<Uuid> = OnceLock::new();

/// Identifier attached to every command span of this process.
pub fn run_id() -> Uuid {
    *RUN_ID.get_or_init(Uuid::new_v4)
}

/// Filter directives scoping `level` to prnotes' crates, so dependency
/// noise stays out of CI logs.
fn directives(level: LogLevel) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={}", level.as_str()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber. `RUST_LOG`, when set, replaces `level`.
pub fn init(format: LogFormat, level: LogLevel) -> miette::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directives(level)))
        .map_err(|e| miette::miette!("Invalid log filter: {e}"))?;

    let registry = tracing_subscriber::registry().with(filter);
    let layer = fmt::layer().with_writer(io::stderr);
    match format {
        LogFormat::Pretty => registry.with(layer.pretty()).init(),
        LogFormat::Compact => registry.with(layer.compact().with_target(false)).init(),
        LogFormat::Json => registry.with(layer.json().with_current_span(true)).init(),
    }

    tracing::debug!(run_id = %run_id(), ?format, "Logging initialized");
    Ok(())
}

/// Span wrapping one command invocation.
pub fn command_span(command: &str) -> tracing::Span {
    tracing::info_span!("command", command, run_id = %run_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_scope_every_crate() {
        assert_eq!(
            directives(LogLevel::Info),
            "prnotes=info,prnotes_gate=info,prnotes_github=info"
        );
        assert!(directives(LogLevel::Trace).starts_with("prnotes=trace,"));
    }

    #[test]
    fn test_directives_parse_as_filter() {
        for level in [LogLevel::Trace, LogLevel::Warn, LogLevel::Error] {
            assert!(EnvFilter::try_new(directives(level)).is_ok());
        }
    }

    #[test]
    fn test_run_id_is_stable() {
        assert_eq!(run_id(), run_id());
    }
}
