pub mod check;
pub mod classify;
pub mod gate;
pub mod workflow;

use prnotes_gate::{GateConfig, PrNumber, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum Command {
    Classify {
        git_ref: Option<String>,
        github_output: bool,
        output_name: Option<String>,
    },
    Check {
        pr: PrNumber,
        release_notes: Option<PathBuf>,
    },
    Gate {
        git_ref: Option<String>,
        pr: Option<PrNumber>,
        release_notes: Option<PathBuf>,
        output_name: Option<String>,
    },
    Workflow {
        runner: String,
        binary: String,
        install: bool,
        output: Option<PathBuf>,
    },
}

impl Command {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Classify { .. } => "classify",
            Self::Check { .. } => "check",
            Self::Gate { .. } => "gate",
            Self::Workflow { .. } => "workflow",
        }
    }
}

/// Load `--config` when given, else `./prnotes.toml` when present.
pub fn load_config(path: Option<&Path>) -> Result<GateConfig> {
    match path {
        Some(path) => GateConfig::load(path),
        None => GateConfig::discover("."),
    }
}

pub fn execute(command: Command, config: GateConfig) -> Result<()> {
    match command {
        Command::Classify {
            git_ref,
            github_output,
            output_name,
        } => classify::execute(
            git_ref.as_deref(),
            github_output,
            output_name.as_deref(),
            &config,
        ),
        Command::Check { pr, release_notes } => {
            check::execute(pr, release_notes.as_deref(), &config)
        }
        Command::Gate {
            git_ref,
            pr,
            release_notes,
            output_name,
        } => gate::execute(
            git_ref.as_deref(),
            pr,
            release_notes.as_deref(),
            output_name.as_deref(),
            &config,
        ),
        Command::Workflow {
            runner,
            binary,
            install,
            output,
        } => workflow::execute(&runner, &binary, install, output.as_deref(), config),
    }
}
