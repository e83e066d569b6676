//! Release-notes workflow generation.
//!
//! Builds the workflow that checks out the pull request head, classifies
//! its branch into a step output, and runs the release-notes check only
//! when that output is `True`.

use super::schema::{
    Job, PermissionLevel, Permissions, PullRequestTrigger, Step, Workflow, WorkflowTriggers,
};
use indexmap::IndexMap;
use prnotes_gate::{Error, GateConfig, Result};

/// Where the workflow lives in a repository.
pub const WORKFLOW_PATH: &str = ".github/workflows/release_notes_updated.yaml";

const JOB_ID: &str = "release_notes_updated";
const CLASSIFY_STEP_ID: &str = "branch";

/// Builder for the release-notes workflow.
#[derive(Debug, Clone)]
pub struct ReleaseNotesWorkflowBuilder {
    config: GateConfig,
    runner: String,
    binary: String,
    install_command: Option<String>,
}

impl ReleaseNotesWorkflowBuilder {
    /// Create a builder for the given gate configuration.
    #[must_use]
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            runner: "ubuntu-latest".to_string(),
            binary: "prnotes".to_string(),
            install_command: Some("cargo install --locked prnotes".to_string()),
        }
    }

    /// Set the runner label.
    #[must_use]
    pub fn with_runner(mut self, runner: impl Into<String>) -> Self {
        self.runner = runner.into();
        self
    }

    /// Set how the workflow invokes the CLI (e.g., `./bin/prnotes`).
    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Set the install command, or `None` when the runner already has the CLI.
    #[must_use]
    pub fn with_install_command(mut self, command: Option<String>) -> Self {
        self.install_command = command;
        self
    }

    /// Build the workflow definition.
    #[must_use]
    pub fn build(&self) -> Workflow {
        let mut jobs = IndexMap::new();
        jobs.insert(JOB_ID.to_string(), self.build_job());

        Workflow {
            name: "Release Notes Updated".to_string(),
            on: WorkflowTriggers {
                pull_request: Some(PullRequestTrigger {
                    types: self.config.actions.clone(),
                }),
            },
            permissions: Some(Permissions {
                contents: Some(PermissionLevel::Read),
            }),
            jobs,
        }
    }

    fn build_job(&self) -> Job {
        let mut steps = vec![
            Step::uses("actions/checkout@v4")
                .with_name("Checkout repository")
                .with_input("ref", "${{ github.event.pull_request.head.ref }}")
                .with_input(
                    "repository",
                    "${{ github.event.pull_request.head.repo.full_name }}",
                ),
        ];

        if let Some(install) = &self.install_command {
            steps.push(Step::run(install.clone()).with_name("Install prnotes"));
        }

        steps.push(
            Step::run(format!(
                "{} classify --github-output --output-name {}",
                self.binary, self.config.output_name
            ))
            .with_name("Check if release notes need to be updated")
            .with_id(CLASSIFY_STEP_ID),
        );

        steps.push(
            Step::run(format!(
                "{} check --pr ${{{{ github.event.number }}}} --release-notes {}",
                self.binary,
                self.config.release_notes.display()
            ))
            .with_name("Check for development branch")
            .with_if(format!(
                "${{{{ steps.{CLASSIFY_STEP_ID}.outputs.{} == 'True' }}}}",
                self.config.output_name
            )),
        );

        Job {
            name: Some("release notes updated".to_string()),
            runs_on: self.runner.clone(),
            timeout_minutes: Some(10),
            steps,
        }
    }
}

/// Render a workflow as YAML.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render(workflow: &Workflow) -> Result<String> {
    serde_yaml::to_string(workflow).map_err(|e| Error::workflow(e.to_string()))
}
