//! GitHub Actions Workflow Schema Types
//!
//! Defines the subset of the workflow syntax used by the release-notes
//! workflow. Maps are `IndexMap`s so rendered YAML keeps insertion order.
//! See: <https://docs.github.com/en/actions/using-workflows/workflow-syntax-for-github-actions>

use indexmap::IndexMap;
use serde::Serialize;

/// A GitHub Actions workflow definition.
#[derive(Debug, Clone, Serialize)]
pub struct Workflow {
    /// Workflow name displayed in GitHub UI
    pub name: String,

    /// Trigger configuration
    #[serde(rename = "on")]
    pub on: WorkflowTriggers,

    /// Default permissions for `GITHUB_TOKEN`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,

    /// Job definitions (order preserved via `IndexMap`)
    pub jobs: IndexMap<String, Job>,
}

/// Workflow trigger configuration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkflowTriggers {
    /// Trigger on pull request events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestTrigger>,
}

/// Pull request event trigger configuration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PullRequestTrigger {
    /// Activity types to trigger on (e.g., "opened", "synchronize")
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
}

/// `GITHUB_TOKEN` permissions configuration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Permissions {
    /// Repository contents permission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<PermissionLevel>,
}

/// Permission level for `GITHUB_TOKEN` scopes.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    /// Read-only access
    Read,
}

/// A job in a GitHub Actions workflow.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Job {
    /// Job display name (shown in GitHub UI)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Runner label (e.g., "ubuntu-latest")
    pub runs_on: String,

    /// Job timeout in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_minutes: Option<u32>,

    /// Job steps (executed sequentially)
    pub steps: Vec<Step>,
}

/// A step in a job.
///
/// Steps can either `uses` an action or `run` a shell command.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Step {
    /// Step display name (shown in GitHub UI)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Unique identifier for referencing step outputs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Conditional execution expression
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub if_condition: Option<String>,

    /// Action to use (e.g., "actions/checkout@v4")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses: Option<String>,

    /// Shell command(s) to run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run: Option<String>,

    /// Action inputs (for `uses` steps)
    #[serde(rename = "with", skip_serializing_if = "IndexMap::is_empty")]
    pub with_inputs: IndexMap<String, serde_yaml::Value>,
}

impl Step {
    /// Create a step that uses an action
    pub fn uses(action: impl Into<String>) -> Self {
        Self {
            uses: Some(action.into()),
            ..Default::default()
        }
    }

    /// Create a step that runs a shell command
    pub fn run(command: impl Into<String>) -> Self {
        Self {
            run: Some(command.into()),
            ..Default::default()
        }
    }

    /// Set the step name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the step ID
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a with input
    #[must_use]
    pub fn with_input(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_yaml::Value>,
    ) -> Self {
        self.with_inputs.insert(key.into(), value.into());
        self
    }

    /// Set a condition
    #[must_use]
    pub fn with_if(mut self, condition: impl Into<String>) -> Self {
        self.if_condition = Some(condition.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_builder() {
        let step = Step::uses("actions/checkout@v4")
            .with_name("Checkout")
            .with_input("fetch-depth", serde_yaml::Value::Number(2.into()));

        assert_eq!(step.name, Some("Checkout".to_string()));
        assert_eq!(step.uses, Some("actions/checkout@v4".to_string()));
        assert!(step.with_inputs.contains_key("fetch-depth"));
    }

    #[test]
    fn test_workflow_serialization() {
        let workflow = Workflow {
            name: "Release Notes".to_string(),
            on: WorkflowTriggers {
                pull_request: Some(PullRequestTrigger {
                    types: vec!["opened".to_string()],
                }),
            },
            permissions: Some(Permissions {
                contents: Some(PermissionLevel::Read),
            }),
            jobs: IndexMap::new(),
        };

        let yaml = serde_yaml::to_string(&workflow).unwrap();
        assert!(yaml.contains("name: Release Notes"));
        assert!(yaml.contains("pull_request:"));
        assert!(yaml.contains("- opened"));
        assert!(yaml.contains("contents: read"));
    }

    #[test]
    fn test_job_serialization() {
        let job = Job {
            name: Some("Test".to_string()),
            runs_on: "ubuntu-latest".to_string(),
            timeout_minutes: None,
            steps: vec![Step::run("true").with_if("always()")],
        };

        let yaml = serde_yaml::to_string(&job).unwrap();
        assert!(yaml.contains("runs-on: ubuntu-latest"));
        assert!(yaml.contains("if: always()"));
        assert!(!yaml.contains("timeout-minutes"));
    }
}
