use crate::commands::Command;
use crate::logging::{LogFormat, LogLevel};
use clap::{Parser, Subcommand};
use prnotes_gate::PrNumber;
use prnotes_github::workflow::WORKFLOW_PATH;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "prnotes")]
#[command(about = "Require a release-notes entry on pull requests from development branches")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'l',
        long,
        global = true,
        help = "Set logging level",
        default_value = "warn",
        value_enum
    )]
    pub level: LogLevel,

    #[arg(
        long,
        global = true,
        help = "Log output format",
        default_value = "compact",
        value_enum
    )]
    pub log_format: LogFormat,

    #[arg(long, global = true, help = "Output logs in JSON format")]
    pub json: bool,

    #[arg(
        long,
        global = true,
        env = "PRNOTES_CONFIG",
        help = "Path to a prnotes.toml (default: ./prnotes.toml when present)"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Classify a ref and print True for development branches")]
    Classify {
        #[arg(
            value_name = "REF",
            help = "Ref to classify (default: pull request head ref from GitHub Actions)"
        )]
        git_ref: Option<String>,
        #[arg(long, help = "Publish the result as a step output via GITHUB_OUTPUT")]
        github_output: bool,
        #[arg(long, env = "PRNOTES_OUTPUT_NAME", help = "Step output name")]
        output_name: Option<String>,
    },
    #[command(about = "Check that the release notes reference a pull request")]
    Check {
        #[arg(long, env = "PRNOTES_PR", help = "Pull request number")]
        pr: PrNumber,
        #[arg(long, env = "PRNOTES_RELEASE_NOTES", help = "Release notes file")]
        release_notes: Option<PathBuf>,
    },
    #[command(about = "Classify the pull request branch and check release notes when required")]
    Gate {
        #[arg(long = "ref", value_name = "REF", help = "Ref to classify")]
        git_ref: Option<String>,
        #[arg(long, env = "PRNOTES_PR", help = "Pull request number")]
        pr: Option<PrNumber>,
        #[arg(long, env = "PRNOTES_RELEASE_NOTES", help = "Release notes file")]
        release_notes: Option<PathBuf>,
        #[arg(long, env = "PRNOTES_OUTPUT_NAME", help = "Step output name")]
        output_name: Option<String>,
    },
    #[command(about = "Print the GitHub Actions workflow that runs the gate")]
    Workflow {
        #[arg(long, help = "Runner label", default_value = "ubuntu-latest")]
        runner: String,
        #[arg(long, help = "Command used to invoke prnotes", default_value = "prnotes")]
        binary: String,
        #[arg(long, help = "Omit the cargo install step")]
        no_install: bool,
        #[arg(
            short,
            long,
            num_args = 0..=1,
            default_missing_value = WORKFLOW_PATH,
            help = "Write the workflow to a file instead of stdout (default path when no value)"
        )]
        output: Option<PathBuf>,
    },
}

impl From<Commands> for Command {
    fn from(cmd: Commands) -> Self {
        match cmd {
            Commands::Classify {
                git_ref,
                github_output,
                output_name,
            } => Self::Classify {
                git_ref,
                github_output,
                output_name,
            },
            Commands::Check { pr, release_notes } => Self::Check { pr, release_notes },
            Commands::Gate {
                git_ref,
                pr,
                release_notes,
                output_name,
            } => Self::Gate {
                git_ref,
                pr,
                release_notes,
                output_name,
            },
            Commands::Workflow {
                runner,
                binary,
                no_install,
                output,
            } => Self::Workflow {
                runner,
                binary,
                install: !no_install,
                output,
            },
        }
    }
}

impl Cli {
    /// Effective log format; `--json` wins over `--log-format`.
    pub fn effective_log_format(&self) -> LogFormat {
        if self.json {
            LogFormat::Json
        } else {
            self.log_format
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::try_parse_from(["prnotes", "classify", "main"]).unwrap();

        assert_eq!(cli.level, LogLevel::Warn);
        assert_eq!(cli.effective_log_format(), LogFormat::Compact);
        assert!(!cli.json);
        assert!(matches!(
            cli.command,
            Commands::Classify { git_ref: Some(ref r), github_output: false, .. } if r == "main"
        ));
    }

    #[test]
    fn test_cli_log_level_parsing() {
        let cli = Cli::try_parse_from(["prnotes", "--level", "debug", "workflow"]).unwrap();
        assert_eq!(cli.level, LogLevel::Debug);

        let cli = Cli::try_parse_from(["prnotes", "workflow", "-l", "error"]).unwrap();
        assert_eq!(cli.level, LogLevel::Error);
    }

    #[test]
    fn test_json_flag_overrides_format() {
        let cli = Cli::try_parse_from(["prnotes", "--log-format", "pretty", "--json", "workflow"])
            .unwrap();
        assert_eq!(cli.effective_log_format(), LogFormat::Json);
    }

    #[test]
    fn test_check_parses_pr_number() {
        let cli = Cli::try_parse_from([
            "prnotes",
            "check",
            "--pr",
            "42",
            "--release-notes",
            "CHANGES.rst",
        ])
        .unwrap();

        let command: Command = cli.command.into();
        match command {
            Command::Check { pr, release_notes } => {
                assert_eq!(pr, PrNumber::new(42));
                assert_eq!(release_notes, Some(PathBuf::from("CHANGES.rst")));
            }
            other => panic!("Expected Check command, got {other:?}"),
        }
    }

    #[test]
    fn test_check_rejects_invalid_pr() {
        assert!(Cli::try_parse_from(["prnotes", "check", "--pr", "abc"]).is_err());
        assert!(Cli::try_parse_from(["prnotes", "check", "--pr", "0"]).is_err());
    }

    #[test]
    fn test_gate_ref_flag() {
        let cli = Cli::try_parse_from(["prnotes", "gate", "--ref", "refs/heads/x", "--pr", "3"])
            .unwrap();
        match Command::from(cli.command) {
            Command::Gate { git_ref, pr, .. } => {
                assert_eq!(git_ref.as_deref(), Some("refs/heads/x"));
                assert_eq!(pr, Some(PrNumber::new(3)));
            }
            other => panic!("Expected Gate command, got {other:?}"),
        }
    }

    #[test]
    fn test_workflow_no_install() {
        let cli = Cli::try_parse_from(["prnotes", "workflow", "--no-install"]).unwrap();
        match Command::from(cli.command) {
            Command::Workflow {
                install, runner, ..
            } => {
                assert!(!install);
                assert_eq!(runner, "ubuntu-latest");
            }
            other => panic!("Expected Workflow command, got {other:?}"),
        }
    }

    #[test]
    fn test_workflow_output_default_path() {
        let cli = Cli::try_parse_from(["prnotes", "workflow", "--output"]).unwrap();
        match Command::from(cli.command) {
            Command::Workflow { output, .. } => {
                assert_eq!(output, Some(PathBuf::from(WORKFLOW_PATH)));
            }
            other => panic!("Expected Workflow command, got {other:?}"),
        }

        let cli = Cli::try_parse_from(["prnotes", "workflow"]).unwrap();
        assert!(matches!(
            Command::from(cli.command),
            Command::Workflow { output: None, .. }
        ));
    }

    #[test]
    fn test_missing_subcommand() {
        assert!(Cli::try_parse_from(["prnotes"]).is_err());
    }

    #[test]
    fn test_help_flag() {
        let err = Cli::try_parse_from(["prnotes", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
