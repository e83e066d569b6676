use prnotes_gate::{Error, GateConfig, Result, classify, format_flag};
use prnotes_github::{PullRequestContext, StepOutput};
use tracing::instrument;

/// The explicit ref, or the pull request head ref under GitHub Actions.
pub fn resolve_ref(git_ref: Option<&str>) -> Result<String> {
    if let Some(git_ref) = git_ref {
        return Ok(git_ref.to_string());
    }
    PullRequestContext::detect()?
        .map(|ctx| ctx.branch_ref().to_string())
        .ok_or_else(|| Error::context("no ref given and not running in GitHub Actions"))
}

#[instrument(skip(config))]
pub fn execute(
    git_ref: Option<&str>,
    github_output: bool,
    output_name: Option<&str>,
    config: &GateConfig,
) -> Result<()> {
    let git_ref = resolve_ref(git_ref)?;
    let kind = classify(&git_ref);
    let flag = format_flag(kind.is_development());
    tracing::info!(git_ref = %git_ref, %kind, flag, "Classified branch");

    if github_output {
        let name = output_name.unwrap_or(&config.output_name);
        StepOutput::detect().set(name, flag)?;
    } else {
        println!("{flag}");
    }
    Ok(())
}
