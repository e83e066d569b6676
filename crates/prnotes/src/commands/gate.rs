use super::check::report_missing;
use prnotes_gate::{
    Error, GateConfig, GateOutcome, PrNumber, Result, evaluate, format_flag, is_development,
};
use prnotes_github::{PullRequestContext, StepOutput};
use std::path::Path;
use tracing::instrument;

#[instrument(skip(config))]
pub fn execute(
    git_ref: Option<&str>,
    pr: Option<PrNumber>,
    release_notes: Option<&Path>,
    output_name: Option<&str>,
    config: &GateConfig,
) -> Result<()> {
    // The event context is only needed for values the caller did not pass.
    let context = match git_ref {
        Some(git_ref) if pr.is_some() || !is_development(git_ref) => None,
        _ => PullRequestContext::detect()?,
    };

    if git_ref.is_none() {
        match &context {
            Some(ctx) if !ctx.is_qualifying(config) => {
                tracing::info!(context = %ctx, "Event does not run the release notes gate");
                println!("Skipped: {ctx} does not run the release notes gate");
                return Ok(());
            }
            Some(_) => {}
            None => {
                return Err(Error::context(
                    "no --ref given and not running in GitHub Actions",
                ));
            }
        }
    }

    let git_ref = git_ref
        .or_else(|| context.as_ref().map(PullRequestContext::branch_ref))
        .unwrap_or_default();
    let pr = pr.or_else(|| context.as_ref().and_then(|ctx| ctx.pr_number));

    let name = output_name.unwrap_or(&config.output_name);
    StepOutput::detect().set(name, format_flag(is_development(git_ref)))?;

    let path = release_notes.unwrap_or(&config.release_notes);
    match evaluate(git_ref, pr, path) {
        Ok(GateOutcome::NotRequired { kind }) => {
            println!("Release note not required for {kind} ref {git_ref}");
            Ok(())
        }
        Ok(GateOutcome::Passed { found }) => {
            println!(
                "Release note found at {}:{}",
                path.display(),
                found.line_number
            );
            Ok(())
        }
        Err(err) => {
            report_missing(&err, path);
            Err(err)
        }
    }
}
