use prnotes_gate::{Error, GateConfig, PrNumber, Result, check_release_notes};
use prnotes_github::annotation;
use std::path::Path;
use tracing::instrument;

#[instrument(skip(config))]
pub fn execute(pr: PrNumber, release_notes: Option<&Path>, config: &GateConfig) -> Result<()> {
    let path = release_notes.unwrap_or(&config.release_notes);
    match check_release_notes(path, pr) {
        Ok(found) => {
            println!(
                "Release note for #{pr} found at {}:{}",
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

/// Surface a missing note as an error annotation on the release-notes file.
pub fn report_missing(err: &Error, path: &Path) {
    if err.is_missing_release_note() && running_in_actions() {
        println!("{}", annotation::error(&path.to_string_lossy(), &err.to_string()));
    }
}

fn running_in_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}
