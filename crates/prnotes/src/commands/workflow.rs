use prnotes_gate::{Error, GateConfig, Result};
use prnotes_github::workflow::{ReleaseNotesWorkflowBuilder, render};
use std::path::Path;
use tracing::instrument;

#[instrument(skip(config))]
pub fn execute(
    runner: &str,
    binary: &str,
    install: bool,
    output: Option<&Path>,
    config: GateConfig,
) -> Result<()> {
    let builder = ReleaseNotesWorkflowBuilder::new(config)
        .with_runner(runner)
        .with_binary(binary);
    let builder = if install {
        builder
    } else {
        builder.with_install_command(None)
    };
    let yaml = render(&builder.build())?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &yaml).map_err(|e| {
                Error::workflow(format!("cannot write {}: {e}", path.display()))
            })?;
            tracing::info!(path = %path.display(), "Wrote workflow");
        }
        None => print!("{yaml}"),
    }
    Ok(())
}
