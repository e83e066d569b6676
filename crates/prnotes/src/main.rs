mod cli;
mod commands;
mod logging;

use crate::commands::Command;
use std::process::ExitCode;

fn main() -> ExitCode {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {panic_info}");
        eprintln!("Internal error occurred. Run with RUST_LOG=debug for more information.");
    }));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> miette::Result<()> {
    let cli = cli::parse();

    logging::init(cli.effective_log_format(), cli.level)?;

    let config = commands::load_config(cli.config.as_deref())?;
    let command: Command = cli.command.into();

    let span = logging::command_span(command.name());
    let _guard = span.enter();

    commands::execute(command, config)?;
    tracing::debug!("Command completed");
    Ok(())
}
