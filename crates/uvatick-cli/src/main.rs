mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;
use std::process::ExitCode;
use tracing::Instrument;
use uvatick_core::Settings;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    logging::init_tracing(cli.log_format);

    let span = logging::root_span(cli.command.name());
    async {
        let settings = Settings::load()?;
        tracing::debug!(environment = %settings.environment, "configuration loaded");

        let output = commands::run(&cli, &settings).await?;
        output::render(&output, cli.format, cli.pretty)?;
        Ok::<_, CliError>(ExitCode::SUCCESS)
    }
    .instrument(span)
    .await
}
