use tracing::Span;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

use crate::cli::LogFormat;

/// Installs the global subscriber. Logs go to stderr so stdout stays parseable.
pub fn init_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let base = fmt::layer().with_target(true).with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(base.json())
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(base.compact())
            .try_init(),
    };

    if let Err(error) = result {
        eprintln!("warning: tracing already initialized: {error}");
    }
}

/// Root span for one command invocation, tagged with a fresh run id.
pub fn root_span(command: &'static str) -> Span {
    tracing::info_span!(
        "run",
        command = %command,
        run_id = %Uuid::new_v4().simple()
    )
}
