mod config;
mod message;
mod quote;

use serde_json::Value;
use uvatick_core::Settings;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Command payload: structured data for JSON output plus the lines shown in
/// table mode.
pub struct CommandOutput {
    pub data: Value,
    pub lines: Vec<String>,
}

impl CommandOutput {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            lines: Vec::new(),
        }
    }

    pub fn with_line(mut self, label: &str, value: impl AsRef<str>) -> Self {
        self.lines.push(format!("{label}: {}", value.as_ref()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }
}

pub async fn run(cli: &Cli, settings: &Settings) -> Result<CommandOutput, CliError> {
    match &cli.command {
        Command::Quote(args) => quote::run(args, settings, cli.timeout_ms).await,
        Command::Message(args) => message::run(args),
        Command::Config => config::run(settings),
    }
}
