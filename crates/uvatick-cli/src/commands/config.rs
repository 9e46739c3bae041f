use serde::Serialize;
use uvatick_core::config::{BOT_TOKEN_VAR, CHAT_ID_VAR};
use uvatick_core::{Environment, Settings};

use crate::error::CliError;

use super::CommandOutput;

#[derive(Debug, Serialize)]
struct ConfigResponseData<'a> {
    environment: Environment,
    index_base_url: &'a str,
    telegram_api_base_url: &'a str,
    bot_token_set: bool,
    chat_id: Option<&'a str>,
    telegram_ready: bool,
}

pub fn run(settings: &Settings) -> Result<CommandOutput, CliError> {
    let telegram = &settings.telegram;
    let telegram_ready =
        telegram.bot_token.is_some() && telegram.chat_id.is_some() && !telegram.is_placeholder();

    let data = serde_json::to_value(ConfigResponseData {
        environment: settings.environment,
        index_base_url: &settings.index_base_url,
        telegram_api_base_url: &settings.telegram_api_base_url,
        bot_token_set: telegram.bot_token.is_some(),
        chat_id: telegram.chat_id.as_deref(),
        telegram_ready,
    })?;

    let token_state = if telegram.bot_token.is_some() {
        "<redacted>"
    } else {
        "<unset>"
    };
    Ok(CommandOutput::new(data)
        .with_line("Environment", settings.environment.as_str())
        .with_line("Index base URL", &settings.index_base_url)
        .with_line(BOT_TOKEN_VAR, token_state)
        .with_line(CHAT_ID_VAR, telegram.chat_id.as_deref().unwrap_or("<unset>"))
        .with_line("Telegram ready", telegram_ready.to_string()))
}
