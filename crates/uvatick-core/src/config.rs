//! Process-wide configuration, loaded once at startup.
//!
//! | Variable | Purpose |
//! |----------|---------|
//! | `UVATICK_ENV` | `development` routes index queries through the local proxy |
//! | `TELEGRAM_BOT_TOKEN` | Bot token for notifications |
//! | `TELEGRAM_CHAT_ID` | Recipient chat or channel id |

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::ValidationError;

pub const ENV_VAR: &str = "UVATICK_ENV";
pub const BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

pub const DEV_PROXY_BASE_URL: &str = "http://localhost:5173/api";
pub const PRODUCTION_BASE_URL: &str = "https://api.argentinadatos.com";
pub const TELEGRAM_API_BASE_URL: &str = "https://api.telegram.org";

/// Placeholder values shipped in the sample env file.
pub const BOT_TOKEN_PLACEHOLDER: &str = "tu_bot_token_aqui";
pub const CHAT_ID_PLACEHOLDER: &str = "tu_chat_id_aqui";

/// Build environment selecting the index base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    pub const fn index_base_url(self) -> &'static str {
        match self {
            Self::Development => DEV_PROXY_BASE_URL,
            Self::Production => PRODUCTION_BASE_URL,
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ValidationError::InvalidEnvironment {
                value: value.to_owned(),
            }),
        }
    }
}

/// Bot token and chat id used by the notification dispatcher.
///
/// Either value may be missing; the dispatcher decides what that means.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TelegramCredentials {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
}

impl TelegramCredentials {
    pub fn new(bot_token: Option<String>, chat_id: Option<String>) -> Self {
        Self {
            bot_token: bot_token.filter(|value| !value.trim().is_empty()),
            chat_id: chat_id.filter(|value| !value.trim().is_empty()),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.bot_token.as_deref() == Some(BOT_TOKEN_PLACEHOLDER)
            || self.chat_id.as_deref() == Some(CHAT_ID_PLACEHOLDER)
    }
}

// Tokens never reach logs or debug output.
impl std::fmt::Debug for TelegramCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramCredentials")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Immutable runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub environment: Environment,
    pub index_base_url: String,
    pub telegram_api_base_url: String,
    pub telegram: TelegramCredentials,
}

impl Settings {
    pub fn new(environment: Environment, telegram: TelegramCredentials) -> Self {
        Self {
            environment,
            index_base_url: environment.index_base_url().to_owned(),
            telegram_api_base_url: TELEGRAM_API_BASE_URL.to_owned(),
            telegram,
        }
    }

    /// Reads `.env` from the working directory when present, then the process
    /// environment.
    pub fn load() -> Result<Self, ValidationError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded env file"),
            Err(error) if error.not_found() => {}
            Err(error) => tracing::warn!(%error, "ignoring unreadable env file"),
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup(ENV_VAR) {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => Environment::default(),
        };
        let telegram = TelegramCredentials::new(lookup(BOT_TOKEN_VAR), lookup(CHAT_ID_VAR));
        Ok(Self::new(environment, telegram))
    }

    pub fn with_index_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.index_base_url = base_url.into();
        self
    }

    pub fn with_telegram_api_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.telegram_api_base_url = base_url.into();
        self
    }
}
