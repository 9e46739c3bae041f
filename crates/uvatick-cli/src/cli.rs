//! CLI argument definitions for uvatick.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `quote` | Fetch today's UVA value (or the latest one) and relay it to Telegram |
//! | `message` | Preview the Telegram message for a value and date |
//! | `config` | Show the resolved configuration with secrets redacted |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | `3000` | Request timeout in ms |
//! | `--log-format` | `text` | Log output on stderr (text, json) |
//!
//! # Examples
//!
//! ```bash
//! uvatick quote
//! uvatick quote --no-notify --format json --pretty
//! uvatick message 350.1234 2024-03-15
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// UVA index lookup with Telegram relay.
#[derive(Debug, Parser)]
#[command(
    name = "uvatick",
    author,
    version,
    about = "Daily UVA index lookup with Telegram relay",
    long_about = "uvatick fetches the UVA index published by ArgentinaDatos. When no value \
is published for today it shows the most recent one.\n\
\n\
Configuration comes from the environment (or a .env file):\n\
\n\
  • UVATICK_ENV: development routes through the local proxy\n\
  • TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID: enable notifications"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 3000)]
    pub timeout_ms: u64,

    /// Log format written to stderr. Verbosity follows RUST_LOG.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    Table,
    /// Single JSON object output.
    Json,
}

/// Log output options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 📊 Fetch the current UVA value.
    ///
    /// Shows today's value, or the most recent one with a notice. When
    /// Telegram is configured the value is relayed to the chat.
    ///
    /// # Examples
    ///
    ///   uvatick quote
    ///   uvatick quote --no-notify
    Quote(QuoteArgs),

    /// 💬 Print the notification text for a value without sending it.
    ///
    /// # Examples
    ///
    ///   uvatick message 350.1234 2024-03-15
    Message(MessageArgs),

    /// ⚙️ Show the resolved configuration.
    Config,
}

impl Command {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Quote(_) => "quote",
            Self::Message(_) => "message",
            Self::Config => "config",
        }
    }
}

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Skip the Telegram relay even when it is configured.
    #[arg(long, default_value_t = false)]
    pub no_notify: bool,
}

#[derive(Debug, Args)]
pub struct MessageArgs {
    /// Index value, e.g. 350.1234.
    pub value: f64,

    /// Publication date (YYYY-MM-DD).
    pub date: String,
}
