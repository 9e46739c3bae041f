//! # uvatick Core
//!
//! Lookup of the daily UVA index published by ArgentinaDatos, with an optional
//! Telegram relay of the result.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Environment-driven settings, loaded once at startup |
//! | [`dispatcher`] | Telegram notification with skip/fail outcomes |
//! | [`domain`] | Domain models (IndexDate, IndexQuote, ResolutionResult) |
//! | [`error`] | Core error types |
//! | [`format`] | es-AR amount and date formatting |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`resolver`] | Today-or-latest quote selection |
//! | [`workflow`] | Resolve-then-notify composition and view state |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use uvatick_core::{ReqwestHttpClient, Settings, ValueResolver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::load()?;
//!     let resolver = ValueResolver::from_settings(Arc::new(ReqwestHttpClient::new()), &settings);
//!
//!     let resolution = resolver.resolve().await?;
//!     println!("UVA {}: {:.2}", resolution.quote.date(), resolution.quote.value());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / User     │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────────────┐
//! │ IndexWorkflow   │────▶│ NotificationDispatcher   │
//! └────────┬────────┘     └────────────┬─────────────┘
//!          │                           │
//!          ▼                           ▼
//! ┌─────────────────┐     ┌──────────────────────────┐
//! │ ValueResolver   │────▶│ HTTP Client              │
//! └─────────────────┘     │ (reqwest/stub)           │
//!                         └──────────────────────────┘
//! ```
//!
//! ## Security
//!
//! - The bot token is read from the environment only and is redacted from
//!   `Debug` output and logs

pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod error;
pub mod format;
pub mod http_client;
pub mod resolver;
pub mod workflow;

pub use config::{Environment, Settings, TelegramCredentials};

pub use dispatcher::{NotificationDispatcher, NotificationOutcome, SkipReason};

pub use domain::{IndexDate, IndexQuote, ResolutionResult};

pub use error::{CoreError, ResolveError, ValidationError, CROSS_ORIGIN_MESSAGE};

pub use format::{format_amount, format_long_date, format_message, parse_amount};

pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpMethod, HttpRequest, HttpResponse,
    ReqwestHttpClient, StubHttpClient,
};

pub use resolver::{select_quote, ValueResolver};

pub use workflow::{IndexWorkflow, QuoteView, FALLBACK_NOTICE};
