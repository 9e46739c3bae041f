//! Lookup of the current UVA value with fallback to the latest publication.

use std::sync::Arc;

use crate::http_client::{HttpClient, HttpRequest};
use crate::{IndexDate, IndexQuote, ResolutionResult, ResolveError, Settings};

pub const INDEX_PATH: &str = "/v1/finanzas/indices/uva";

/// Fetches the published index series and picks the quote to display.
#[derive(Clone)]
pub struct ValueResolver {
    http_client: Arc<dyn HttpClient>,
    endpoint: String,
    timeout_ms: u64,
}

impl ValueResolver {
    pub fn new(http_client: Arc<dyn HttpClient>, base_url: &str) -> Self {
        Self {
            http_client,
            endpoint: format!("{}{INDEX_PATH}", base_url.trim_end_matches('/')),
            timeout_ms: 3_000,
        }
    }

    pub fn from_settings(http_client: Arc<dyn HttpClient>, settings: &Settings) -> Self {
        Self::new(http_client, &settings.index_base_url)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Resolves against today's local calendar date.
    pub async fn resolve(&self) -> Result<ResolutionResult, ResolveError> {
        self.resolve_for(IndexDate::today()).await
    }

    /// Resolves against an explicit reference date.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::Fetch`] on transport failures or a non-2xx status
    /// - [`ResolveError::Data`] when the payload is malformed or empty
    pub async fn resolve_for(&self, today: IndexDate) -> Result<ResolutionResult, ResolveError> {
        let quotes = self.fetch_series().await?;
        select_quote(&quotes, today)
    }

    /// Downloads and decodes the full published series.
    pub async fn fetch_series(&self) -> Result<Vec<IndexQuote>, ResolveError> {
        let request = HttpRequest::get(&self.endpoint)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        tracing::debug!(endpoint = %self.endpoint, "querying index series");

        let response = self.http_client.execute(request).await.map_err(|error| {
            tracing::warn!(endpoint = %self.endpoint, %error, "index request failed");
            ResolveError::transport(error.message(), error.is_cross_origin())
        })?;

        if !response.is_success() {
            tracing::warn!(status = response.status, "index endpoint returned an error status");
            return Err(ResolveError::status(response.status, response.reason()));
        }

        let quotes: Vec<IndexQuote> = serde_json::from_str(&response.body).map_err(|error| {
            ResolveError::data(format!("respuesta de la API inválida: {error}"))
        })?;

        tracing::debug!(count = quotes.len(), "decoded index series");
        Ok(quotes)
    }
}

/// Picks the quote dated `today`, else the last one in the series.
///
/// The series is expected oldest to newest; an unsorted series still yields
/// its last element and is reported with a warning.
pub fn select_quote(
    quotes: &[IndexQuote],
    today: IndexDate,
) -> Result<ResolutionResult, ResolveError> {
    if let Some(quote) = quotes.iter().find(|quote| quote.date() == today) {
        tracing::info!(date = %quote.date(), value = quote.value(), "found quote for today");
        return Ok(ResolutionResult::current(*quote));
    }

    let latest = quotes.last().ok_or_else(ResolveError::empty_payload)?;

    if !is_chronological(quotes) {
        tracing::warn!(
            selected = %latest.date(),
            "index series is not sorted oldest to newest; last element may not be the latest"
        );
    }

    tracing::info!(
        today = %today,
        date = %latest.date(),
        value = latest.value(),
        "no quote for today, falling back to latest"
    );
    Ok(ResolutionResult::fallback(*latest))
}

fn is_chronological(quotes: &[IndexQuote]) -> bool {
    quotes
        .windows(2)
        .all(|pair| pair[0].date() <= pair[1].date())
}
