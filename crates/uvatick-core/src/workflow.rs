//! One user-triggered lookup: resolve, display, then notify.

use serde::Serialize;

use crate::dispatcher::{NotificationDispatcher, NotificationOutcome};
use crate::resolver::ValueResolver;
use crate::{IndexDate, IndexQuote, ResolutionResult, ResolveError};

pub const FALLBACK_NOTICE: &str = "No hay datos para hoy. Mostrando el valor más reciente.";

/// Caller-visible state of the lookup.
///
/// Each field has a single writer: the workflow owns `loading` and `notice`,
/// resolution owns `quote` and `is_fallback`, dispatch owns `notification`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuoteView {
    pub loading: bool,
    pub quote: Option<IndexQuote>,
    pub is_fallback: bool,
    pub notice: Option<String>,
    pub notification: Option<NotificationOutcome>,
}

impl QuoteView {
    pub fn new() -> Self {
        Self::default()
    }

    fn begin(&mut self) {
        self.loading = true;
        self.notice = None;
        self.notification = None;
    }

    fn apply_resolution(&mut self, result: &Result<ResolutionResult, ResolveError>) {
        match result {
            Ok(resolution) => {
                self.quote = Some(resolution.quote);
                self.is_fallback = resolution.is_fallback;
                if resolution.is_fallback {
                    self.notice = Some(String::from(FALLBACK_NOTICE));
                }
            }
            Err(error) => {
                self.quote = None;
                self.is_fallback = false;
                self.notice = Some(error.user_message());
            }
        }
    }

    /// Whether resolution failed on the last run.
    pub fn is_error(&self) -> bool {
        !self.loading && self.quote.is_none() && self.notice.is_some()
    }
}

/// Composes the resolver and the optional dispatcher.
#[derive(Clone)]
pub struct IndexWorkflow {
    resolver: ValueResolver,
    dispatcher: Option<NotificationDispatcher>,
}

impl IndexWorkflow {
    pub fn new(resolver: ValueResolver, dispatcher: Option<NotificationDispatcher>) -> Self {
        Self {
            resolver,
            dispatcher,
        }
    }

    /// Runs one lookup against today's local date, updating `view` in place.
    pub async fn run(&self, view: &mut QuoteView) -> Result<ResolutionResult, ResolveError> {
        self.run_for(view, IndexDate::today()).await
    }

    /// Runs one lookup against an explicit reference date.
    ///
    /// A failed resolution clears any quote left from a previous run. A failed
    /// notification never touches the displayed quote.
    pub async fn run_for(
        &self,
        view: &mut QuoteView,
        today: IndexDate,
    ) -> Result<ResolutionResult, ResolveError> {
        view.begin();

        let result = self.resolver.resolve_for(today).await;
        view.apply_resolution(&result);

        if let (Ok(resolution), Some(dispatcher)) = (&result, &self.dispatcher) {
            let outcome = dispatcher.send(&resolution.quote).await;
            if !outcome.is_sent() {
                tracing::warn!(%outcome, "notification not delivered");
            }
            view.notification = Some(outcome);
        }

        view.loading = false;
        result
    }
}
