use std::sync::Arc;

use serde::Serialize;
use uvatick_core::{
    format_amount, format_long_date, HttpClient, IndexQuote, IndexWorkflow,
    NotificationDispatcher, NotificationOutcome, QuoteView, ReqwestHttpClient, Settings,
    ValueResolver,
};

use crate::cli::QuoteArgs;
use crate::error::CliError;

use super::CommandOutput;

#[derive(Debug, Serialize)]
struct QuoteResponseData<'a> {
    quote: Option<&'a IndexQuote>,
    formatted_value: Option<String>,
    formatted_date: Option<String>,
    is_fallback: bool,
    notice: Option<&'a str>,
    notification: Option<&'a NotificationOutcome>,
}

pub async fn run(
    args: &QuoteArgs,
    settings: &Settings,
    timeout_ms: u64,
) -> Result<CommandOutput, CliError> {
    let http_client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());

    let resolver =
        ValueResolver::from_settings(http_client.clone(), settings).with_timeout_ms(timeout_ms);
    let dispatcher = (!args.no_notify).then(|| {
        NotificationDispatcher::from_settings(http_client.clone(), settings)
            .with_timeout_ms(timeout_ms)
    });

    let mut view = QuoteView::new();
    IndexWorkflow::new(resolver, dispatcher)
        .run(&mut view)
        .await?;

    render_view(&view)
}

fn render_view(view: &QuoteView) -> Result<CommandOutput, CliError> {
    let data = serde_json::to_value(QuoteResponseData {
        quote: view.quote.as_ref(),
        formatted_value: view.quote.map(|quote| format_amount(quote.value())),
        formatted_date: view.quote.map(|quote| format_long_date(quote.date())),
        is_fallback: view.is_fallback,
        notice: view.notice.as_deref(),
        notification: view.notification.as_ref(),
    })?;

    let mut output = CommandOutput::new(data);
    if let Some(quote) = view.quote {
        output = output
            .with_line("Valor UVA", format!("${}", format_amount(quote.value())))
            .with_line("Fecha", format_long_date(quote.date()));
    }
    if let Some(notice) = &view.notice {
        output = output.with_line("Aviso", notice);
    }
    if let Some(outcome) = &view.notification {
        output = output.with_line("Telegram", outcome.to_string());
    }
    Ok(output.with_text("Datos provistos por ArgentinaDatos.com"))
}

#[cfg(test)]
mod tests {
    use uvatick_core::{IndexDate, FALLBACK_NOTICE};

    use super::*;

    #[test]
    fn fallback_view_renders_notice_and_localized_value() {
        let quote = IndexQuote::new(IndexDate::parse("2024-03-15").expect("valid"), 350.1234)
            .expect("valid");
        let view = QuoteView {
            loading: false,
            quote: Some(quote),
            is_fallback: true,
            notice: Some(String::from(FALLBACK_NOTICE)),
            notification: None,
        };

        let output = render_view(&view).expect("renders");

        assert_eq!(output.lines[0], "Valor UVA: $350,12");
        assert_eq!(output.lines[1], "Fecha: 15 de marzo de 2024");
        assert_eq!(output.lines[2], format!("Aviso: {FALLBACK_NOTICE}"));
        assert_eq!(output.data["quote"]["fecha"], "2024-03-15");
        assert_eq!(output.data["formatted_value"], "350,12");
        assert_eq!(output.data["is_fallback"], true);
    }
}
