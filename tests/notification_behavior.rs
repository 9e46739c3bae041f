//! Behavior-driven tests for Telegram notifications
//!
//! These tests verify HOW the dispatcher reacts to its configuration and to
//! provider responses. Sending must never fail the caller.

use std::sync::Arc;

use uvatick_core::{
    parse_amount, HttpError, HttpErrorKind, HttpMethod, HttpResponse, IndexDate, IndexQuote,
    NotificationDispatcher, NotificationOutcome, SkipReason, StubHttpClient, TelegramCredentials,
};

fn sample_quote() -> IndexQuote {
    IndexQuote::new(IndexDate::parse("2024-03-15").expect("valid"), 350.1234).expect("valid")
}

fn dispatcher_with(
    client: Arc<StubHttpClient>,
    token: Option<&str>,
    chat_id: Option<&str>,
) -> NotificationDispatcher {
    NotificationDispatcher::new(
        client,
        "https://api.telegram.org",
        TelegramCredentials::new(token.map(str::to_owned), chat_id.map(str::to_owned)),
    )
}

fn sent_body(client: &StubHttpClient) -> serde_json::Value {
    let requests = client.requests();
    let body = requests
        .first()
        .and_then(|request| request.body.clone())
        .expect("a request body");
    serde_json::from_str(&body).expect("json body")
}

// =============================================================================
// Notification: Missing Configuration
// =============================================================================

#[tokio::test]
async fn when_secrets_are_missing_dispatcher_skips_without_network_call() {
    // Given: Neither secret is configured
    let client = Arc::new(StubHttpClient::respond(HttpResponse::ok_json("{}")));
    let dispatcher = dispatcher_with(client.clone(), None, None);

    // When: A quote is sent
    let outcome = dispatcher.send(&sample_quote()).await;

    // Then: The send is skipped and nothing touches the network
    assert_eq!(outcome, NotificationOutcome::Skipped(SkipReason::MissingBotToken));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn when_secrets_are_placeholders_dispatcher_skips_without_network_call() {
    // Given: The sample env file values were never replaced
    let client = Arc::new(StubHttpClient::respond(HttpResponse::ok_json("{}")));
    let dispatcher = dispatcher_with(
        client.clone(),
        Some("tu_bot_token_aqui"),
        Some("tu_chat_id_aqui"),
    );

    // When: A quote is sent
    let outcome = dispatcher.send(&sample_quote()).await;

    // Then: The send is skipped and nothing touches the network
    assert_eq!(
        outcome,
        NotificationOutcome::Skipped(SkipReason::PlaceholderCredentials)
    );
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn when_only_chat_id_is_placeholder_dispatcher_still_skips() {
    // Given: A real token but a placeholder chat id
    let client = Arc::new(StubHttpClient::respond(HttpResponse::ok_json("{}")));
    let dispatcher = dispatcher_with(client.clone(), Some("123:abc"), Some("tu_chat_id_aqui"));

    // When: A quote is sent
    let outcome = dispatcher.send(&sample_quote()).await;

    // Then: Nothing is sent
    assert!(matches!(outcome, NotificationOutcome::Skipped(_)));
    assert_eq!(client.call_count(), 0);
}

// =============================================================================
// Notification: Message Content
// =============================================================================

#[tokio::test]
async fn sent_message_uses_es_ar_amount_and_long_date() {
    // Given: A configured dispatcher
    let client = Arc::new(StubHttpClient::respond(HttpResponse::ok_json(r#"{"ok":true}"#)));
    let dispatcher = dispatcher_with(client.clone(), Some("123:abc"), Some("-1001"));

    // When: The quote 350.1234 dated 2024-03-15 is sent
    let outcome = dispatcher.send(&sample_quote()).await;

    // Then: One POST carries the localized amount and date in HTML mode
    assert_eq!(outcome, NotificationOutcome::Sent);
    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(
        requests[0].url,
        "https://api.telegram.org/bot123:abc/sendMessage"
    );

    let body = sent_body(&client);
    let text = body["text"].as_str().expect("text field");
    assert!(text.contains("350,12"), "amount missing from: {text}");
    assert!(
        text.contains("15 de marzo de 2024"),
        "date missing from: {text}"
    );
    assert!(text.contains("<b>Cotización UVA - Argentina</b>"));
    assert_eq!(body["parse_mode"], "HTML");
    assert_eq!(body["chat_id"], "-1001");
}

#[tokio::test]
async fn sent_amount_parses_back_within_a_cent() {
    // Given: A configured dispatcher
    let client = Arc::new(StubHttpClient::respond(HttpResponse::ok_json(r#"{"ok":true}"#)));
    let dispatcher = dispatcher_with(client.clone(), Some("123:abc"), Some("-1001"));
    let quote = sample_quote();

    // When: The quote is sent
    dispatcher.send(&quote).await;

    // Then: The amount after "$" recovers the original value
    let body = sent_body(&client);
    let text = body["text"].as_str().expect("text field");
    let amount = text
        .split('$')
        .nth(1)
        .and_then(|rest| rest.lines().next())
        .expect("amount line");
    let parsed = parse_amount(amount).expect("parsable amount");
    assert!((parsed - quote.value()).abs() <= 0.01);
}

// =============================================================================
// Notification: Provider Failures
// =============================================================================

#[tokio::test]
async fn when_provider_rejects_message_dispatcher_reports_failure() {
    // Given: Telegram rejects the bot token
    let client = Arc::new(StubHttpClient::respond(HttpResponse::new(
        401,
        r#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#,
    )));
    let dispatcher = dispatcher_with(client, Some("123:wrong"), Some("-1001"));

    // When: A quote is sent
    let outcome = dispatcher.send(&sample_quote()).await;

    // Then: A failure outcome carries the provider's explanation
    assert_eq!(
        outcome,
        NotificationOutcome::Failed(String::from("401 Unauthorized"))
    );
}

#[tokio::test]
async fn when_provider_error_has_no_payload_dispatcher_reports_status() {
    // Given: A gateway error with an HTML body
    let client = Arc::new(StubHttpClient::respond(HttpResponse::new(
        502,
        "<html>Bad Gateway</html>",
    )));
    let dispatcher = dispatcher_with(client, Some("123:abc"), Some("-1001"));

    // When: A quote is sent
    let outcome = dispatcher.send(&sample_quote()).await;

    // Then: The status code is reported
    assert_eq!(
        outcome,
        NotificationOutcome::Failed(String::from("telegram returned status 502"))
    );
}

#[tokio::test]
async fn when_transport_fails_dispatcher_reports_failure_instead_of_erroring() {
    // Given: The provider host is unreachable
    let client = Arc::new(StubHttpClient::fail(HttpError::new(
        HttpErrorKind::Connect,
        "connection failed: dns error",
    )));
    let dispatcher = dispatcher_with(client.clone(), Some("123:abc"), Some("-1001"));

    // When: A quote is sent
    let outcome = dispatcher.send(&sample_quote()).await;

    // Then: The failure is captured in the outcome
    assert_eq!(
        outcome,
        NotificationOutcome::Failed(String::from("connection failed: dns error"))
    );
    assert_eq!(client.call_count(), 1);
}
