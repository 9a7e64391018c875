//! Chat API Lambda - Relays chat messages to the Lex bot.
//!
//! Endpoints:
//! - POST /chat/ - forward a message to the bot, return its first reply
//! - GET /health - liveness probe, no dependency checks

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::http::{json_response, parse_json_body, preflight_response};
use shared::{ChatRequest, ChatResponse, Config, HealthResponse, LexClient};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Reply when the bot returns no messages.
const FALLBACK_NO_REPLY: &str = "Sorry, I didn't get that.";

/// Reply when the Lex call fails, whatever the cause. Failures are logged
/// with their classified kind but the caller always sees a 200 apology.
const FALLBACK_ERROR: &str = "Sorry, there was an error processing your request.";

/// Application state
struct AppState {
    lex: LexClient,
}

impl AppState {
    async fn new() -> Result<Self, Error> {
        let config = Config::from_env()?;
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let lex_client = aws_sdk_lexruntimev2::Client::new(&aws_config);

        Ok(Self {
            lex: LexClient::new(lex_client, &config),
        })
    }
}

/// Each request gets a fresh session: conversations are stateless here and
/// multi-turn context lives entirely in the Lex session store.
fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// Turn the outcome of a Lex call into the caller-facing reply. Failures and
/// empty reply lists both collapse to fixed fallback text; the caller never
/// sees an error status.
fn relay_response(session_id: &str, result: shared::Result<Vec<String>>) -> ChatResponse {
    match result {
        Ok(messages) => {
            info!(session_id = %session_id, messages = ?messages, "lex response");
            let response = messages
                .into_iter()
                .next()
                .unwrap_or_else(|| FALLBACK_NO_REPLY.to_string());
            ChatResponse { response }
        }
        Err(e) => {
            error!(
                session_id = %session_id,
                error_kind = e.kind(),
                error = %e,
                "error calling lex"
            );
            ChatResponse {
                response: FALLBACK_ERROR.to_string(),
            }
        }
    }
}

async fn chat(state: &AppState, request: ChatRequest) -> ChatResponse {
    let session_id = new_session_id();
    let result = state.lex.recognize_text(&session_id, &request.message).await;
    relay_response(&session_id, result)
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    let method = event.method().as_str();
    let path = event.uri().path();

    info!("Chat request: {} {}", method, path);

    match (method, path) {
        ("POST", "/chat" | "/chat/") => {
            let request: ChatRequest = match parse_json_body(event.body())? {
                Ok(parsed) => parsed,
                Err(response) => return Ok(response),
            };
            json_response(200, &chat(&state, request).await)
        }

        ("GET", "/health") => json_response(200, &HealthResponse::healthy()),

        ("OPTIONS", _) => preflight_response(),

        _ => json_response(404, &serde_json::json!({ "error": "Not found" })),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new().await?);
    let state_clone = state.clone();

    run(service_fn(move |event| {
        let state = state_clone.clone();
        async move { handler(state, event).await }
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_never_reused() {
        let first = new_session_id();
        let second = new_session_id();
        assert_ne!(first, second);
    }

    #[test]
    fn test_relay_returns_first_message() {
        let response = relay_response(
            "session-1",
            Ok(vec!["first reply".to_string(), "second reply".to_string()]),
        );
        assert_eq!(response.response, "first reply");
    }

    #[test]
    fn test_relay_empty_messages_fall_back() {
        let response = relay_response("session-1", Ok(vec![]));
        assert_eq!(response.response, "Sorry, I didn't get that.");
    }

    #[test]
    fn test_relay_lex_failure_is_apology() {
        for error in [
            shared::Error::Timeout("request timed out".to_string()),
            shared::Error::Auth("access denied".to_string()),
            shared::Error::BotUnavailable("no such bot".to_string()),
        ] {
            let response = relay_response("session-1", Err(error));
            assert_eq!(
                response.response,
                "Sorry, there was an error processing your request."
            );
        }
    }

    #[tokio::test]
    async fn test_routing_without_lex() {
        std::env::set_var("LEX_BOT_ID", "BOT123");
        std::env::set_var("AWS_REGION", "us-east-1");
        let state = Arc::new(AppState::new().await.unwrap());

        let health = lambda_http::http::Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::Empty)
            .unwrap();
        let response = handler(state.clone(), health).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(
            std::str::from_utf8(response.body().as_ref()).unwrap(),
            r#"{"status":"healthy"}"#
        );

        let preflight = lambda_http::http::Request::builder()
            .method("OPTIONS")
            .uri("/chat/")
            .body(Body::Empty)
            .unwrap();
        let response = handler(state.clone(), preflight).await.unwrap();
        assert_eq!(response.status(), 204);

        let unknown = lambda_http::http::Request::builder()
            .method("GET")
            .uri("/nope")
            .body(Body::Empty)
            .unwrap();
        let response = handler(state.clone(), unknown).await.unwrap();
        assert_eq!(response.status(), 404);

        let bad_body = lambda_http::http::Request::builder()
            .method("POST")
            .uri("/chat/")
            .body(Body::from("not json"))
            .unwrap();
        let response = handler(state, bad_body).await.unwrap();
        assert_eq!(response.status(), 400);
    }
}
