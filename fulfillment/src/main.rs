//! Fulfillment Lambda - Lex V2 fulfillment code hook for the music
//! recommendation intent.
//!
//! Invoked by the bot once the required slots are filled; maps the `mood`
//! slot to a canned song and closes the intent. The `genre` slot is elicited
//! by the bot but does not influence the recommendation.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use shared::recommend;
use std::collections::HashMap;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Lex V2 code-hook input event.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LexEvent {
    session_state: SessionState,
}

#[derive(Debug, Deserialize)]
struct SessionState {
    intent: Intent,
}

/// Unfilled slots arrive as JSON `null`, hence the nested `Option`.
#[derive(Debug, Deserialize)]
struct Intent {
    name: String,
    #[serde(default)]
    slots: HashMap<String, Option<Slot>>,
}

#[derive(Debug, Deserialize)]
struct Slot {
    value: Option<SlotValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SlotValue {
    interpreted_value: Option<String>,
}

/// Lex V2 code-hook response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LexResponse {
    session_state: ResponseSessionState,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResponseSessionState {
    dialog_action: DialogAction,
    intent: ResponseIntent,
}

#[derive(Debug, Serialize)]
struct DialogAction {
    #[serde(rename = "type")]
    action_type: String,
}

#[derive(Debug, Serialize)]
struct ResponseIntent {
    name: String,
    state: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Message {
    content_type: String,
    content: String,
}

impl LexResponse {
    /// Close the named intent as fulfilled with one plain-text message.
    fn close(intent_name: String, content: String) -> Self {
        Self {
            session_state: ResponseSessionState {
                dialog_action: DialogAction {
                    action_type: "Close".to_string(),
                },
                intent: ResponseIntent {
                    name: intent_name,
                    state: "Fulfilled".to_string(),
                },
            },
            messages: vec![Message {
                content_type: "PlainText".to_string(),
                content,
            }],
        }
    }
}

/// Resolve a slot's interpreted value. Missing and unfilled slots are both
/// legitimately absent; every slot goes through this same lookup.
fn slot_value(slots: &HashMap<String, Option<Slot>>, name: &str) -> Option<String> {
    slots
        .get(name)?
        .as_ref()?
        .value
        .as_ref()?
        .interpreted_value
        .clone()
}

fn fulfill(event: LexEvent) -> LexResponse {
    let slots = &event.session_state.intent.slots;

    let mood = slot_value(slots, "mood")
        .map(|m| m.to_lowercase())
        .unwrap_or_default();
    let genre = slot_value(slots, "genre").map(|g| g.to_lowercase());

    info!(
        intent = %event.session_state.intent.name,
        mood = %mood,
        genre = ?genre,
        "fulfilling recommendation intent"
    );

    let song = recommend(&mood);

    LexResponse::close(
        event.session_state.intent.name,
        format!("Based on your mood, I recommend: {}", song),
    )
}

async fn handler(event: LambdaEvent<LexEvent>) -> Result<LexResponse, Error> {
    let (event, _context) = event.into_parts();
    Ok(fulfill(event))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    run(service_fn(handler)).await
}
