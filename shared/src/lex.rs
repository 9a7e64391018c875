//! Lex V2 runtime client wrapper.

use aws_sdk_lexruntimev2::Client as LexRuntimeClient;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;

/// Client for the Lex V2 runtime `RecognizeText` call.
///
/// Constructed once at process start and shared immutably; handlers receive it
/// by reference instead of reaching for process-wide state.
pub struct LexClient {
    client: LexRuntimeClient,
    bot_id: String,
    bot_alias_id: String,
    locale_id: String,
}

impl LexClient {
    /// Create a new Lex client bound to the configured bot, alias, and locale.
    pub fn new(client: LexRuntimeClient, config: &Config) -> Self {
        Self {
            client,
            bot_id: config.bot_id.clone(),
            bot_alias_id: config.bot_alias_id.clone(),
            locale_id: config.locale_id.clone(),
        }
    }

    /// Submit one utterance to the bot and return its reply messages in order.
    ///
    /// A reply message with no content yields an empty string. The session id
    /// must be fresh per request; this client never generates or retains one.
    pub async fn recognize_text(&self, session_id: &str, text: &str) -> Result<Vec<String>> {
        let response = self
            .client
            .recognize_text()
            .bot_id(&self.bot_id)
            .bot_alias_id(&self.bot_alias_id)
            .locale_id(&self.locale_id)
            .session_id(session_id)
            .text(text)
            .send()
            .await?;

        let messages: Vec<String> = response
            .messages()
            .iter()
            .map(|m| m.content().unwrap_or_default().to_string())
            .collect();

        debug!(session_id = %session_id, count = messages.len(), "lex replied");
        Ok(messages)
    }
}
