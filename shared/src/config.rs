//! Configuration management for Lambda functions.

use std::env;

use crate::error::{Error, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lex bot ID
    pub bot_id: String,
    /// Lex bot alias ID
    pub bot_alias_id: String,
    /// Lex locale ID
    pub locale_id: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `LEX_BOT_ID` is required; startup fails without it.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bot_id: env::var("LEX_BOT_ID")
                .map_err(|_| Error::Config("LEX_BOT_ID environment variable is required".to_string()))?,
            bot_alias_id: env::var("LEX_BOT_ALIAS_ID").unwrap_or_else(|_| "TSTALIASID".to_string()),
            locale_id: env::var("LEX_LOCALE_ID").unwrap_or_else(|_| "en_US".to_string()),
        })
    }
}
