//! Error types for the mood music chatbot Lambda functions.
//!
//! The taxonomy exists for observability: the chat relay logs the classified
//! kind of every Lex failure, then answers the caller with the same
//! success-shaped apology regardless of kind.

use aws_sdk_lexruntimev2::error::SdkError;
use aws_sdk_lexruntimev2::operation::recognize_text::RecognizeTextError;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the chatbot Lambda functions.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The Lex call timed out
    #[error("Lex call timed out: {0}")]
    Timeout(String),

    /// Access denied by the Lex runtime
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Request throttled by the Lex runtime
    #[error("Throttled: {0}")]
    Throttled(String),

    /// Bot, alias, or locale not found, or a bot dependency failed
    #[error("Bot unavailable: {0}")]
    BotUnavailable(String),

    /// Request rejected as invalid by the Lex runtime
    #[error("Validation error: {0}")]
    Validation(String),

    /// Response from the Lex runtime could not be decoded
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other Lex service error
    #[error("Lex service error: {0}")]
    Service(String),
}

impl Error {
    /// Stable lowercase label for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config(_) => "config",
            Error::Timeout(_) => "timeout",
            Error::Auth(_) => "auth",
            Error::Throttled(_) => "throttled",
            Error::BotUnavailable(_) => "bot_unavailable",
            Error::Validation(_) => "validation",
            Error::MalformedResponse(_) => "malformed_response",
            Error::Serialization(_) => "serialization",
            Error::Service(_) => "service",
        }
    }
}

impl From<SdkError<RecognizeTextError>> for Error {
    fn from(err: SdkError<RecognizeTextError>) -> Self {
        match &err {
            SdkError::TimeoutError(_) => Error::Timeout(err.to_string()),
            SdkError::DispatchFailure(failure) if failure.is_timeout() => {
                Error::Timeout(err.to_string())
            }
            SdkError::DispatchFailure(_) => Error::Service(err.to_string()),
            SdkError::ResponseError(_) => Error::MalformedResponse(err.to_string()),
            SdkError::ServiceError(context) => {
                let service_err = context.err();
                let message = service_err.to_string();
                if service_err.is_access_denied_exception() {
                    Error::Auth(message)
                } else if service_err.is_throttling_exception() {
                    Error::Throttled(message)
                } else if service_err.is_resource_not_found_exception()
                    || service_err.is_dependency_failed_exception()
                {
                    Error::BotUnavailable(message)
                } else if service_err.is_validation_exception() {
                    Error::Validation(message)
                } else {
                    Error::Service(message)
                }
            }
            _ => Error::Service(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::Timeout("t".into()).kind(), "timeout");
        assert_eq!(Error::Auth("a".into()).kind(), "auth");
        assert_eq!(Error::BotUnavailable("b".into()).kind(), "bot_unavailable");
        assert_eq!(Error::Service("s".into()).kind(), "service");
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::Config("LEX_BOT_ID environment variable is required".to_string());
        assert!(err.to_string().contains("LEX_BOT_ID"));
    }
}
