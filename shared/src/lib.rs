//! Shared library for the mood music chatbot Lambda functions.
//!
//! This crate provides common utilities, types, and clients used across all Lambda functions.

pub mod config;
pub mod error;
pub mod http;
pub mod lex;
pub mod models;
pub mod recommend;

pub use config::Config;
pub use error::{Error, Result};
pub use lex::LexClient;
pub use models::{ChatRequest, ChatResponse, HealthResponse};
pub use recommend::recommend;
