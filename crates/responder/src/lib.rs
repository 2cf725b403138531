//! # HeartGuide Responder
//!
//! The primary responder: forwards conversation turns and analysis requests to a hosted
//! generative model and classifies its failures.
//!
//! Callers depend on the [`Responder`] trait so the REST layer can be exercised with a stub and
//! the offline fallback can take over whenever a call fails.

#![warn(rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod gemini;

pub use config::{timeout_from_env_value, GeminiConfig};
pub use error::{ResponderError, ResponderResult};
pub use gemini::GeminiResponder;

use heartguide_types::{Message, RelationshipContext};

/// A remote counselor that may fail.
#[async_trait::async_trait]
pub trait Responder: Send + Sync {
    /// Replies to the latest turn of `messages`.
    ///
    /// # Errors
    /// Returns [`ResponderError::EmptyConversation`] for an empty slice, otherwise any classified
    /// remote failure.
    async fn counsel(
        &self,
        messages: &[Message],
        context: Option<&RelationshipContext>,
    ) -> ResponderResult<String>;

    /// Produces a structured analysis of free-text relationship data.
    ///
    /// A blank reply is reported as [`ResponderError::EmptyResponse`], never as `Ok`.
    async fn analyze(&self, data: &str) -> ResponderResult<String>;
}
