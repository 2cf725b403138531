//! Remote-first counseling with an offline safety net.
//!
//! Analysis requests try the primary responder under a timeout and fall back to the local
//! report on any failure, so `analyze` always produces text. Chat has no offline equivalent and
//! surfaces the classified failure instead.

use heartguide_core::generate_fallback_analysis;
use heartguide_responder::{Responder, ResponderError, ResponderResult};
use heartguide_types::{Message, NonEmptyText, RelationshipContext};
use std::sync::Arc;
use std::time::Duration;

/// Analysis text and which path produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub analysis: String,
    pub fallback: bool,
}

#[derive(Clone)]
pub struct CounselService {
    responder: Arc<dyn Responder>,
    remote_timeout: Duration,
}

impl CounselService {
    /// Creates a service that waits at most `remote_timeout` for each remote call.
    pub fn new(responder: Arc<dyn Responder>, remote_timeout: Duration) -> Self {
        Self {
            responder,
            remote_timeout,
        }
    }

    /// Analyses `data`, remotely if possible.
    ///
    /// Never fails: remote errors, timeouts and blank replies all route to the offline report.
    pub async fn analyze(&self, data: &NonEmptyText) -> AnalysisOutcome {
        let remote = tokio::time::timeout(self.remote_timeout, self.responder.analyze(data.as_str()));

        match remote.await {
            Ok(Ok(analysis)) if !analysis.trim().is_empty() => {
                tracing::info!(length = analysis.len(), "remote analysis complete");
                return AnalysisOutcome {
                    analysis,
                    fallback: false,
                };
            }
            Ok(Ok(_)) => tracing::warn!("remote analysis was empty, using fallback"),
            Ok(Err(e)) => tracing::warn!("remote analysis failed, using fallback: {}", e),
            Err(_) => tracing::warn!(
                timeout_secs = self.remote_timeout.as_secs_f32(),
                "remote analysis timed out, using fallback"
            ),
        }

        AnalysisOutcome {
            analysis: generate_fallback_analysis(data.as_str()),
            fallback: true,
        }
    }

    /// Gets the counselor's reply to the latest message.
    ///
    /// # Errors
    /// [`ResponderError::EmptyConversation`] for no messages, [`ResponderError::Timeout`] when
    /// the remote call exceeds the timeout, or the responder's own classified failure.
    pub async fn chat(
        &self,
        messages: &[Message],
        context: Option<&RelationshipContext>,
    ) -> ResponderResult<String> {
        if messages.is_empty() {
            return Err(ResponderError::EmptyConversation);
        }

        tokio::time::timeout(self.remote_timeout, self.responder.counsel(messages, context))
            .await
            .map_err(|_| ResponderError::Timeout)?
    }
}
