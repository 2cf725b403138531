/// Classified failures of the primary responder.
///
/// Display strings are shown to end users by the chat endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ResponderError {
    #[error("AI service is not properly configured. Please check your API key.")]
    MissingApiKey,
    #[error("API key is invalid or not configured.")]
    InvalidApiKey,
    #[error("API quota exceeded. Please try again later or use a new API key.")]
    QuotaExceeded,
    #[error("The AI model is temporarily unavailable. Please try again in a moment.")]
    ModelUnavailable,
    #[error("Empty response from AI")]
    EmptyResponse,
    #[error("Messages array is required")]
    EmptyConversation,
    #[error("The AI service took too long to respond. Please try again.")]
    Timeout,
    #[error("AI request failed with status {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("failed to reach the AI service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response from AI: {0}")]
    Malformed(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ResponderResult<T> = std::result::Result<T, ResponderError>;
