//! Responder runtime configuration.
//!
//! Resolved once at process startup from environment values and then passed into the
//! responder, so request handling never reads process-wide environment variables.

use crate::{ResponderError, ResponderResult};
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(30);

/// Gemini connection settings.
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    api_key: Option<String>,
    model: String,
    api_base: String,
}

impl GeminiConfig {
    /// Create a new `GeminiConfig`.
    ///
    /// Blank values fall back to defaults; a blank API key counts as missing, which makes every
    /// remote call fail with [`ResponderError::MissingApiKey`] rather than failing startup.
    pub fn new(
        api_key: Option<String>,
        model: Option<String>,
        api_base: Option<String>,
    ) -> ResponderResult<Self> {
        let api_key = non_blank(api_key);
        let model = non_blank(model).unwrap_or_else(|| DEFAULT_MODEL.into());
        let api_base = non_blank(api_base).unwrap_or_else(|| DEFAULT_API_BASE.into());

        if model.contains('/') || model.contains(char::is_whitespace) {
            return Err(ResponderError::InvalidConfig(format!(
                "model id '{}' must not contain '/' or whitespace",
                model
            )));
        }

        if !(api_base.starts_with("https://") || api_base.starts_with("http://")) {
            return Err(ResponderError::InvalidConfig(format!(
                "API base '{}' must be an http(s) URL",
                api_base
            )));
        }

        Ok(Self {
            api_key,
            model,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Full `generateContent` URL for the configured model.
    pub fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

/// Parse the remote-call timeout (whole seconds) from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_REMOTE_TIMEOUT`].
pub fn timeout_from_env_value(value: Option<String>) -> ResponderResult<Duration> {
    let Some(value) = non_blank(value) else {
        return Ok(DEFAULT_REMOTE_TIMEOUT);
    };

    let secs: u64 = value.parse().map_err(|_| {
        ResponderError::InvalidConfig(format!("timeout '{}' is not a whole number of seconds", value))
    })?;
    if secs == 0 {
        return Err(ResponderError::InvalidConfig(
            "timeout must be at least one second".into(),
        ));
    }

    Ok(Duration::from_secs(secs))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
