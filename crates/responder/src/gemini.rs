//! Gemini `generateContent` client.

use crate::config::GeminiConfig;
use crate::{Responder, ResponderError, ResponderResult};
use heartguide_core::prompts::{
    counselor_system_context, data_analysis_prompt, COUNSELOR_ACKNOWLEDGEMENT,
};
use heartguide_types::{Message, RelationshipContext, Role};
use serde::{Deserialize, Serialize};

const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

// Relationship discussions trip the default thresholds too often.
const SAFETY_THRESHOLD: &str = "BLOCK_ONLY_HIGH";

const CHAT_TEMPERATURE: f32 = 0.8;
const ANALYSIS_TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Longest upstream error text carried into [`ResponderError::Upstream`].
const MAX_ERROR_MESSAGE_CHARS: usize = 300;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(role: &str, text: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
}

impl GenerationConfig {
    fn with_temperature(temperature: f32) -> Self {
        Self {
            temperature,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

fn safety_settings() -> Vec<SafetySetting> {
    HARM_CATEGORIES
        .into_iter()
        .map(|category| SafetySetting {
            category,
            threshold: SAFETY_THRESHOLD,
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "model",
    }
}

/// Builds a chat request: system context and acknowledgement first, then the conversation.
///
/// The final message is always sent as a user turn.
pub(crate) fn chat_request(
    messages: &[Message],
    context: Option<&RelationshipContext>,
) -> ResponderResult<GenerateContentRequest> {
    let (last, history) = messages
        .split_last()
        .ok_or(ResponderError::EmptyConversation)?;

    let system = counselor_system_context(messages.len() == 1, context);

    let mut contents = Vec::with_capacity(messages.len() + 2);
    contents.push(Content::text("user", system));
    contents.push(Content::text("model", COUNSELOR_ACKNOWLEDGEMENT));
    contents.extend(
        history
            .iter()
            .map(|m| Content::text(wire_role(m.role), m.content.as_str())),
    );
    contents.push(Content::text("user", last.content.as_str()));

    Ok(GenerateContentRequest {
        contents,
        generation_config: GenerationConfig::with_temperature(CHAT_TEMPERATURE),
        safety_settings: safety_settings(),
    })
}

pub(crate) fn analysis_request(data: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::text("user", data_analysis_prompt(data))],
        generation_config: GenerationConfig::with_temperature(ANALYSIS_TEMPERATURE),
        safety_settings: safety_settings(),
    }
}

/// Concatenates the text parts of the first candidate.
///
/// A response without candidates (for example a safety block) yields an empty string.
pub(crate) fn response_text(body: &str) -> ResponderResult<String> {
    let parsed: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| ResponderError::Malformed(e.to_string()))?;

    let text = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    Ok(text)
}

/// Maps a non-success HTTP status and body to a classified failure.
pub(crate) fn classify_failure(status: u16, body: &str) -> ResponderError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string());
    let lower = message.to_lowercase();

    if status == 429 || lower.contains("quota") {
        return ResponderError::QuotaExceeded;
    }
    if status == 404 || lower.contains("not found") {
        return ResponderError::ModelUnavailable;
    }
    if matches!(status, 400 | 401 | 403) && (lower.contains("api key") || lower.contains("api_key"))
    {
        return ResponderError::InvalidApiKey;
    }

    ResponderError::Upstream {
        status,
        message: message.chars().take(MAX_ERROR_MESSAGE_CHARS).collect(),
    }
}

/// Responder backed by the Gemini REST API.
#[derive(Clone, Debug)]
pub struct GeminiResponder {
    cfg: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiResponder {
    pub fn new(cfg: GeminiConfig) -> Self {
        Self {
            cfg,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.cfg
    }

    async fn generate_content(&self, request: &GenerateContentRequest) -> ResponderResult<String> {
        let api_key = self.cfg.api_key().ok_or(ResponderError::MissingApiKey)?;

        tracing::debug!(model = self.cfg.model(), turns = request.contents.len(), "sending to Gemini");

        let response = self
            .client
            .post(self.cfg.generate_content_url())
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = classify_failure(status.as_u16(), &body);
            tracing::error!("Gemini API error: {}", err);
            return Err(err);
        }

        let text = response_text(&body)?;
        if text.trim().is_empty() {
            return Err(ResponderError::EmptyResponse);
        }

        tracing::debug!(length = text.len(), "Gemini response received");
        Ok(text)
    }
}

#[async_trait::async_trait]
impl Responder for GeminiResponder {
    async fn counsel(
        &self,
        messages: &[Message],
        context: Option<&RelationshipContext>,
    ) -> ResponderResult<String> {
        let request = chat_request(messages, context)?;
        self.generate_content(&request).await
    }

    async fn analyze(&self, data: &str) -> ResponderResult<String> {
        let request = analysis_request(data);
        let text = self.generate_content(&request).await?;
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_json(request: &GenerateContentRequest) -> serde_json::Value {
        serde_json::to_value(request).unwrap()
    }

    #[test]
    fn test_chat_request_seeds_system_context_and_maps_roles() {
        let messages = vec![
            Message::user("We keep arguing."),
            Message::assistant("That sounds hard."),
            Message::user("What should we do?"),
        ];
        let json = request_json(&chat_request(&messages, None).unwrap());
        let contents = json["contents"].as_array().unwrap();

        assert_eq!(contents.len(), 5);
        assert_eq!(contents[0]["role"], "user");
        assert!(contents[0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .starts_with("You are HeartGuide"));
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["parts"][0]["text"], "We keep arguing.");
        assert_eq!(contents[3]["role"], "model");
        assert_eq!(contents[4]["role"], "user");
        assert_eq!(contents[4]["parts"][0]["text"], "What should we do?");

        assert_eq!(json["generationConfig"]["topK"], 40);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 2048);
        assert_eq!(json["safetySettings"].as_array().unwrap().len(), 4);
        assert_eq!(json["safetySettings"][0]["threshold"], "BLOCK_ONLY_HIGH");
    }

    #[test]
    fn test_chat_request_first_turn_has_crisis_check() {
        let messages = vec![Message::user("hello")];
        let ctx = RelationshipContext {
            additional_notes: Some("Together for: 2 years".into()),
            ..RelationshipContext::default()
        };
        let json = request_json(&chat_request(&messages, Some(&ctx)).unwrap());
        let system = json["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(system.contains("Immediate safety concerns"));
        assert!(system.contains("- Additional Notes: Together for: 2 years"));
    }

    #[test]
    fn test_chat_request_rejects_empty_conversation() {
        assert!(matches!(
            chat_request(&[], None),
            Err(ResponderError::EmptyConversation)
        ));
    }

    #[test]
    fn test_analysis_request_embeds_data() {
        let json = request_json(&analysis_request("We fight about chores."));
        let prompt = json["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("We fight about chores."));
        assert_eq!(json["contents"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_response_text_joins_parts() {
        let body = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello "},{"text":"there"}]}}]}"#;
        assert_eq!(response_text(body).unwrap(), "Hello there");
    }

    #[test]
    fn test_response_text_empty_without_candidates() {
        assert_eq!(response_text(r#"{"promptFeedback":{}}"#).unwrap(), "");
        assert_eq!(response_text(r#"{"candidates":[{}]}"#).unwrap(), "");
    }

    #[test]
    fn test_response_text_malformed() {
        assert!(matches!(
            response_text("<html>"),
            Err(ResponderError::Malformed(_))
        ));
    }

    #[test]
    fn test_classify_failure() {
        assert!(matches!(
            classify_failure(429, "{}"),
            ResponderError::QuotaExceeded
        ));
        assert!(matches!(
            classify_failure(
                400,
                r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key."}}"#
            ),
            ResponderError::InvalidApiKey
        ));
        assert!(matches!(
            classify_failure(404, r#"{"error":{"message":"models/x is not found"}}"#),
            ResponderError::ModelUnavailable
        ));
        assert!(matches!(
            classify_failure(500, "You exceeded your current quota"),
            ResponderError::QuotaExceeded
        ));
        match classify_failure(503, r#"{"error":{"message":"overloaded"}}"#) {
            ResponderError::Upstream { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "overloaded");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        let responder = GeminiResponder::new(GeminiConfig::new(None, None, None).unwrap());
        let err = responder.analyze("We argue.").await.unwrap_err();
        assert!(matches!(err, ResponderError::MissingApiKey));

        let err = responder
            .counsel(&[Message::user("hi")], None)
            .await
            .unwrap_err();
        assert!(matches!(err, ResponderError::MissingApiKey));
    }
}
