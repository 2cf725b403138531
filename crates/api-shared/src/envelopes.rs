//! JSON request and response envelopes shared by the HTTP handlers.
//!
//! Every response carries a `success` flag; optional fields are omitted when absent.

use crate::counsel::AnalysisOutcome;
use heartguide_types::{Message, OnboardingData, RelationshipContext};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Reply of `GET /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatStatusRes {
    pub success: bool,
    pub message: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeReq {
    /// Free-text relationship information.
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRes {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    /// Present and `true` when the offline fallback produced the analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalyzeRes {
    pub fn from_outcome(outcome: AnalysisOutcome) -> Self {
        Self {
            success: true,
            analysis: Some(outcome.analysis),
            fallback: outcome.fallback.then_some(true),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            analysis: None,
            fallback: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ChatReq {
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<RelationshipContext>,
    /// Onboarding answers, used only when `context` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onboarding: Option<OnboardingData>,
}

impl ChatReq {
    /// Context to send with the conversation: the explicit one, else one built from onboarding.
    pub fn resolved_context(&self) -> Option<RelationshipContext> {
        self.context
            .clone()
            .or_else(|| self.onboarding.as_ref().and_then(OnboardingData::to_context))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatRes {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatRes {
    pub fn reply(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_res_omits_fallback_for_remote_result() {
        let res = AnalyzeRes::from_outcome(AnalysisOutcome {
            analysis: "remote".into(),
            fallback: false,
        });
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "analysis": "remote" }));
    }

    #[test]
    fn test_analyze_res_marks_fallback() {
        let res = AnalyzeRes::from_outcome(AnalysisOutcome {
            analysis: "local".into(),
            fallback: true,
        });
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["fallback"], true);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_envelopes() {
        let json = serde_json::to_value(AnalyzeRes::error("Data cannot be empty")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "error": "Data cannot be empty" })
        );

        let json = serde_json::to_value(ChatRes::error("boom")).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "error": "boom" }));
    }

    #[test]
    fn test_chat_req_defaults() {
        let req: ChatReq = serde_json::from_str("{}").unwrap();
        assert!(req.messages.is_empty());
        assert!(req.context.is_none());
        assert!(req.resolved_context().is_none());
    }

    #[test]
    fn test_chat_req_builds_context_from_onboarding() {
        let req: ChatReq = serde_json::from_str(
            r#"{
                "messages": [{"role":"user","content":"hi"}],
                "onboarding": {"partnerName":"Sam","relationshipDuration":"2 years"}
            }"#,
        )
        .unwrap();
        let ctx = req.resolved_context().unwrap();
        assert_eq!(
            ctx.additional_notes.as_deref(),
            Some("Partner's name: Sam\nTogether for: 2 years")
        );
    }

    #[test]
    fn test_chat_req_explicit_context_wins() {
        let req: ChatReq = serde_json::from_str(
            r#"{
                "context": {"additionalNotes":"explicit"},
                "onboarding": {"partnerName":"Sam"}
            }"#,
        )
        .unwrap();
        assert_eq!(
            req.resolved_context().unwrap().additional_notes.as_deref(),
            Some("explicit")
        );
    }
}
