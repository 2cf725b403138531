//! Conversation wire and domain types.
//!
//! Messages and relationship context travel between the browser client, the REST layer and the
//! primary responder. Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_data: Option<RelationshipContext>,
}

impl Message {
    /// Creates a user turn with no id or timestamp.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            role: Role::User,
            content: content.into(),
            timestamp: None,
            context_data: None,
        }
    }

    /// Creates an assistant turn with no id or timestamp.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            ..Self::user(content)
        }
    }
}

/// Primary issue a user selected for the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum IssueCategory {
    Communication,
    Trust,
    Intimacy,
    ConflictResolution,
    LifeTransitions,
    FamilyDynamics,
    Financial,
    Other,
}

impl IssueCategory {
    /// Human-readable label used in prompts.
    pub fn label(self) -> &'static str {
        match self {
            IssueCategory::Communication => "Communication Issues",
            IssueCategory::Trust => "Trust & Honesty",
            IssueCategory::Intimacy => "Intimacy & Connection",
            IssueCategory::ConflictResolution => "Conflict Resolution",
            IssueCategory::LifeTransitions => "Life Transitions",
            IssueCategory::FamilyDynamics => "Family Dynamics",
            IssueCategory::Financial => "Financial Concerns",
            IssueCategory::Other => "General Relationship Concerns",
        }
    }
}

/// How pressing the user considers their situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
        };
        f.write_str(s)
    }
}

/// Optional structured context forwarded to the primary responder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_category: Option<IssueCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency_level: Option<UrgencyLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_therapy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}
