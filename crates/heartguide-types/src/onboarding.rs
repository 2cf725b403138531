//! Onboarding preferences collected before the first conversation.

use crate::conversation::RelationshipContext;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipStatus {
    Dating,
    Engaged,
    Married,
    Complicated,
    Other,
}

impl RelationshipStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipStatus::Dating => "dating",
            RelationshipStatus::Engaged => "engaged",
            RelationshipStatus::Married => "married",
            RelationshipStatus::Complicated => "complicated",
            RelationshipStatus::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CommunicationStyle {
    Direct,
    Indirect,
    ConflictAvoidant,
    NotSure,
}

impl CommunicationStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            CommunicationStyle::Direct => "direct",
            CommunicationStyle::Indirect => "indirect",
            CommunicationStyle::ConflictAvoidant => "conflict-avoidant",
            CommunicationStyle::NotSure => "not-sure",
        }
    }
}

/// Answers from the onboarding wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_status: Option<RelationshipStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_duration: Option<String>,
    #[serde(default)]
    pub primary_challenges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication_style: Option<CommunicationStyle>,
    #[serde(default)]
    pub completed_onboarding: bool,
}

impl OnboardingData {
    /// Folds the onboarding answers into free-text context notes.
    ///
    /// Returns `None` when no answer would produce a line, so callers can omit the context
    /// entirely.
    pub fn to_context(&self) -> Option<RelationshipContext> {
        let mut lines: Vec<String> = Vec::new();

        if let Some(name) = non_blank(self.partner_name.as_deref()) {
            lines.push(format!("Partner's name: {}", name));
        }
        if let Some(status) = self.relationship_status {
            lines.push(format!("Relationship status: {}", status.as_str()));
        }
        if let Some(duration) = non_blank(self.relationship_duration.as_deref()) {
            lines.push(format!("Together for: {}", duration));
        }
        if !self.primary_challenges.is_empty() {
            lines.push(format!(
                "Main challenges: {}",
                self.primary_challenges.join(", ")
            ));
        }
        if let Some(style) = self.communication_style {
            lines.push(format!("Communication style: {}", style.as_str()));
        }

        if lines.is_empty() {
            return None;
        }

        Some(RelationshipContext {
            additional_notes: Some(lines.join("\n")),
            ..RelationshipContext::default()
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_context_collects_all_answers() {
        let data = OnboardingData {
            partner_name: Some("Sam".into()),
            relationship_status: Some(RelationshipStatus::Married),
            relationship_duration: Some("6 years".into()),
            primary_challenges: vec!["communication".into(), "trust".into()],
            communication_style: Some(CommunicationStyle::ConflictAvoidant),
            completed_onboarding: true,
        };

        let ctx = data.to_context().unwrap();
        assert_eq!(
            ctx.additional_notes.as_deref(),
            Some(
                "Partner's name: Sam\nRelationship status: married\nTogether for: 6 years\n\
                 Main challenges: communication, trust\nCommunication style: conflict-avoidant"
            )
        );
        assert!(ctx.relationship_duration.is_none());
    }

    #[test]
    fn test_to_context_none_when_nothing_answered() {
        let data = OnboardingData {
            partner_name: Some("   ".into()),
            completed_onboarding: true,
            ..OnboardingData::default()
        };
        assert!(data.to_context().is_none());
    }

    #[test]
    fn test_onboarding_deserializes_wizard_payload() {
        let json = r#"{"relationshipStatus":"complicated","primaryChallenges":["time"],"communicationStyle":"not-sure","completedOnboarding":true}"#;
        let data: OnboardingData = serde_json::from_str(json).unwrap();
        assert_eq!(data.relationship_status, Some(RelationshipStatus::Complicated));
        assert_eq!(data.communication_style, Some(CommunicationStyle::NotSure));
        assert_eq!(data.primary_challenges, vec!["time".to_string()]);
    }
}
