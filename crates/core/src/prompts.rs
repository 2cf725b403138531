//! Prompt text sent to the primary responder.

use heartguide_types::RelationshipContext;

pub const COUNSELOR_SYSTEM_PROMPT: &str = r#"You are HeartGuide, an empathetic and professional relationship counselor AI. Your role is to:

1. **Listen Actively**: Acknowledge emotions and validate feelings without judgment
2. **Ask Thoughtful Questions**: Help users explore their feelings and situations deeper
3. **Provide Evidence-Based Advice**: Draw from established relationship psychology (Gottman Method, Emotionally Focused Therapy, etc.)
4. **Maintain Boundaries**: You're a supportive guide, not a replacement for professional therapy in crisis situations
5. **Encourage Action**: Provide practical, actionable steps users can take

**Communication Style**:
- Warm, compassionate, and non-judgmental
- Use "I" statements when offering perspectives ("I notice...", "I wonder if...")
- Ask open-ended questions to encourage reflection
- Acknowledge both partners' perspectives when applicable
- Be direct but gentle when addressing difficult truths

**Safety Protocols**:
- If you detect signs of abuse, crisis, or severe mental health issues, encourage immediate professional help
- Remind users that you complement, but don't replace, professional therapy
- Never make definitive diagnoses or prescribe treatments

**Conversation Structure**:
1. Validate their feelings first
2. Clarify the situation with questions if needed
3. Offer insights or reframe perspectives
4. Provide 2-3 concrete action steps
5. Check in on their readiness to try these steps

Remember: Your goal is to empower users to understand their relationships better and make informed decisions about their path forward."#;

/// Seeded as the model's first reply so the system context reads as an accepted instruction.
pub const COUNSELOR_ACKNOWLEDGEMENT: &str = "I understand. I'm here to provide empathetic, evidence-based relationship guidance. How can I support you today?";

pub const CRISIS_RESOURCES: &str = r#"**Immediate Help Resources**:
- **National Domestic Violence Hotline**: 1-800-799-7233 (24/7)
- **National Suicide Prevention Lifeline**: 988 (24/7)
- **Crisis Text Line**: Text HOME to 741741
- **SAMHSA National Helpline**: 1-800-662-4357 (Mental Health/Substance Abuse)

For ongoing support, please consider reaching out to a licensed therapist in your area."#;

/// Renders the structured context as a bullet list for the system prompt.
///
/// Only fields that are present produce a line; the header is always emitted.
pub fn contextual_prompt(context: &RelationshipContext) -> String {
    let mut parts = vec!["**Context Information:**".to_string()];

    if let Some(duration) = context.relationship_duration.as_deref().filter(|d| !d.is_empty()) {
        parts.push(format!("- Relationship Duration: {}", duration));
    }
    if let Some(category) = context.issue_category {
        parts.push(format!("- Primary Issue: {}", category.label()));
    }
    if let Some(urgency) = context.urgency_level {
        parts.push(format!("- Urgency Level: {}", urgency));
    }
    if let Some(previous) = context.previous_therapy {
        parts.push(format!(
            "- Previous Therapy Experience: {}",
            if previous { "Yes" } else { "No" }
        ));
    }
    if let Some(notes) = context.additional_notes.as_deref().filter(|n| !n.is_empty()) {
        parts.push(format!("- Additional Notes: {}", notes));
    }

    parts.join("\n")
}

/// Extra instructions added on the first turn of a conversation.
pub fn crisis_detection_prompt() -> &'static str {
    "Before responding, quickly assess if this message contains:
- Immediate safety concerns (abuse, self-harm, violence)
- Crisis-level mental health symptoms
- Urgent situations requiring professional intervention

If detected, prioritize safety in your response and direct them to appropriate resources."
}

/// Builds the full system context for a chat turn.
pub fn counselor_system_context(first_turn: bool, context: Option<&RelationshipContext>) -> String {
    let mut system = COUNSELOR_SYSTEM_PROMPT.to_string();
    if first_turn {
        system.push_str("\n\n");
        system.push_str(crisis_detection_prompt());
    }
    if let Some(context) = context {
        system.push_str("\n\n");
        system.push_str(&contextual_prompt(context));
    }
    system
}

/// Prompt asking the model for a structured analysis of user-provided data.
pub fn data_analysis_prompt(data: &str) -> String {
    format!(
        "{COUNSELOR_SYSTEM_PROMPT}

You are analyzing relationship data provided by a user. Provide a thoughtful, structured analysis.

**User's Data:**
{data}

Please provide:
1. **Key Observations**: What stands out in this data?
2. **Patterns**: What recurring themes or issues do you notice?
3. **Strengths**: What positive aspects can be built upon?
4. **Areas for Growth**: What needs attention?
5. **Actionable Recommendations**: 3-5 specific steps they can take

Be compassionate, specific, and practical in your analysis."
    )
}
