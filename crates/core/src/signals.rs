//! Signal extraction from free-text relationship descriptions.
//!
//! Keyword detection is plain substring containment on a lowercased copy of the input. Only
//! the duration mention and the tried-clause need pattern capture, and both read the original
//! text so the captured substrings keep the user's casing.

use crate::constants::{
    ESCALATION_KEYWORDS, POSITIVE_ASPECTS_NOTE, POSITIVE_KEYWORDS, QUALITY_TIME_KEYWORDS,
    QUALITY_TIME_NOTE,
};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Relationship challenge tags, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeCategory {
    Communication,
    Trust,
    Intimacy,
    Conflict,
    Time,
    Boundaries,
    Expectations,
    Family,
    Financial,
}

impl ChallengeCategory {
    /// Every category, in the order detection reports them.
    pub const ALL: [ChallengeCategory; 9] = [
        ChallengeCategory::Communication,
        ChallengeCategory::Trust,
        ChallengeCategory::Intimacy,
        ChallengeCategory::Conflict,
        ChallengeCategory::Time,
        ChallengeCategory::Boundaries,
        ChallengeCategory::Expectations,
        ChallengeCategory::Family,
        ChallengeCategory::Financial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChallengeCategory::Communication => "communication",
            ChallengeCategory::Trust => "trust",
            ChallengeCategory::Intimacy => "intimacy",
            ChallengeCategory::Conflict => "conflict",
            ChallengeCategory::Time => "time",
            ChallengeCategory::Boundaries => "boundaries",
            ChallengeCategory::Expectations => "expectations",
            ChallengeCategory::Family => "family",
            ChallengeCategory::Financial => "financial",
        }
    }

    /// Lowercase keywords whose presence marks this category.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            ChallengeCategory::Communication => &[
                "communication",
                "talk",
                "discuss",
                "conversation",
                "argue",
                "fight",
            ],
            ChallengeCategory::Trust => &["trust", "honesty", "lie", "secret", "suspicious"],
            ChallengeCategory::Intimacy => &[
                "intimacy",
                "sex",
                "physical",
                "emotional",
                "connection",
                "close",
            ],
            ChallengeCategory::Conflict => &[
                "conflict",
                "argument",
                "disagree",
                "fight",
                "dispute",
                "escalating",
            ],
            ChallengeCategory::Time => &["time", "together", "quality time", "date", "spend"],
            ChallengeCategory::Boundaries => &["boundary", "space", "privacy", "independence"],
            ChallengeCategory::Expectations => &["expect", "disappoint", "want", "need", "should"],
            ChallengeCategory::Family => &["family", "parent", "in-law", "relative"],
            ChallengeCategory::Financial => &["money", "finance", "budget", "spend", "cost"],
        }
    }

    /// Display form used in report prose.
    pub fn display_name(self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl std::fmt::Display for ChallengeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Day,
    Week,
    Month,
    Year,
}

impl DurationUnit {
    fn parse(unit: &str) -> Option<Self> {
        match unit.to_lowercase().as_str() {
            "day" => Some(DurationUnit::Day),
            "week" => Some(DurationUnit::Week),
            "month" => Some(DurationUnit::Month),
            "year" => Some(DurationUnit::Year),
            _ => None,
        }
    }
}

/// First "<number> <unit>" mention in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationMention {
    /// Saturates at `u64::MAX` for absurdly long digit runs.
    pub quantity: u64,
    pub unit: DurationUnit,
    /// The matched substring exactly as the user wrote it.
    pub text: String,
}

/// Everything the fallback report needs to know about the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signals {
    pub duration: Option<DurationMention>,
    pub challenges: Vec<ChallengeCategory>,
    pub strengths: Vec<&'static str>,
    pub tried: Option<String>,
    pub escalating: bool,
    pub quality_time: bool,
}

impl Signals {
    /// Extracts all signals from `raw_text`.
    ///
    /// Total over every input, including the empty string.
    pub fn extract(raw_text: &str) -> Self {
        let lower = raw_text.to_lowercase();

        Self {
            duration: extract_duration(raw_text),
            challenges: detect_challenges(&lower),
            strengths: detect_strengths(&lower),
            tried: extract_tried(raw_text),
            escalating: contains_any(&lower, ESCALATION_KEYWORDS),
            quality_time: contains_any(&lower, QUALITY_TIME_KEYWORDS),
        }
    }

    pub fn has_challenge(&self, category: ChallengeCategory) -> bool {
        self.challenges.contains(&category)
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn duration_regex() -> &'static Regex {
    static DURATION_RE: OnceLock<Regex> = OnceLock::new();
    DURATION_RE.get_or_init(|| {
        Regex::new(r"(?i)([0-9]+)\s*(year|month|week|day)s?").expect("duration regex is valid")
    })
}

fn tried_regexes() -> &'static [Regex; 2] {
    static TRIED_RES: OnceLock<[Regex; 2]> = OnceLock::new();
    TRIED_RES.get_or_init(|| {
        [
            Regex::new(r"(?i)tried[:\-]?\s*([^.]+)").expect("tried regex is valid"),
            Regex::new(r"(?i)we've tried[:\-]?\s*([^.]+)").expect("tried regex is valid"),
        ]
    })
}

/// Finds the first duration mention such as `3 years` or `18months`.
pub fn extract_duration(raw_text: &str) -> Option<DurationMention> {
    let caps = duration_regex().captures(raw_text)?;
    let text = caps.get(0)?.as_str().to_string();
    let quantity = caps[1].parse::<u64>().unwrap_or(u64::MAX);
    let unit = DurationUnit::parse(&caps[2])?;

    Some(DurationMention {
        quantity,
        unit,
        text,
    })
}

/// Returns every category with at least one keyword in `lower_text`, in enumeration order.
pub fn detect_challenges(lower_text: &str) -> Vec<ChallengeCategory> {
    ChallengeCategory::ALL
        .into_iter()
        .filter(|category| contains_any(lower_text, category.keywords()))
        .collect()
}

pub fn detect_strengths(lower_text: &str) -> Vec<&'static str> {
    let mut notes = Vec::new();
    if contains_any(lower_text, POSITIVE_KEYWORDS) {
        notes.push(POSITIVE_ASPECTS_NOTE);
    }
    if contains_any(lower_text, QUALITY_TIME_KEYWORDS) {
        notes.push(QUALITY_TIME_NOTE);
    }
    notes
}

/// Captures what follows "tried" up to the next period, trimmed.
///
/// The capture may be empty when only whitespace sits between the keyword and the period.
pub fn extract_tried(raw_text: &str) -> Option<String> {
    tried_regexes()
        .iter()
        .find_map(|re| re.captures(raw_text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}
