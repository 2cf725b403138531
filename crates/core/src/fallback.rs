//! Offline fallback analysis.
//!
//! Turns a free-text relationship description into a fixed-structure markdown report without
//! any external service. Used whenever the primary responder fails, times out, or returns
//! nothing, so it must be total and fast.
//!
//! Report layout, every heading always present:
//! ```markdown
//! <preamble>
//!
//! ## Key Observations
//! ## Patterns I Notice
//! ## Strengths to Build On
//! ## Areas for Growth
//! ## Actionable Recommendations
//! 1. .. 5.
//!
//! ---
//!
//! <encouragement>
//!
//! <disclaimer>
//! ```

use crate::constants::*;
use crate::signals::{ChallengeCategory, Signals};

/// Generates the fallback analysis report for `raw_text`.
///
/// Callers are expected to reject blank input first; the function still returns a complete
/// report for it. Output depends only on the input.
pub fn generate(raw_text: &str) -> String {
    let signals = Signals::extract(raw_text);
    tracing::debug!(
        challenges = signals.challenges.len(),
        strengths = signals.strengths.len(),
        has_duration = signals.duration.is_some(),
        has_tried = signals.tried.is_some(),
        "generating fallback analysis"
    );
    render(&signals)
}

/// Renders a report from already-extracted signals.
pub fn render(signals: &Signals) -> String {
    let mut report = Report::default();

    report.paragraph(PREAMBLE);

    report.heading(HEADING_KEY_OBSERVATIONS);
    if let Some(duration) = &signals.duration {
        report.paragraph(format!(
            "You've been together for {}, which shows you have a foundation to build upon.",
            duration.text
        ));
    }
    if !signals.challenges.is_empty() {
        let scope = if signals.challenges.len() > 1 {
            "several areas"
        } else {
            "an area"
        };
        let listed = signals
            .challenges
            .iter()
            .take(MAX_LISTED_CHALLENGES)
            .map(|c| c.display_name())
            .collect::<Vec<_>>()
            .join(", ");
        report.paragraph(format!(
            "I notice you're dealing with {} that many couples face: {}.",
            scope, listed
        ));
    }

    report.heading(HEADING_PATTERNS);
    if signals.escalating {
        report.paragraph(ESCALATION_PATTERN);
    }
    if let Some(tried) = &signals.tried {
        report.paragraph(format!(
            "You've already tried some approaches ({}), which shows you're actively working on your relationship. Sometimes, the challenge isn't the method but the timing or how it's implemented.",
            tried
        ));
    }

    report.heading(HEADING_STRENGTHS);
    if signals.strengths.is_empty() {
        report.paragraph(DEFAULT_STRENGTH);
    } else {
        report.paragraph(format!("{}.", signals.strengths.join(". ")));
    }
    if signals.quality_time {
        report.paragraph(RITUALS_STRENGTH);
    }

    report.heading(HEADING_GROWTH);
    // Only these three categories carry growth advice; the rest are named in Key Observations.
    for (category, advice) in [
        (ChallengeCategory::Communication, GROWTH_COMMUNICATION),
        (ChallengeCategory::Conflict, GROWTH_CONFLICT),
        (ChallengeCategory::Trust, GROWTH_TRUST),
    ] {
        if signals.has_challenge(category) {
            report.paragraph(advice);
        }
    }
    if signals.challenges.is_empty() {
        report.paragraph(GROWTH_GENERIC);
    }

    report.heading(HEADING_RECOMMENDATIONS);
    for (number, item) in recommendations(signals).iter().enumerate() {
        report.paragraph(format!("{}. {}", number + 1, item));
    }

    report.paragraph(CLOSING_RULE);
    report.paragraph(CLOSING_ENCOURAGEMENT);
    report.paragraph(CLOSING_DISCLAIMER);

    report.finish()
}

fn recommendations(signals: &Signals) -> [String; 5] {
    let listening = if signals.has_challenge(ChallengeCategory::Communication) {
        REC_ACTIVE_LISTENING
    } else {
        REC_CHECK_INS
    };

    let refine = match &signals.tried {
        Some(tried) => format!(
            "**Refine What You've Tried**: Since you've already tried {}, consider what worked and what didn't. Sometimes adjusting the approach or timing makes all the difference.",
            tried
        ),
        None => REC_PROFESSIONAL_SUPPORT.to_string(),
    };

    [
        REC_SAFE_SPACE.to_string(),
        listening.to_string(),
        REC_SMALL_WINS.to_string(),
        refine,
        REC_PRIORITIZE_CONNECTION.to_string(),
    ]
}

/// Blocks joined by blank lines.
#[derive(Default)]
struct Report {
    blocks: Vec<String>,
}

impl Report {
    fn paragraph(&mut self, text: impl Into<String>) {
        self.blocks.push(text.into());
    }

    fn heading(&mut self, title: &str) {
        self.blocks.push(format!("## {}", title));
    }

    fn finish(self) -> String {
        self.blocks.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADINGS: [&str; 5] = [
        "## Key Observations",
        "## Patterns I Notice",
        "## Strengths to Build On",
        "## Areas for Growth",
        "## Actionable Recommendations",
    ];

    fn section<'a>(report: &'a str, heading: &str) -> &'a str {
        let start = report.find(heading).expect("heading present") + heading.len();
        let rest = &report[start..];
        let end = rest
            .find("\n## ")
            .or_else(|| rest.find("\n---"))
            .unwrap_or(rest.len());
        &rest[..end]
    }

    #[test]
    fn test_generate_is_deterministic() {
        let input = "We've been dating 2 years. We argue about family and money.";
        assert_eq!(generate(input), generate(input));
    }

    #[test]
    fn test_generate_total_on_odd_inputs() {
        for input in ["", " ", ".", "tried", "日本語のテキスト", "1", "\n\n\n"] {
            let report = generate(input);
            assert!(!report.is_empty());
            for heading in HEADINGS {
                assert!(report.contains(heading), "missing {heading} for {input:?}");
            }
        }
    }

    #[test]
    fn test_every_heading_once_in_order() {
        let report = generate("Our communication is getting bad. We tried: a weekend away.");
        let mut last = 0;
        for heading in HEADINGS {
            assert_eq!(report.matches(heading).count(), 1, "{heading} count");
            let pos = report.find(heading).unwrap();
            assert!(pos > last || last == 0);
            last = pos;
        }
        assert!(report.starts_with(PREAMBLE));
        assert!(report.ends_with(CLOSING_DISCLAIMER));
        assert!(report.find("\n---\n").unwrap() > last);
    }

    #[test]
    fn test_exactly_five_numbered_recommendations() {
        for input in [
            "We had a quiet nice week.",
            "We talk but we tried: therapy. It got worse.",
        ] {
            let report = generate(input);
            let recs = section(&report, "## Actionable Recommendations");
            let numbered: Vec<&str> = recs
                .lines()
                .filter(|l| l.chars().next().is_some_and(|c| c.is_ascii_digit()))
                .collect();
            assert_eq!(numbered.len(), 5);
            for (i, line) in numbered.iter().enumerate() {
                assert!(line.starts_with(&format!("{}. **", i + 1)));
            }
        }
    }

    #[test]
    fn test_duration_interpolated_in_key_observations() {
        let report = generate("We have been together for 3 years and things are fine.");
        let observations = section(&report, "## Key Observations");
        assert!(observations
            .contains("You've been together for 3 years, which shows you have a foundation"));
    }

    #[test]
    fn test_fight_about_money_detects_conflict_and_financial() {
        let signals = Signals::extract("we fight about money all the time");
        assert!(signals.has_challenge(ChallengeCategory::Conflict));
        assert!(signals.has_challenge(ChallengeCategory::Financial));

        let report = render(&signals);
        let growth = section(&report, "## Areas for Growth");
        assert!(growth.contains(GROWTH_CONFLICT));
        assert!(growth.contains(GROWTH_COMMUNICATION));
        assert!(!growth.contains(GROWTH_TRUST));
        assert!(!growth.contains(GROWTH_GENERIC));

        let observations = section(&report, "## Key Observations");
        assert!(observations.contains(
            "I notice you're dealing with several areas that many couples face: communication, conflict, time."
        ));
    }

    #[test]
    fn test_quiet_text_uses_every_default() {
        let report = generate("We had a quiet nice week.");

        let observations = section(&report, "## Key Observations");
        assert_eq!(observations.trim(), "");

        let growth = section(&report, "## Areas for Growth");
        assert_eq!(growth.trim(), GROWTH_GENERIC);

        let strengths = section(&report, "## Strengths to Build On");
        assert_eq!(strengths.trim(), DEFAULT_STRENGTH);

        assert!(report.contains(&format!("2. {}", REC_CHECK_INS)));
        assert!(report.contains(&format!("4. {}", REC_PROFESSIONAL_SUPPORT)));
    }

    #[test]
    fn test_tried_clause_appears_in_patterns_and_item_four() {
        let report =
            generate("We've tried: couples counseling and journaling. It hasn't worked yet.");
        let patterns = section(&report, "## Patterns I Notice");
        assert!(patterns.contains("(couples counseling and journaling)"));
        assert!(report.contains(
            "4. **Refine What You've Tried**: Since you've already tried couples counseling and journaling, consider"
        ));
    }

    #[test]
    fn test_single_challenge_phrase_and_growth_order() {
        let report = generate("I feel he has a secret.");
        assert!(report.contains("I notice you're dealing with an area that many couples face: trust."));
        let growth = section(&report, "## Areas for Growth");
        assert_eq!(growth.trim(), GROWTH_TRUST);
    }

    #[test]
    fn test_growth_paragraphs_fixed_order() {
        let report = generate("Trust issues, constant argument, and we never talk.");
        let growth = section(&report, "## Areas for Growth");
        let comm = growth.find(GROWTH_COMMUNICATION).unwrap();
        let conflict = growth.find(GROWTH_CONFLICT).unwrap();
        let trust = growth.find(GROWTH_TRUST).unwrap();
        assert!(comm < conflict && conflict < trust);
        assert!(report.contains(&format!("2. {}", REC_ACTIVE_LISTENING)));
    }

    #[test]
    fn test_categories_capped_at_three_in_observations() {
        let report = generate("trust, intimacy, conflict, family and budget");
        assert!(report.contains("that many couples face: trust, intimacy, conflict."));
        assert!(!report.contains("conflict, family"));
    }

    #[test]
    fn test_strengths_joined_and_rituals_sentence() {
        let report = generate("Date night is good for us.");
        let strengths = section(&report, "## Strengths to Build On");
        assert!(strengths.contains(
            "You mentioned some positive aspects in your relationship. You prioritize quality time together."
        ));
        assert!(strengths.contains(RITUALS_STRENGTH));
        assert!(!strengths.contains(DEFAULT_STRENGTH));
    }

    #[test]
    fn test_escalation_sentence() {
        let report = generate("It keeps escalating.");
        let patterns = section(&report, "## Patterns I Notice");
        assert!(patterns.contains(ESCALATION_PATTERN));
    }

    #[test]
    fn test_output_is_blank_line_separated() {
        let report = generate("We had a quiet nice week.");
        assert!(!report.contains("\n\n\n"));
        assert!(report.contains(&format!("{}\n\n## Key Observations\n\n## Patterns I Notice", PREAMBLE)));
    }
}
