//! Constants used throughout the HeartGuide core crate.
//!
//! Keyword lists drive signal detection; the remaining strings are the fixed prose of the
//! fallback report. Keeping them in one place makes the report text easy to review.

/// Keywords suggesting the user is describing something that is going well.
pub const POSITIVE_KEYWORDS: &[&str] = &["working", "good", "love", "happy"];

/// Keywords suggesting the couple already keeps up shared rituals.
pub const QUALITY_TIME_KEYWORDS: &[&str] = &["date night", "time together"];

/// Keywords suggesting issues are getting worse over time.
pub const ESCALATION_KEYWORDS: &[&str] = &["escalat", "worse", "getting bad"];

/// Maximum number of challenge categories named in the Key Observations sentence.
pub const MAX_LISTED_CHALLENGES: usize = 3;

pub const POSITIVE_ASPECTS_NOTE: &str = "You mentioned some positive aspects in your relationship";
pub const QUALITY_TIME_NOTE: &str = "You prioritize quality time together";

pub const PREAMBLE: &str = "Thank you for sharing this information about your relationship. Based on what you've provided, here's my analysis:";

pub const HEADING_KEY_OBSERVATIONS: &str = "Key Observations";
pub const HEADING_PATTERNS: &str = "Patterns I Notice";
pub const HEADING_STRENGTHS: &str = "Strengths to Build On";
pub const HEADING_GROWTH: &str = "Areas for Growth";
pub const HEADING_RECOMMENDATIONS: &str = "Actionable Recommendations";

pub const ESCALATION_PATTERN: &str = "There seems to be a pattern where conflicts or issues are escalating. This is common when communication breaks down or when underlying needs aren't being addressed.";

pub const DEFAULT_STRENGTH: &str = "The fact that you're seeking help and reflecting on your relationship shows commitment and self-awareness—these are significant strengths.";
pub const RITUALS_STRENGTH: &str = "Maintaining positive rituals like date nights is a great foundation. These moments of connection can help buffer against challenges.";

pub const GROWTH_COMMUNICATION: &str = "**Communication**: Consider exploring how you both express needs and listen to each other. Sometimes, the issue isn't what's said but how it's heard.";
pub const GROWTH_CONFLICT: &str = "**Conflict Resolution**: When arguments escalate, it often means emotions are running high. Learning to take breaks and return to discussions when calmer can be transformative.";
pub const GROWTH_TRUST: &str = "**Trust**: Rebuilding trust takes time and consistent actions. Focus on small, reliable behaviors that demonstrate reliability and honesty.";
pub const GROWTH_GENERIC: &str = "Based on your description, I'd recommend focusing on maintaining open communication and ensuring both partners feel heard and valued.";

pub const REC_SAFE_SPACE: &str = "**Create a Safe Space for Discussion**: Set aside dedicated time (not during conflicts) to discuss your relationship. Use \"I feel\" statements and avoid blame.";
pub const REC_ACTIVE_LISTENING: &str = "**Practice Active Listening**: When your partner speaks, focus on understanding their perspective before responding. Reflect back what you heard to ensure clarity.";
pub const REC_CHECK_INS: &str = "**Regular Check-ins**: Schedule weekly relationship check-ins where you both share what's working and what needs attention.";
pub const REC_SMALL_WINS: &str = "**Focus on Small Wins**: Instead of trying to fix everything at once, pick one area to improve. Small, consistent changes often lead to bigger transformations.";
pub const REC_PROFESSIONAL_SUPPORT: &str = "**Seek Professional Support**: Consider couples counseling or relationship workshops. A neutral third party can help identify patterns you might not see.";
pub const REC_PRIORITIZE_CONNECTION: &str = "**Prioritize Connection**: Even during challenging times, find moments to connect—whether through shared activities, physical touch, or simply being present together.";

pub const CLOSING_RULE: &str = "---";
pub const CLOSING_ENCOURAGEMENT: &str = "Remember, every relationship goes through challenges. What matters is how you navigate them together. Be patient with yourself and your partner, and celebrate progress, no matter how small.";
pub const CLOSING_DISCLAIMER: &str = "*Note: This analysis is based on the information you provided. For deeper, personalized guidance, consider working with a licensed relationship counselor.*";
