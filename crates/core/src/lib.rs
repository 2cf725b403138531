//! # HeartGuide Core
//!
//! Core logic for the HeartGuide counseling backend:
//! - Signal extraction from free-text relationship descriptions
//! - The offline fallback analysis report
//! - Prompt text for the hosted model
//!
//! **No API concerns**: HTTP servers, remote model calls, and configuration belong in
//! `heartguide-responder`, `api-shared`, or `api-rest`. Nothing here performs I/O.

pub mod constants;
pub mod fallback;
pub mod prompts;
pub mod signals;

pub use fallback::generate as generate_fallback_analysis;
pub use signals::{ChallengeCategory, DurationMention, DurationUnit, Signals};
