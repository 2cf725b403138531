//! # API Shared
//!
//! Shared definitions and services for the HeartGuide HTTP API.
//!
//! Contains:
//! - JSON request/response envelopes (`envelopes` module)
//! - `HealthService` for liveness replies
//! - `CounselService`, which tries the primary responder and falls back to the offline report
//!
//! Used by `api-rest` and the `heartguide-run` binary.

pub mod counsel;
pub mod envelopes;
pub mod health;

pub use counsel::{AnalysisOutcome, CounselService};
pub use envelopes::*;
pub use health::HealthService;
