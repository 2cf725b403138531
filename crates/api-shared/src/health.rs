use crate::envelopes::{ChatStatusRes, HealthRes};

/// Version reported by `GET /api/chat`.
pub const API_VERSION: &str = "1.0.0";

/// Simple health service used by the REST API
///
/// This service provides a standardised way to check the health status of HeartGuide.
pub struct HealthService;

impl HealthService {
    /// Static method to check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "HeartGuide is alive".into(),
        }
    }

    /// Status reply for the chat endpoint, kept for clients that probe `GET /api/chat`.
    pub fn chat_status() -> ChatStatusRes {
        ChatStatusRes {
            success: true,
            message: "HeartGuide API is running".into(),
            version: API_VERSION.into(),
        }
    }
}
