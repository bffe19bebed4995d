use serde::{Deserialize, Serialize};

/// API response for health check
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
}
