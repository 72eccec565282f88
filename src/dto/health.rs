use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Health status, always "ok" while the process serves requests.
    pub status: String,
    /// Number of players currently stored.
    pub players: usize,
    /// Number of teams currently stored.
    pub teams: usize,
}

impl HealthResponse {
    /// Create a health response indicating the system is operational.
    pub fn ok(players: usize, teams: usize) -> Self {
        Self {
            status: "ok".to_string(),
            players,
            teams,
        }
    }
}
