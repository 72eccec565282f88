use tracing::debug;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report liveness together with the size of each collection.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let players = state.players().len().await;
    let teams = state.teams().len().await;
    let id_policy = state.config().id_policy();
    debug!(players, teams, ?id_policy, "health check");

    HealthResponse::ok(players, teams)
}
