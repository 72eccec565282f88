//! Business logic behind the `/players` routes.

use tracing::{debug, info};

use crate::{
    dao::models::{PlayerDraft, PlayerPatch},
    dto::player::{CreatePlayerRequest, PlayerList, PlayerSummary, UpdatePlayerRequest},
    error::ServiceError,
    state::SharedState,
};

fn player_not_found(id: u64) -> ServiceError {
    ServiceError::NotFound(format!("player `{id}` not found"))
}

/// Return every stored player in creation order.
pub async fn list_players(state: &SharedState) -> PlayerList {
    let players = state
        .players()
        .list()
        .await
        .into_iter()
        .map(PlayerSummary::from)
        .collect();

    PlayerList { players }
}

/// Validate the request and append a new player.
pub async fn create_player(
    state: &SharedState,
    request: CreatePlayerRequest,
) -> Result<PlayerSummary, ServiceError> {
    let draft = PlayerDraft::try_from(request)?;
    let player = state.players().insert(draft).await;

    info!(
        player_id = player.id,
        name = %player.name,
        team_id = ?player.team_id,
        "player created"
    );
    Ok(player.into())
}

/// Fetch a single player by identifier.
pub async fn get_player(state: &SharedState, id: u64) -> Result<PlayerSummary, ServiceError> {
    let player = state
        .players()
        .get(id)
        .await
        .ok_or_else(|| player_not_found(id))?;

    Ok(player.into())
}

/// Overwrite the fields present in `request` on the matching player.
pub async fn update_player(
    state: &SharedState,
    id: u64,
    request: UpdatePlayerRequest,
) -> Result<PlayerSummary, ServiceError> {
    let patch = PlayerPatch::from(request);
    let player = state
        .players()
        .update(id, patch)
        .await
        .ok_or_else(|| player_not_found(id))?;

    debug!(player_id = id, "player updated");
    Ok(player.into())
}

/// Remove the matching player from the collection.
pub async fn delete_player(state: &SharedState, id: u64) -> Result<(), ServiceError> {
    state
        .players()
        .remove(id)
        .await
        .ok_or_else(|| player_not_found(id))?;

    info!(player_id = id, "player deleted");
    Ok(())
}
