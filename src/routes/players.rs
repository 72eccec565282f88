use axum::{Json, Router, extract::State, http::StatusCode, routing::get};

use crate::{
    dto::player::{CreatePlayerRequest, PlayerList, PlayerSummary, UpdatePlayerRequest},
    error::{AppError, ErrorBody},
    routes::extract::{ApiJson, ApiPath},
    services::player_service,
    state::SharedState,
};

/// Collection and item endpoints for players.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/players", get(list_players).post(create_player))
        .route(
            "/players/{player_id}",
            get(get_player).put(update_player).delete(delete_player),
        )
}

/// Get a list of all players.
#[utoipa::path(
    get,
    path = "/players",
    tag = "players",
    responses((status = 200, description = "List of all players", body = PlayerList))
)]
pub async fn list_players(State(state): State<SharedState>) -> Json<PlayerList> {
    Json(player_service::list_players(&state).await)
}

/// Create a new player.
#[utoipa::path(
    post,
    path = "/players",
    tag = "players",
    request_body = CreatePlayerRequest,
    responses(
        (status = 201, description = "Player created successfully", body = PlayerSummary),
        (status = 400, description = "Invalid input", body = ErrorBody)
    )
)]
pub async fn create_player(
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<PlayerSummary>), AppError> {
    let player = player_service::create_player(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(player)))
}

/// Get a specific player by ID.
#[utoipa::path(
    get,
    path = "/players/{player_id}",
    tag = "players",
    params(("player_id" = u64, Path, description = "ID of the player to retrieve")),
    responses(
        (status = 200, description = "Player details", body = PlayerSummary),
        (status = 404, description = "Player not found", body = ErrorBody)
    )
)]
pub async fn get_player(
    State(state): State<SharedState>,
    ApiPath(player_id): ApiPath<u64>,
) -> Result<Json<PlayerSummary>, AppError> {
    Ok(Json(player_service::get_player(&state, player_id).await?))
}

/// Update a player's details.
#[utoipa::path(
    put,
    path = "/players/{player_id}",
    tag = "players",
    params(("player_id" = u64, Path, description = "ID of the player to update")),
    request_body = UpdatePlayerRequest,
    responses(
        (status = 200, description = "Player updated successfully", body = PlayerSummary),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 404, description = "Player not found", body = ErrorBody)
    )
)]
pub async fn update_player(
    State(state): State<SharedState>,
    ApiPath(player_id): ApiPath<u64>,
    ApiJson(payload): ApiJson<UpdatePlayerRequest>,
) -> Result<Json<PlayerSummary>, AppError> {
    let player = player_service::update_player(&state, player_id, payload).await?;
    Ok(Json(player))
}

/// Delete a player.
#[utoipa::path(
    delete,
    path = "/players/{player_id}",
    tag = "players",
    params(("player_id" = u64, Path, description = "ID of the player to delete")),
    responses(
        (status = 204, description = "Player deleted successfully"),
        (status = 404, description = "Player not found", body = ErrorBody)
    )
)]
pub async fn delete_player(
    State(state): State<SharedState>,
    ApiPath(player_id): ApiPath<u64>,
) -> Result<StatusCode, AppError> {
    player_service::delete_player(&state, player_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
