use axum::{Json, Router, extract::State, http::StatusCode, routing::get};

use crate::{
    dto::team::{CreateTeamRequest, TeamList, TeamSummary, UpdateTeamRequest},
    error::{AppError, ErrorBody},
    routes::extract::{ApiJson, ApiPath},
    services::team_service,
    state::SharedState,
};

/// Collection and item endpoints for teams.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/teams", get(list_teams).post(create_team))
        .route(
            "/teams/{team_id}",
            get(get_team).put(update_team).delete(delete_team),
        )
}

/// Get a list of all teams.
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    responses((status = 200, description = "List of all teams", body = TeamList))
)]
pub async fn list_teams(State(state): State<SharedState>) -> Json<TeamList> {
    Json(team_service::list_teams(&state).await)
}

/// Create a new team.
#[utoipa::path(
    post,
    path = "/teams",
    tag = "teams",
    request_body = CreateTeamRequest,
    responses(
        (status = 201, description = "Team created successfully", body = TeamSummary),
        (status = 400, description = "Invalid input", body = ErrorBody)
    )
)]
pub async fn create_team(
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<CreateTeamRequest>,
) -> Result<(StatusCode, Json<TeamSummary>), AppError> {
    let team = team_service::create_team(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

/// Get a specific team by ID.
#[utoipa::path(
    get,
    path = "/teams/{team_id}",
    tag = "teams",
    params(("team_id" = u64, Path, description = "ID of the team to retrieve")),
    responses(
        (status = 200, description = "Team details", body = TeamSummary),
        (status = 404, description = "Team not found", body = ErrorBody)
    )
)]
pub async fn get_team(
    State(state): State<SharedState>,
    ApiPath(team_id): ApiPath<u64>,
) -> Result<Json<TeamSummary>, AppError> {
    Ok(Json(team_service::get_team(&state, team_id).await?))
}

/// Update a team's details.
#[utoipa::path(
    put,
    path = "/teams/{team_id}",
    tag = "teams",
    params(("team_id" = u64, Path, description = "ID of the team to update")),
    request_body = UpdateTeamRequest,
    responses(
        (status = 200, description = "Team updated successfully", body = TeamSummary),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 404, description = "Team not found", body = ErrorBody)
    )
)]
pub async fn update_team(
    State(state): State<SharedState>,
    ApiPath(team_id): ApiPath<u64>,
    ApiJson(payload): ApiJson<UpdateTeamRequest>,
) -> Result<Json<TeamSummary>, AppError> {
    Ok(Json(team_service::update_team(&state, team_id, payload).await?))
}

/// Delete a team.
#[utoipa::path(
    delete,
    path = "/teams/{team_id}",
    tag = "teams",
    params(("team_id" = u64, Path, description = "ID of the team to delete")),
    responses(
        (status = 204, description = "Team deleted successfully"),
        (status = 404, description = "Team not found", body = ErrorBody)
    )
)]
pub async fn delete_team(
    State(state): State<SharedState>,
    ApiPath(team_id): ApiPath<u64>,
) -> Result<StatusCode, AppError> {
    team_service::delete_team(&state, team_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
