//! Business logic behind the `/teams` routes.

use tracing::{debug, info};

use crate::{
    dao::models::{TeamDraft, TeamPatch},
    dto::team::{CreateTeamRequest, TeamList, TeamSummary, UpdateTeamRequest},
    error::ServiceError,
    state::SharedState,
};

fn team_not_found(id: u64) -> ServiceError {
    ServiceError::NotFound(format!("team `{id}` not found"))
}

/// Return every stored team in creation order.
pub async fn list_teams(state: &SharedState) -> TeamList {
    let teams = state
        .teams()
        .list()
        .await
        .into_iter()
        .map(TeamSummary::from)
        .collect();

    TeamList { teams }
}

/// Validate the request and append a new team.
pub async fn create_team(
    state: &SharedState,
    request: CreateTeamRequest,
) -> Result<TeamSummary, ServiceError> {
    let draft = TeamDraft::try_from(request)?;
    let team = state.teams().insert(draft).await;

    info!(team_id = team.id, name = %team.name, city = %team.city, "team created");
    Ok(team.into())
}

/// Fetch a single team by identifier.
pub async fn get_team(state: &SharedState, id: u64) -> Result<TeamSummary, ServiceError> {
    let team = state
        .teams()
        .get(id)
        .await
        .ok_or_else(|| team_not_found(id))?;

    Ok(team.into())
}

/// Overwrite the fields present in `request` on the matching team.
pub async fn update_team(
    state: &SharedState,
    id: u64,
    request: UpdateTeamRequest,
) -> Result<TeamSummary, ServiceError> {
    let team = state
        .teams()
        .update(id, TeamPatch::from(request))
        .await
        .ok_or_else(|| team_not_found(id))?;

    debug!(team_id = id, "team updated");
    Ok(team.into())
}

/// Remove the matching team from the collection.
///
/// Players referencing the team keep their `team_id`.
pub async fn delete_team(state: &SharedState, id: u64) -> Result<(), ServiceError> {
    state
        .teams()
        .remove(id)
        .await
        .ok_or_else(|| team_not_found(id))?;

    info!(team_id = id, "team deleted");
    Ok(())
}
