use utoipa::OpenApi;

/// Aggregated OpenAPI specification for the Football API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Football API",
        version = "1.0.0",
        description = "A RESTful API for managing football players and teams"
    ),
    paths(
        crate::routes::health::healthcheck,
        crate::routes::players::list_players,
        crate::routes::players::create_player,
        crate::routes::players::get_player,
        crate::routes::players::update_player,
        crate::routes::players::delete_player,
        crate::routes::teams::list_teams,
        crate::routes::teams::create_team,
        crate::routes::teams::get_team,
        crate::routes::teams::update_team,
        crate::routes::teams::delete_team,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::player::CreatePlayerRequest,
            crate::dto::player::UpdatePlayerRequest,
            crate::dto::player::PlayerSummary,
            crate::dto::player::PlayerList,
            crate::dto::team::CreateTeamRequest,
            crate::dto::team::UpdateTeamRequest,
            crate::dto::team::TeamSummary,
            crate::dto::team::TeamList,
            crate::error::ErrorBody,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "players", description = "Football player management"),
        (name = "teams", description = "Football team management"),
    )
)]
pub struct ApiDoc;
