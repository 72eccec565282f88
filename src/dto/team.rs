//! DTO definitions used by the team REST API and documentation layer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dao::models::{Team, TeamDraft, TeamPatch},
    error::ServiceError,
};

/// Payload used to register a new team.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateTeamRequest {
    /// Club name (required).
    #[validate(required(message = "Team name is required"))]
    #[schema(example = "FC Barcelona")]
    pub name: Option<String>,
    /// Home city (required).
    #[validate(required(message = "Team city is required"))]
    #[schema(example = "Barcelona")]
    pub city: Option<String>,
}

impl TryFrom<CreateTeamRequest> for TeamDraft {
    type Error = ServiceError;

    fn try_from(request: CreateTeamRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        // Presence of both strings is guaranteed by `validate`.
        Ok(Self {
            name: request.name.unwrap_or_default(),
            city: request.city.unwrap_or_default(),
        })
    }
}

/// Partial team update. Omitted or null fields are left untouched.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTeamRequest {
    /// New name; overwrites even when empty.
    #[serde(default)]
    #[schema(example = "FC Barcelona")]
    pub name: Option<String>,
    /// New city; overwrites even when empty.
    #[serde(default)]
    #[schema(example = "Barcelona")]
    pub city: Option<String>,
}

impl From<UpdateTeamRequest> for TeamPatch {
    fn from(request: UpdateTeamRequest) -> Self {
        Self {
            name: request.name,
            city: request.city,
        }
    }
}

/// Public projection of a team.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamSummary {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: u64,
    /// Club name.
    #[schema(example = "FC Barcelona")]
    pub name: String,
    /// Home city.
    #[schema(example = "Barcelona")]
    pub city: String,
}

impl From<Team> for TeamSummary {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
            city: team.city,
        }
    }
}

/// Every stored team, in creation order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TeamList {
    /// Teams in creation order.
    pub teams: Vec<TeamSummary>,
}
