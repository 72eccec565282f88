//! DTO definitions used by the player REST API and documentation layer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dao::models::{Player, PlayerDraft, PlayerPatch},
    error::ServiceError,
};

/// Payload used to register a new player.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreatePlayerRequest {
    /// Player's full name (required).
    #[validate(required(message = "Player name is required"))]
    #[schema(example = "Lionel Messi")]
    pub name: Option<String>,
    /// Playing position (required).
    #[validate(required(message = "Player position is required"))]
    #[schema(example = "Forward")]
    pub position: Option<String>,
    /// Team reference; not checked against the teams collection.
    #[serde(default)]
    #[schema(example = 1)]
    pub team_id: Option<i64>,
}

impl TryFrom<CreatePlayerRequest> for PlayerDraft {
    type Error = ServiceError;

    fn try_from(request: CreatePlayerRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        // Presence of both strings is guaranteed by `validate`.
        Ok(Self {
            name: request.name.unwrap_or_default(),
            position: request.position.unwrap_or_default(),
            team_id: request.team_id,
        })
    }
}

/// Partial player update. Omitted fields are left untouched.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePlayerRequest {
    /// New name; overwrites even when empty. Null or omitted keeps the current name.
    #[serde(default)]
    #[schema(example = "Lionel Messi")]
    pub name: Option<String>,
    /// New position; null or omitted keeps the current position.
    #[serde(default)]
    #[schema(example = "Forward")]
    pub position: Option<String>,
    /// If not specified, does not change it.
    /// If null is specified, removes the team reference.
    /// If an integer is specified (including 0), sets the team reference.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i64>, example = 1)]
    pub team_id: Option<Option<i64>>,
}

impl From<UpdatePlayerRequest> for PlayerPatch {
    fn from(request: UpdatePlayerRequest) -> Self {
        Self {
            name: request.name,
            position: request.position,
            team_id: request.team_id,
        }
    }
}

/// Public projection of a player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerSummary {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: u64,
    /// Player's full name.
    #[schema(example = "Lionel Messi")]
    pub name: String,
    /// Playing position.
    #[schema(example = "Forward")]
    pub position: String,
    /// Serialized as `null` when the player has no team.
    #[schema(example = 1)]
    pub team_id: Option<i64>,
}

impl From<Player> for PlayerSummary {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            position: player.position,
            team_id: player.team_id,
        }
    }
}

/// Every stored player, in creation order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlayerList {
    /// Players in creation order.
    pub players: Vec<PlayerSummary>,
}
