//! Records held by the in-memory stores.

use crate::dao::store::Record;

/// A player as stored in the players collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Store-assigned identifier.
    pub id: u64,
    /// Player's full name.
    pub name: String,
    /// Playing position, e.g. "Forward".
    pub position: String,
    /// Opaque team reference; never checked against the teams collection.
    pub team_id: Option<i64>,
}

/// Validated fields required to create a player.
#[derive(Debug)]
pub struct PlayerDraft {
    /// Player's full name.
    pub name: String,
    /// Playing position.
    pub position: String,
    /// Optional team reference.
    pub team_id: Option<i64>,
}

/// Fields to overwrite on an existing player. `None` leaves a field untouched.
#[derive(Debug, Default)]
pub struct PlayerPatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement position.
    pub position: Option<String>,
    /// `Some(None)` clears the team reference.
    pub team_id: Option<Option<i64>>,
}

impl Record for Player {
    type Draft = PlayerDraft;
    type Patch = PlayerPatch;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: PlayerDraft) -> Self {
        Self {
            id,
            name: draft.name,
            position: draft.position,
            team_id: draft.team_id,
        }
    }

    fn apply(&mut self, patch: PlayerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(team_id) = patch.team_id {
            self.team_id = team_id;
        }
    }
}

/// A team as stored in the teams collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// Store-assigned identifier.
    pub id: u64,
    /// Club name.
    pub name: String,
    /// Home city.
    pub city: String,
}

/// Validated fields required to create a team.
#[derive(Debug)]
pub struct TeamDraft {
    /// Club name.
    pub name: String,
    /// Home city.
    pub city: String,
}

/// Fields to overwrite on an existing team.
#[derive(Debug, Default)]
pub struct TeamPatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement city.
    pub city: Option<String>,
}

impl Record for Team {
    type Draft = TeamDraft;
    type Patch = TeamPatch;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: TeamDraft) -> Self {
        Self {
            id,
            name: draft.name,
            city: draft.city,
        }
    }

    fn apply(&mut self, patch: TeamPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
    }
}
