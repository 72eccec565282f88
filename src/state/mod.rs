use std::sync::Arc;

use crate::{
    config::AppConfig,
    dao::{PlayerStore, TeamStore},
};

/// Shared handle passed to every route handler.
pub type SharedState = Arc<AppState>;

/// Central application state owning both resource stores.
pub struct AppState {
    players: PlayerStore,
    teams: TeamStore,
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] with the default configuration.
    pub fn new() -> SharedState {
        Self::with_config(AppConfig::default())
    }

    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// Both stores start empty and use the configured identifier policy.
    pub fn with_config(config: AppConfig) -> SharedState {
        Arc::new(Self {
            players: PlayerStore::new(config.id_policy()),
            teams: TeamStore::new(config.id_policy()),
            config,
        })
    }

    /// Store owning the players collection.
    pub fn players(&self) -> &PlayerStore {
        &self.players
    }

    /// Store owning the teams collection.
    pub fn teams(&self) -> &TeamStore {
        &self.teams
    }

    /// Runtime configuration the state was built from.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
