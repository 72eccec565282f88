/// Records stored for each resource collection.
pub mod models;
/// Generic insertion-ordered record store.
pub mod store;

use crate::dao::{
    models::{Player, Team},
    store::RecordStore,
};

/// Store owning every player record.
pub type PlayerStore = RecordStore<Player>;
/// Store owning every team record.
pub type TeamStore = RecordStore<Team>;
