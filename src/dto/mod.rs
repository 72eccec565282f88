/// Health check payloads.
pub mod health;
/// Player payloads.
pub mod player;
/// Team payloads.
pub mod team;
