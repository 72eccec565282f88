/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Player collection operations.
pub mod player_service;
/// Team collection operations.
pub mod team_service;
