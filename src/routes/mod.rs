use axum::Router;

use crate::state::SharedState;

/// Swagger UI and OpenAPI document.
pub mod docs;
/// Extractors with JSON error rejections.
pub mod extract;
/// Health check route.
pub mod health;
/// Player collection and item routes.
pub mod players;
/// Team collection and item routes.
pub mod teams;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(players::router())
        .merge(teams::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
