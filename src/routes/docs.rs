use axum::{Router, response::Redirect, routing::get};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{services::documentation::ApiDoc, state::SharedState};

const SWAGGER_UI_PATH: &str = "/docs";
const OPENAPI_JSON_PATH: &str = "/api-doc/openapi.json";
/// Location older clients used for the interactive documentation.
const LEGACY_DOCS_PATH: &str = "/apidocs";

/// Serve the Swagger UI backed by the generated OpenAPI document.
pub fn router(state: SharedState) -> Router<SharedState> {
    let ui: Router<SharedState> = SwaggerUi::new(SWAGGER_UI_PATH)
        .url(OPENAPI_JSON_PATH, ApiDoc::openapi())
        .into();

    ui.route(
        LEGACY_DOCS_PATH,
        get(|| async { Redirect::permanent(SWAGGER_UI_PATH) }),
    )
    .with_state(state)
}
