use std::time::Duration;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::ApiDoc;
use crate::features::{athletes, categories, training_centers};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/athletes", athletes::routes::routes())
        .nest("/categories", categories::routes::routes())
        .nest("/training-centers", training_centers::routes::routes());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
