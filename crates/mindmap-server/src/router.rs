use axum::routing::{get, post};
use axum::Router;
use mindmap_sdk::MindMap;
use tower_http::trace::TraceLayer;

use crate::handler;

/// Build the axum router with all mind map endpoints.
pub fn build_router(mindmap: MindMap) -> Router {
    Router::new()
        .route("/", get(handler::read_root))
        .route("/apps", get(handler::read_apps).post(handler::create_app))
        .route("/apps/", post(handler::create_app))
        .route(
            "/apps/:app_id",
            get(handler::read_app).put(handler::add_leaf),
        )
        .route("/health", get(handler::health_handler))
        .route("/info", get(handler::info_handler))
        .route("/openapi.json", get(handler::openapi_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(mindmap)
}
