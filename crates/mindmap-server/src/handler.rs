use axum::extract::{Path, State};
use axum::response::{Html, Json};
use serde::Serialize;

use mindmap_sdk::{MindMap, SdkError, StoreError};
use mindmap_types::{App, Leaf};

use crate::error::{ServerError, ServerResult};
use crate::{openapi, view};

#[derive(Clone, Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// API metadata handler, the `info` block of the OpenAPI document.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(openapi::api_info())
}

/// OpenAPI 3 document describing every route.
pub async fn openapi_handler() -> Json<serde_json::Value> {
    Json(openapi::openapi_spec())
}

/// `GET /` -- every app rendered as an HTML tree.
pub async fn read_root(State(mindmap): State<MindMap>) -> ServerResult<Html<String>> {
    let apps = mindmap.pretty_apps()?;
    Ok(Html(view::render_index(&apps)))
}

/// `GET /apps`
pub async fn read_apps(State(mindmap): State<MindMap>) -> ServerResult<Json<Vec<App>>> {
    Ok(Json(mindmap.list_apps()?))
}

/// `GET /apps/:app_id` -- 404 when the id is unknown.
pub async fn read_app(
    State(mindmap): State<MindMap>,
    Path(app_id): Path<String>,
) -> ServerResult<Json<App>> {
    mindmap
        .get_app(&app_id)?
        .map(Json)
        .ok_or_else(|| ServerError::from(SdkError::from(StoreError::AppNotFound(app_id))))
}

/// `POST /apps/` -- 404 when the id is taken.
pub async fn create_app(
    State(mindmap): State<MindMap>,
    Json(app): Json<App>,
) -> ServerResult<Json<App>> {
    Ok(Json(mindmap.create_app(app)?))
}

/// `PUT /apps/:app_id` -- append one leaf, 404 when the id is unknown.
pub async fn add_leaf(
    State(mindmap): State<MindMap>,
    Path(app_id): Path<String>,
    Json(leaf): Json<Leaf>,
) -> ServerResult<Json<App>> {
    Ok(Json(mindmap.add_leaf(&app_id, leaf)?))
}
