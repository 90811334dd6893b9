use crate::AppState;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Version information of the running service
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VersionInfo {
    /// Major API version served under /api
    pub api: String,
    /// Version of the application itself
    pub app: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/version", get(version))
}

#[utoipa::path(
    get,
    path = "/version",
    tag = "version",
    responses(
        (status = 200, description = "API and application versions", body = VersionInfo)
    )
)]
pub async fn version() -> Json<VersionInfo> {
    Json(VersionInfo {
        api: "v1".to_string(),
        app: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(OpenApi)]
#[openapi(paths(version), components(schemas(VersionInfo)))]
pub struct ApiDoc;
