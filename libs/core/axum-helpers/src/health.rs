use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Liveness response for `/health`.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Simple liveness handler: the process is up and serving requests.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
