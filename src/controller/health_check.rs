use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

pub fn router() -> Router {
    Router::new()
        .route("/", get(get_root))
        .route("/health", get(get_health_check))
}

async fn get_root() -> Json<Value> {
    Json(json!({ "message": "Restaurant finder API is running. POST to /search_restaurants or /chat." }))
}

/// Liveness probe
async fn get_health_check() -> Result<StatusCode, StatusCode>
{
    Ok(StatusCode::OK)
}
