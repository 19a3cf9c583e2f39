use axum::{Extension, Json, Router};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::json;
use tracing::warn;
use crate::catalog::Catalog;
use crate::controller::AppState;
use crate::models::search_query::SearchQuery;
use crate::search::search;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/search_restaurants", post(search_restaurants))
        .route_layer(Extension(app_state.catalog))
}

/// Structured search straight against the catalog, bypassing the agent.
pub async fn search_restaurants(
    Extension(catalog): Extension<Catalog>,
    Json(body): Json<SearchQuery>,
) -> impl IntoResponse {
    return match search(&catalog, &body) {
        Ok(candidates) => {
            (StatusCode::OK, Json(json!({ "candidates": candidates }))).into_response()
        }
        Err(e) => {
            warn!("Something went wrong searching restaurants due to: {}", e);
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response()
        }
    };
}
