use axum::{Extension, Json, Router};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use crate::agent::{RestaurantAgent, ToolName};
use crate::controller::AppState;
use crate::models::restaurant::Restaurant;
use crate::models::search_query::SearchQuery;
use crate::presentation::summarize;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/agent_chat", post(agent_chat))
        .route("/chat", post(chat))
        .route_layer(Extension(app_state.agent))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Clone, Serialize, Debug)]
pub struct ChatDebug {
    pub tool_used: ToolName,
    pub tool_args: SearchQuery,
}

#[derive(Clone, Serialize, Debug)]
pub struct ChatReply {
    pub reply: String,
    pub candidates: Vec<Restaurant>,
    pub debug: ChatDebug,
}

/// Raw agent output: the tool, its arguments and the candidates.
pub async fn agent_chat(
    Extension(agent): Extension<RestaurantAgent>,
    Json(body): Json<ChatRequest>,
) -> impl IntoResponse {
    return match agent.handle_message(&body.message) {
        Ok(response) => {
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            warn!("Something went wrong handling agent message due to: {}", e);
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response()
        }
    };
}

/// Agent output with a readable reply on top.
pub async fn chat(
    Extension(agent): Extension<RestaurantAgent>,
    Json(body): Json<ChatRequest>,
) -> impl IntoResponse {
    return match agent.handle_message(&body.message) {
        Ok(response) => {
            let reply = ChatReply {
                reply: summarize(&response.candidates),
                candidates: response.candidates,
                debug: ChatDebug {
                    tool_used: response.tool_used,
                    tool_args: response.tool_args,
                },
            };
            (StatusCode::OK, Json(reply)).into_response()
        }
        Err(e) => {
            warn!("Something went wrong building chat reply due to: {}", e);
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response()
        }
    };
}
