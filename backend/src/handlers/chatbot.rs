//! HTTP handler for the farmer chatbot

use axum::{extract::State, Json};
use shared::{ChatbotRequest, ChatbotResponse};

use crate::error::AppResult;
use crate::services::prompt::chatbot_prompt;
use crate::AppState;

/// `POST /chatbot`
pub async fn chatbot(
    State(state): State<AppState>,
    body: Option<Json<ChatbotRequest>>,
) -> AppResult<Json<ChatbotResponse>> {
    let Json(req) = body.unwrap_or_default();

    if let Some(user_id) = &req.user_id {
        tracing::debug!(user_id, "chatbot message received");
    }

    let reply = state.genai.generate(&chatbot_prompt(&req.message)).await;
    Ok(Json(ChatbotResponse { reply }))
}
