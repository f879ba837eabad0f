//! Narrative chat session handlers.
//!
//! Each session wraps one conversation with the generation provider; the
//! handlers are thin adapters over [`SessionStore`](fabula_core::chat::SessionStore).

use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use fabula_types::chat::{ChatTurn, SessionSummary};

use crate::http::error::AppError;
use crate::http::extractors::json::ApiJson;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for `POST /chat/start`.
#[derive(Debug, Default, Deserialize)]
pub struct StartChatRequest {
    /// Optional opening context for the narrator.
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Request body for `POST /chat/send`.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct StartChatResponse {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct SessionListResponse {
    pub sessions: Vec<SessionSummary>,
}

/// POST /chat/start - Open a session and return the narrator's opening.
pub async fn start_chat(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<StartChatRequest>,
) -> Result<ApiResponse<StartChatResponse>, AppError> {
    let started = state.sessions.start(body.prompt.as_deref()).await?;

    Ok(ApiResponse::success(StartChatResponse {
        session_id: started.session_id,
        message: started.message,
    }))
}

/// POST /chat/send - Forward a player message and return the reply.
pub async fn send_message(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SendMessageRequest>,
) -> Result<ApiResponse<MessageResponse>, AppError> {
    let reply = state.sessions.send(&body.session_id, &body.message).await?;
    Ok(ApiResponse::success(MessageResponse { message: reply }))
}

/// GET /chat/history/{session_id} - Full turn history.
pub async fn get_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<ApiResponse<HistoryResponse>, AppError> {
    let history = state.sessions.history(&session_id)?;
    Ok(ApiResponse::success(HistoryResponse { history }))
}

/// GET /chat/sessions - One summary per live session, oldest first.
pub async fn list_sessions(State(state): State<AppState>) -> ApiResponse<SessionListResponse> {
    ApiResponse::success(SessionListResponse {
        sessions: state.sessions.list(),
    })
}

/// DELETE /chat/delete/{session_id}
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<ApiResponse<MessageResponse>, AppError> {
    state.sessions.delete(&session_id)?;
    Ok(ApiResponse::success(MessageResponse {
        message: "Session deleted successfully".to_string(),
    }))
}
