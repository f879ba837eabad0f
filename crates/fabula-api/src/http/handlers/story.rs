//! Story catalog handlers.

use axum::extract::{Path, State};
use serde::Serialize;

use fabula_types::story::{CreateStoryRequest, Story, StoryList, StoryStats, UpdateStoryRequest};

use crate::http::error::AppError;
use crate::http::extractors::json::ApiJson;
use crate::http::extractors::query::{ApiQuery, StoryListQuery};
use crate::http::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StoryResponse {
    pub story: Story,
}

#[derive(Debug, Serialize)]
pub struct StoryDeletedResponse {
    pub message: &'static str,
    pub story: Story,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: StoryStats,
}

/// GET /stories?status=&search= - Filtered listing in catalog order.
pub async fn list_stories(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<StoryListQuery>,
) -> Result<ApiResponse<StoryList>, AppError> {
    let filter = query.status_filter()?;
    Ok(ApiResponse::success(state.stories.list(filter, &query.search)))
}

/// GET /stories/{id}
pub async fn get_story(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<StoryResponse>, AppError> {
    let story = state.stories.get(&id)?;
    Ok(ApiResponse::success(StoryResponse { story }))
}

/// POST /stories - Create a story; responds 201.
pub async fn create_story(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateStoryRequest>,
) -> Result<ApiResponse<StoryResponse>, AppError> {
    let story = state.stories.create(body)?;
    Ok(ApiResponse::created(StoryResponse { story }))
}

/// PUT /stories/{id} - Apply the fields present in the body.
pub async fn update_story(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateStoryRequest>,
) -> Result<ApiResponse<StoryResponse>, AppError> {
    let story = state.stories.update(&id, body)?;
    Ok(ApiResponse::success(StoryResponse { story }))
}

/// DELETE /stories/{id} - Remove and return the story.
pub async fn delete_story(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<StoryDeletedResponse>, AppError> {
    let story = state.stories.delete(&id)?;
    Ok(ApiResponse::success(StoryDeletedResponse {
        message: "Story deleted successfully",
        story,
    }))
}

/// GET /stories/stats - Aggregate counts over the whole catalog.
pub async fn get_stats(State(state): State<AppState>) -> ApiResponse<StatsResponse> {
    ApiResponse::success(StatsResponse {
        stats: state.stories.stats(),
    })
}
