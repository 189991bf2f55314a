use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use serde::Deserialize;

use crate::{
    response::{ApiResult, JsonApiResponse},
    routes::api::dto::TaskResponse,
    services::{ServiceContext, Viewer},
    state::AppState,
    validation::{parse_status, parse_task_id},
};

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: Option<String>,
    pub comment: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks))
        .route("/tasks/{id}", put(update_task))
        .with_state(state)
}

async fn list_tasks(
    State(state): State<Arc<AppState>>,
    viewer: Viewer,
) -> ApiResult<Vec<TaskResponse>> {
    let tasks = ServiceContext::from_state(state.as_ref())
        .task()
        .list_for(&viewer)
        .await?;
    JsonApiResponse::ok(tasks.into_iter().map(Into::into).collect())
}

async fn update_task(
    State(state): State<Arc<AppState>>,
    viewer: Viewer,
    Path(id): Path<String>,
    Json(body): Json<StatusUpdateRequest>,
) -> ApiResult<TaskResponse> {
    let task_id = parse_task_id(&id)?;
    let status = parse_status(body.status.as_deref())?;

    let updated = ServiceContext::from_state(state.as_ref())
        .task()
        .update_status(&viewer, task_id, status, body.comment)
        .await?;
    JsonApiResponse::ok_with_message("Task updated successfully", updated.into())
}
