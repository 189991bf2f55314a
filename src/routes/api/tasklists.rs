use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use serde::Deserialize;

use crate::{
    auth::GroupAdminRole,
    error::AppError,
    middleware::guards::AuthRoleGuard,
    response::{ApiResult, JsonApiResponse},
    routes::api::dto::TaskListResponse,
    services::{ServiceContext, Viewer},
    state::AppState,
    validation::{non_blank, positive_id},
};

#[derive(Debug, Deserialize)]
pub struct CreateTaskListRequest {
    pub name: Option<String>,
    pub user_id: Option<i64>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/tasklists", get(list_task_lists).post(create_task_list))
        .with_state(state)
}

async fn list_task_lists(
    State(state): State<Arc<AppState>>,
    viewer: Viewer,
) -> ApiResult<Vec<TaskListResponse>> {
    let lists = ServiceContext::from_state(state.as_ref())
        .task_list()
        .list_for(&viewer)
        .await?;
    JsonApiResponse::ok(lists.into_iter().map(Into::into).collect())
}

async fn create_task_list(
    State(state): State<Arc<AppState>>,
    _admin: AuthRoleGuard<GroupAdminRole>,
    Json(body): Json<CreateTaskListRequest>,
) -> ApiResult<TaskListResponse> {
    let (Some(name), Some(user_id)) = (non_blank(body.name.as_deref()), body.user_id) else {
        return Err(AppError::bad_request("Missing name or user_id"));
    };
    let owner_id = positive_id(Some(user_id))
        .ok_or_else(|| AppError::bad_request(format!("User ID {user_id} does not exist.")))?;

    let created = ServiceContext::from_state(state.as_ref())
        .task_list()
        .create(name, owner_id)
        .await?;
    JsonApiResponse::created("Task list created successfully", created.into())
}
