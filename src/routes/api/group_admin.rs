use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    middleware::from_fn_with_state,
    routing::{get, put},
};
use serde::{Deserialize, Serialize};

use crate::{
    auth::Role,
    error::AppError,
    middleware::{AuthRoleGuardLayer, jwt_auth},
    response::{ApiResult, JsonApiResponse},
    routes::api::dto::TaskResponse,
    services::{
        ServiceContext, Viewer,
        task_service::{TaskDraft, TaskEdit},
    },
    state::AppState,
    validation::{
        non_blank, parse_deadline, parse_priority, parse_status, parse_task_id, positive_id,
    },
};

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub user_id: Option<i64>,
    pub tasklist_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct EditTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub deadline: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReassignRequest {
    pub task_id: Option<i64>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct DeletedTask {
    pub task_id: i32,
    pub title: String,
}

/// Task administration. Every route requires a Group Admin token.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/group_admin",
            get(list_tasks).post(create_task).patch(reassign_task),
        )
        .route("/group_admin/{id}", put(edit_task).delete(delete_task))
        .route_layer(AuthRoleGuardLayer::new(Role::GroupAdmin))
        .route_layer(from_fn_with_state(state.clone(), jwt_auth))
        .with_state(state)
}

fn description_of(raw: Option<String>) -> Option<String> {
    non_blank(raw.as_deref()).map(str::to_string)
}

impl CreateTaskRequest {
    fn into_draft(self) -> Result<TaskDraft, AppError> {
        let (Some(title), Some(deadline), Some(priority), Some(status), Some(user_id)) = (
            non_blank(self.title.as_deref()),
            non_blank(self.deadline.as_deref()),
            non_blank(self.priority.as_deref()),
            non_blank(self.status.as_deref()),
            self.user_id,
        ) else {
            return Err(AppError::bad_request("Missing required fields"));
        };

        let user_id = positive_id(Some(user_id)).ok_or_else(|| {
            AppError::bad_request(format!("User ID {user_id} does not exist."))
        })?;
        let tasklist_id = match self.tasklist_id {
            Some(raw) => Some(positive_id(Some(raw)).ok_or_else(|| {
                AppError::bad_request(format!("Task list ID {raw} does not exist."))
            })?),
            None => None,
        };

        Ok(TaskDraft {
            title: title.to_string(),
            priority: parse_priority(Some(priority))?,
            status: parse_status(Some(status))?,
            deadline: parse_deadline(deadline)?,
            description: description_of(self.description),
            user_id,
            tasklist_id,
        })
    }
}

impl EditTaskRequest {
    fn into_edit(self) -> Result<TaskEdit, AppError> {
        let (Some(title), Some(status), Some(priority), Some(deadline)) = (
            non_blank(self.title.as_deref()),
            non_blank(self.status.as_deref()),
            non_blank(self.priority.as_deref()),
            non_blank(self.deadline.as_deref()),
        ) else {
            return Err(AppError::bad_request("Missing required fields"));
        };

        Ok(TaskEdit {
            title: title.to_string(),
            status: parse_status(Some(status))?,
            priority: parse_priority(Some(priority))?,
            deadline: parse_deadline(deadline)?,
            description: self.description.map(|raw| description_of(Some(raw))),
        })
    }
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

async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateTaskRequest>,
) -> ApiResult<TaskResponse> {
    let draft = body.into_draft()?;
    let created = ServiceContext::from_state(state.as_ref())
        .task()
        .create(draft)
        .await?;
    JsonApiResponse::created("Task added successfully", created.into())
}

async fn edit_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<EditTaskRequest>,
) -> ApiResult<TaskResponse> {
    let task_id = parse_task_id(&id)?;
    let edit = body.into_edit()?;
    let updated = ServiceContext::from_state(state.as_ref())
        .task()
        .edit(task_id, edit)
        .await?;
    JsonApiResponse::ok_with_message("Task updated successfully", updated.into())
}

async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<DeletedTask> {
    let task_id = parse_task_id(&id)?;
    let deleted = ServiceContext::from_state(state.as_ref())
        .task()
        .delete(task_id)
        .await?;
    JsonApiResponse::ok_with_message(
        "Task deleted successfully",
        DeletedTask {
            task_id: deleted.task_id,
            title: deleted.title,
        },
    )
}

async fn reassign_task(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ReassignRequest>,
) -> ApiResult<TaskResponse> {
    let (Some(task_id), Some(user_id)) = (
        body.task_id.filter(|id| *id > 0),
        body.user_id.filter(|id| *id > 0),
    ) else {
        return Err(AppError::bad_request("Missing task_id or user_id"));
    };
    let task_id = positive_id(Some(task_id)).ok_or_else(|| AppError::not_found("Task not found"))?;
    let user_id =
        positive_id(Some(user_id)).ok_or_else(|| AppError::not_found("User ID does not exist"))?;

    let updated = ServiceContext::from_state(state.as_ref())
        .task()
        .reassign(task_id, user_id)
        .await?;
    JsonApiResponse::ok_with_message("Task reassigned successfully", updated.into())
}
