//! Response bodies shared by several route modules.

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat};
use serde::Serialize;

use crate::{
    db::entities::{
        comment,
        enums::{TaskPriority, TaskStatus},
        notification, task_list,
    },
    services::task_service::TaskView,
};

fn rfc3339(ts: &DateTime<FixedOffset>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment_id: i32,
    pub content: String,
    pub timestamp: String,
    pub user_id: i32,
}

impl From<comment::Model> for CommentResponse {
    fn from(model: comment::Model) -> Self {
        Self {
            comment_id: model.comment_id,
            timestamp: rfc3339(&model.timestamp),
            content: model.content,
            user_id: model.user_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub task_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub deadline: NaiveDate,
    pub user_id: i32,
    pub owner_name: Option<String>,
    pub tasklist_id: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
    pub comments: Vec<CommentResponse>,
}

impl From<TaskView> for TaskResponse {
    fn from(view: TaskView) -> Self {
        let task = view.task;
        Self {
            task_id: task.task_id,
            title: task.title,
            description: task.description,
            status: task.status,
            priority: task.priority,
            deadline: task.deadline,
            user_id: task.user_id,
            owner_name: view.owner_name,
            tasklist_id: task.tasklist_id,
            created_at: rfc3339(&task.created_at),
            updated_at: rfc3339(&task.updated_at),
            comments: view.comments.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasklist_id: i32,
    pub name: String,
    pub user_id: i32,
    pub created_at: String,
}

impl From<task_list::Model> for TaskListResponse {
    fn from(model: task_list::Model) -> Self {
        Self {
            tasklist_id: model.tasklist_id,
            created_at: rfc3339(&model.created_at),
            name: model.name,
            user_id: model.user_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub notification_id: i32,
    pub task_id: Option<i32>,
    pub user_id: Option<i32>,
    pub message: String,
    pub timestamp: String,
}

impl From<notification::Model> for NotificationResponse {
    fn from(model: notification::Model) -> Self {
        Self {
            notification_id: model.notification_id,
            task_id: model.task_id,
            user_id: model.user_id,
            timestamp: rfc3339(&model.timestamp),
            message: model.message,
        }
    }
}
