use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::Set;

use crate::{
    db::{
        dao::{CommentDao, DaoBase, NewComment, NotificationDraft, TaskDao, TaskListDao},
        entities::{
            comment,
            enums::{TaskPriority, TaskStatus},
            task,
        },
    },
    error::AppError,
    services::{Viewer, user_service::UserService},
};

/// A task ready to be inserted. Every field has already been validated.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub deadline: NaiveDate,
    pub user_id: i32,
    pub tasklist_id: Option<i32>,
}

/// Admin edit of an existing task. `description: None` keeps the stored value,
/// `Some(None)` clears it.
#[derive(Debug, Clone)]
pub struct TaskEdit {
    pub title: String,
    pub description: Option<Option<String>>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub deadline: NaiveDate,
}

/// A task together with its assignee's display name and its comments.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskView {
    pub task: task::Model,
    pub owner_name: Option<String>,
    pub comments: Vec<comment::Model>,
}

fn user_tag(user_id: i32) -> String {
    format!("US#{user_id:02}")
}

fn created_notice(task: &task::Model) -> NotificationDraft {
    NotificationDraft::new(
        Some(task.task_id),
        Some(task.user_id),
        format!(
            "Task \"{}\" was added and assigned to {}.",
            task.title,
            user_tag(task.user_id)
        ),
    )
}

fn edited_notice(task: &task::Model) -> NotificationDraft {
    NotificationDraft::new(
        Some(task.task_id),
        Some(task.user_id),
        format!("Task ID {} was edited.", task.task_id),
    )
}

fn deleted_notice(task: &task::Model) -> NotificationDraft {
    NotificationDraft::new(
        Some(task.task_id),
        Some(task.user_id),
        format!("Task \"{}\" (ID {}) was deleted.", task.title, task.task_id),
    )
}

fn reassigned_notice(task: &task::Model) -> NotificationDraft {
    NotificationDraft::new(
        Some(task.task_id),
        Some(task.user_id),
        format!(
            "Task ID {} has been assigned to {}.",
            task.task_id,
            user_tag(task.user_id)
        ),
    )
}

#[derive(Clone)]
pub struct TaskService {
    task_dao: TaskDao,
    comment_dao: CommentDao,
    task_list_dao: TaskListDao,
    users: UserService,
}

impl TaskService {
    pub fn new(
        task_dao: TaskDao,
        comment_dao: CommentDao,
        task_list_dao: TaskListDao,
        users: UserService,
    ) -> Self {
        Self {
            task_dao,
            comment_dao,
            task_list_dao,
            users,
        }
    }

    /// Admins see every task, members only the ones assigned to them.
    pub async fn list_for(&self, viewer: &Viewer) -> Result<Vec<TaskView>, AppError> {
        let tasks = if viewer.is_admin() {
            self.task_dao.list_all().await?
        } else {
            self.task_dao.list_by_assignee(viewer.user_id).await?
        };
        self.views(tasks).await
    }

    pub async fn create(&self, draft: TaskDraft) -> Result<TaskView, AppError> {
        if !self.users.exists(draft.user_id).await? {
            return Err(AppError::bad_request(format!(
                "User ID {} does not exist.",
                draft.user_id
            )));
        }
        if let Some(tasklist_id) = draft.tasklist_id
            && self.task_list_dao.find_optional(tasklist_id).await?.is_none()
        {
            return Err(AppError::bad_request(format!(
                "Task list ID {tasklist_id} does not exist."
            )));
        }

        let data = task::ActiveModel {
            title: Set(draft.title),
            description: Set(draft.description),
            status: Set(draft.status),
            priority: Set(draft.priority),
            deadline: Set(draft.deadline),
            user_id: Set(draft.user_id),
            tasklist_id: Set(draft.tasklist_id),
            ..Default::default()
        };
        let created = self.task_dao.create_with_notice(data, created_notice).await?;

        tracing::info!(
            task_id = created.task_id,
            user_id = created.user_id,
            "task created"
        );
        self.view(created).await
    }

    pub async fn edit(&self, task_id: i32, edit: TaskEdit) -> Result<TaskView, AppError> {
        let updated = self
            .task_dao
            .update_with_notice(
                task_id,
                move |active| {
                    active.title = Set(edit.title);
                    if let Some(description) = edit.description {
                        active.description = Set(description);
                    }
                    active.status = Set(edit.status);
                    active.priority = Set(edit.priority);
                    active.deadline = Set(edit.deadline);
                },
                edited_notice,
            )
            .await?;

        tracing::info!(task_id, "task edited");
        self.view(updated).await
    }

    pub async fn delete(&self, task_id: i32) -> Result<task::Model, AppError> {
        let deleted = self
            .task_dao
            .delete_with_notice(task_id, deleted_notice)
            .await?;

        tracing::info!(task_id, user_id = deleted.user_id, "task deleted");
        Ok(deleted)
    }

    pub async fn reassign(&self, task_id: i32, user_id: i32) -> Result<TaskView, AppError> {
        if !self.users.exists(user_id).await? {
            return Err(AppError::not_found("User ID does not exist"));
        }

        let updated = self
            .task_dao
            .update_with_notice(
                task_id,
                move |active| {
                    active.user_id = Set(user_id);
                },
                reassigned_notice,
            )
            .await?;

        tracing::info!(task_id, user_id, "task reassigned");
        self.view(updated).await
    }

    /// Status change from the task board, optionally with a comment. Members
    /// may only touch tasks assigned to them.
    pub async fn update_status(
        &self,
        viewer: &Viewer,
        task_id: i32,
        status: TaskStatus,
        comment: Option<String>,
    ) -> Result<TaskView, AppError> {
        let existing = self.task_dao.find_by_id(task_id).await?;
        if !viewer.is_admin() && existing.user_id != viewer.user_id {
            return Err(AppError::forbidden(
                "You can only update tasks assigned to you",
            ));
        }

        let comment = comment
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .map(|content| NewComment {
                task_id,
                user_id: viewer.user_id,
                content,
            });
        let commented = comment.is_some();

        let updated = self
            .task_dao
            .update_status(existing, status, comment)
            .await?;

        tracing::info!(
            task_id,
            user_id = viewer.user_id,
            status = status.as_str(),
            commented,
            "task status updated"
        );
        self.view(updated).await
    }

    async fn view(&self, task: task::Model) -> Result<TaskView, AppError> {
        let mut views = self.views(vec![task]).await?;
        views
            .pop()
            .ok_or_else(|| AppError::internal("Task view could not be built"))
    }

    async fn views(&self, tasks: Vec<task::Model>) -> Result<Vec<TaskView>, AppError> {
        let task_ids: Vec<i32> = tasks.iter().map(|task| task.task_id).collect();
        let mut user_ids: Vec<i32> = tasks.iter().map(|task| task.user_id).collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let names = self.users.names_by_ids(&user_ids).await?;
        let mut comments_by_task: HashMap<i32, Vec<comment::Model>> = HashMap::new();
        for comment in self.comment_dao.list_for_tasks(&task_ids).await? {
            comments_by_task
                .entry(comment.task_id)
                .or_default()
                .push(comment);
        }

        Ok(tasks
            .into_iter()
            .map(|task| TaskView {
                owner_name: names.get(&task.user_id).cloned(),
                comments: comments_by_task.remove(&task.task_id).unwrap_or_default(),
                task,
            })
            .collect())
    }
}
