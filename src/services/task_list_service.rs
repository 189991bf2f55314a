use crate::{
    db::{
        dao::{NotificationDraft, TaskDao, TaskListDao},
        entities::task_list,
    },
    error::AppError,
    services::{Viewer, user_service::UserService},
};

#[derive(Clone)]
pub struct TaskListService {
    task_list_dao: TaskListDao,
    task_dao: TaskDao,
    users: UserService,
}

impl TaskListService {
    pub fn new(task_list_dao: TaskListDao, task_dao: TaskDao, users: UserService) -> Self {
        Self {
            task_list_dao,
            task_dao,
            users,
        }
    }

    /// Admins see every list; members see lists holding at least one of their tasks.
    pub async fn list_for(&self, viewer: &Viewer) -> Result<Vec<task_list::Model>, AppError> {
        if viewer.is_admin() {
            return Ok(self.task_list_dao.list_all().await?);
        }

        let mut list_ids: Vec<i32> = self
            .task_dao
            .list_by_assignee(viewer.user_id)
            .await?
            .into_iter()
            .filter_map(|task| task.tasklist_id)
            .collect();
        list_ids.sort_unstable();
        list_ids.dedup();

        Ok(self.task_list_dao.list_by_ids(&list_ids).await?)
    }

    pub async fn create(&self, name: &str, owner_id: i32) -> Result<task_list::Model, AppError> {
        let name = name.trim().to_string();
        if !self.users.exists(owner_id).await? {
            return Err(AppError::bad_request(format!(
                "User ID {owner_id} does not exist."
            )));
        }

        let wanted = name.to_lowercase();
        let taken = self
            .task_list_dao
            .list_by_owner(owner_id)
            .await?
            .iter()
            .any(|list| list.name.trim().to_lowercase() == wanted);
        if taken {
            return Err(AppError::bad_request(
                "A task list with that name already exists.",
            ));
        }

        let created = self
            .task_list_dao
            .create_with_notice(name, owner_id, |list| {
                NotificationDraft::new(
                    None,
                    Some(list.user_id),
                    format!("A new task list \"{}\" has been created.", list.name),
                )
            })
            .await?;

        tracing::info!(
            tasklist_id = created.tasklist_id,
            user_id = owner_id,
            "task list created"
        );
        Ok(created)
    }
}
