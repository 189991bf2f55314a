use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::{
    CommentDao, DaoBase, DaoEntity, DaoLayerError, DaoResult, NewComment, NotificationDao,
    NotificationDraft,
};
use crate::db::entities::{enums::TaskStatus, prelude::Task, task};

#[derive(Clone)]
pub struct TaskDao {
    db: DatabaseConnection,
}

impl DaoBase for TaskDao {
    type Entity = Task;
    const ENTITY: DaoEntity = DaoEntity::Task;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TaskDao {
    pub async fn list_all(&self) -> DaoResult<Vec<task::Model>> {
        self.list(|query| query.order_by_asc(task::Column::TaskId))
            .await
    }

    pub async fn list_by_assignee(&self, user_id: i32) -> DaoResult<Vec<task::Model>> {
        self.list(move |query| {
            query
                .filter(task::Column::UserId.eq(user_id))
                .order_by_asc(task::Column::TaskId)
        })
        .await
    }

    /// Inserts `data` and the notification built from the stored row, atomically.
    pub async fn create_with_notice<F>(
        &self,
        mut data: task::ActiveModel,
        notice: F,
    ) -> DaoResult<task::Model>
    where
        F: FnOnce(&task::Model) -> NotificationDraft + Send,
    {
        let now = Utc::now().fixed_offset();
        data.created_at = Set(now);
        data.updated_at = Set(now);

        let txn = self.db.begin().await.map_err(DaoLayerError::Db)?;
        let created = data.insert(&txn).await.map_err(DaoLayerError::Db)?;
        NotificationDao::insert_on(&txn, notice(&created)).await?;
        txn.commit().await.map_err(DaoLayerError::Db)?;

        Ok(created)
    }

    /// Applies `apply` to task `id` and records a notification. Nothing is
    /// written when the task does not exist.
    pub async fn update_with_notice<A, F>(
        &self,
        id: i32,
        apply: A,
        notice: F,
    ) -> DaoResult<task::Model>
    where
        A: FnOnce(&mut task::ActiveModel) + Send,
        F: FnOnce(&task::Model) -> NotificationDraft + Send,
    {
        let txn = self.db.begin().await.map_err(DaoLayerError::Db)?;

        let existing = Task::find_by_id(id)
            .one(&txn)
            .await
            .map_err(DaoLayerError::Db)?
            .ok_or(DaoLayerError::NotFound {
                entity: Self::ENTITY,
                id,
            })?;

        let mut active = existing.into_active_model();
        apply(&mut active);
        active.updated_at = Set(Utc::now().fixed_offset());
        let updated = active.update(&txn).await.map_err(DaoLayerError::Db)?;

        NotificationDao::insert_on(&txn, notice(&updated)).await?;
        txn.commit().await.map_err(DaoLayerError::Db)?;

        Ok(updated)
    }

    /// Deletes task `id` and records a notification about it. Returns the
    /// row as it was before deletion.
    pub async fn delete_with_notice<F>(&self, id: i32, notice: F) -> DaoResult<task::Model>
    where
        F: FnOnce(&task::Model) -> NotificationDraft + Send,
    {
        let txn = self.db.begin().await.map_err(DaoLayerError::Db)?;

        let existing = Task::find_by_id(id)
            .one(&txn)
            .await
            .map_err(DaoLayerError::Db)?
            .ok_or(DaoLayerError::NotFound {
                entity: Self::ENTITY,
                id,
            })?;

        existing
            .clone()
            .delete(&txn)
            .await
            .map_err(DaoLayerError::Db)?;
        NotificationDao::insert_on(&txn, notice(&existing)).await?;
        txn.commit().await.map_err(DaoLayerError::Db)?;

        Ok(existing)
    }

    /// Sets the status of `existing` and appends `comment`, atomically.
    pub async fn update_status(
        &self,
        existing: task::Model,
        status: TaskStatus,
        comment: Option<NewComment>,
    ) -> DaoResult<task::Model> {
        let txn = self.db.begin().await.map_err(DaoLayerError::Db)?;

        let mut active = existing.into_active_model();
        active.status = Set(status);
        active.updated_at = Set(Utc::now().fixed_offset());
        let updated = active.update(&txn).await.map_err(DaoLayerError::Db)?;

        if let Some(comment) = comment {
            CommentDao::insert_on(&txn, comment).await?;
        }
        txn.commit().await.map_err(DaoLayerError::Db)?;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::TaskDao;
    use crate::db::{
        dao::{DaoBase, DaoEntity, DaoLayerError, NotificationDraft},
        entities::{
            enums::{TaskPriority, TaskStatus},
            task,
        },
    };

    fn task_model(id: i32, user_id: i32) -> task::Model {
        let ts = FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 2, 1, 8, 0, 0)
            .single()
            .expect("timestamp should be valid");
        task::Model {
            task_id: id,
            title: format!("Task {id}"),
            description: None,
            status: TaskStatus::Pending,
            priority: TaskPriority::High,
            deadline: NaiveDate::from_ymd_opt(2026, 12, 31).expect("date should be valid"),
            user_id,
            tasklist_id: None,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[tokio::test]
    async fn list_by_assignee_returns_only_rows_from_query() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([[task_model(1, 3), task_model(4, 3)]])
            .into_connection();
        let dao = TaskDao::new(&db);

        let tasks = dao.list_by_assignee(3).await.expect("query should succeed");
        assert!(tasks.iter().all(|task| task.user_id == 3));
        assert_eq!(tasks.len(), 2);
    }

    #[tokio::test]
    async fn update_with_notice_on_missing_task_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([Vec::<task::Model>::new()])
            .into_connection();
        let dao = TaskDao::new(&db);

        let err = dao
            .update_with_notice(
                77,
                |_| {},
                |model| NotificationDraft::new(Some(model.task_id), None, "edited"),
            )
            .await
            .expect_err("task should be missing");

        assert!(matches!(
            err,
            DaoLayerError::NotFound {
                entity: DaoEntity::Task,
                id: 77
            }
        ));
    }

    #[tokio::test]
    async fn delete_with_notice_on_missing_task_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([Vec::<task::Model>::new()])
            .into_connection();
        let dao = TaskDao::new(&db);

        let err = dao
            .delete_with_notice(5, |model| {
                NotificationDraft::new(Some(model.task_id), Some(model.user_id), "deleted")
            })
            .await
            .expect_err("task should be missing");

        assert!(matches!(err, DaoLayerError::NotFound { id: 5, .. }));
    }
}
