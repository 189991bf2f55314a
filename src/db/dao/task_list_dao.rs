use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::{DaoBase, DaoEntity, DaoLayerError, DaoResult, NotificationDao, NotificationDraft};
use crate::db::entities::{prelude::TaskList, task_list};

#[derive(Clone)]
pub struct TaskListDao {
    db: DatabaseConnection,
}

impl DaoBase for TaskListDao {
    type Entity = TaskList;
    const ENTITY: DaoEntity = DaoEntity::TaskList;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TaskListDao {
    pub async fn list_all(&self) -> DaoResult<Vec<task_list::Model>> {
        self.list(|query| query.order_by_asc(task_list::Column::TasklistId))
            .await
    }

    pub async fn list_by_ids(&self, ids: &[i32]) -> DaoResult<Vec<task_list::Model>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids = ids.to_vec();
        self.list(move |query| {
            query
                .filter(task_list::Column::TasklistId.is_in(ids))
                .order_by_asc(task_list::Column::TasklistId)
        })
        .await
    }

    pub async fn list_by_owner(&self, user_id: i32) -> DaoResult<Vec<task_list::Model>> {
        self.list(move |query| {
            query
                .filter(task_list::Column::UserId.eq(user_id))
                .order_by_asc(task_list::Column::TasklistId)
        })
        .await
    }

    /// Inserts the list and its notification in one transaction.
    pub async fn create_with_notice<F>(
        &self,
        name: String,
        owner_id: i32,
        notice: F,
    ) -> DaoResult<task_list::Model>
    where
        F: FnOnce(&task_list::Model) -> NotificationDraft + Send,
    {
        let txn = self.db.begin().await.map_err(DaoLayerError::Db)?;

        let created = task_list::ActiveModel {
            name: Set(name),
            user_id: Set(owner_id),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(DaoLayerError::Db)?;

        NotificationDao::insert_on(&txn, notice(&created)).await?;
        txn.commit().await.map_err(DaoLayerError::Db)?;

        Ok(created)
    }
}
