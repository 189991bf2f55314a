use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use super::{DaoBase, DaoEntity, DaoLayerError, DaoResult};
use crate::db::entities::{notification, prelude::Notification};

/// A notification that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    pub task_id: Option<i32>,
    pub user_id: Option<i32>,
    pub message: String,
}

impl NotificationDraft {
    pub fn new(task_id: Option<i32>, user_id: Option<i32>, message: impl Into<String>) -> Self {
        Self {
            task_id,
            user_id,
            message: message.into(),
        }
    }

    fn into_active_model(self) -> notification::ActiveModel {
        notification::ActiveModel {
            task_id: Set(self.task_id),
            user_id: Set(self.user_id),
            message: Set(self.message),
            timestamp: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
    }
}

#[derive(Clone)]
pub struct NotificationDao {
    db: DatabaseConnection,
}

impl DaoBase for NotificationDao {
    type Entity = Notification;
    const ENTITY: DaoEntity = DaoEntity::Notification;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl NotificationDao {
    /// Writes `draft` on `conn`, which may be an open transaction.
    pub async fn insert_on<C>(conn: &C, draft: NotificationDraft) -> DaoResult<notification::Model>
    where
        C: ConnectionTrait,
    {
        draft
            .into_active_model()
            .insert(conn)
            .await
            .map_err(DaoLayerError::Db)
    }

    pub async fn list_all(&self) -> DaoResult<Vec<notification::Model>> {
        self.list(|query| {
            query
                .order_by_desc(notification::Column::Timestamp)
                .order_by_desc(notification::Column::NotificationId)
        })
        .await
    }

    pub async fn list_for_user(&self, user_id: i32) -> DaoResult<Vec<notification::Model>> {
        self.list(move |query| {
            query
                .filter(notification::Column::UserId.eq(user_id))
                .order_by_desc(notification::Column::Timestamp)
                .order_by_desc(notification::Column::NotificationId)
        })
        .await
    }

    pub async fn clear_all(&self) -> DaoResult<u64> {
        let result = Notification::delete_many()
            .exec(&self.db)
            .await
            .map_err(DaoLayerError::Db)?;
        Ok(result.rows_affected)
    }

    pub async fn clear_for_user(&self, user_id: i32) -> DaoResult<u64> {
        let result = Notification::delete_many()
            .filter(notification::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(DaoLayerError::Db)?;
        Ok(result.rows_affected)
    }
}
