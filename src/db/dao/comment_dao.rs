use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, QueryFilter, QueryOrder,
    Set,
};

use super::{DaoBase, DaoEntity, DaoLayerError, DaoResult};
use crate::db::entities::{comment, prelude::Comment};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub task_id: i32,
    pub user_id: i32,
    pub content: String,
}

#[derive(Clone)]
pub struct CommentDao {
    db: DatabaseConnection,
}

impl DaoBase for CommentDao {
    type Entity = Comment;
    const ENTITY: DaoEntity = DaoEntity::Comment;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl CommentDao {
    pub async fn insert_on<C>(conn: &C, comment: NewComment) -> DaoResult<comment::Model>
    where
        C: ConnectionTrait,
    {
        comment::ActiveModel {
            content: Set(comment.content),
            timestamp: Set(Utc::now().fixed_offset()),
            task_id: Set(comment.task_id),
            user_id: Set(comment.user_id),
            ..Default::default()
        }
        .insert(conn)
        .await
        .map_err(DaoLayerError::Db)
    }

    /// Comments for the given tasks, oldest first.
    pub async fn list_for_tasks(&self, task_ids: &[i32]) -> DaoResult<Vec<comment::Model>> {
        if task_ids.is_empty() {
            return Ok(Vec::new());
        }
        let task_ids = task_ids.to_vec();
        self.list(move |query| {
            query
                .filter(comment::Column::TaskId.is_in(task_ids))
                .order_by_asc(comment::Column::Timestamp)
                .order_by_asc(comment::Column::CommentId)
        })
        .await
    }
}
