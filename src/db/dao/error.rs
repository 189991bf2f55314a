use std::fmt;

use sea_orm::{DbErr, SqlErr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaoEntity {
    User,
    TaskList,
    Task,
    Comment,
    Notification,
}

impl DaoEntity {
    pub fn label(self) -> &'static str {
        match self {
            DaoEntity::User => "User",
            DaoEntity::TaskList => "Task list",
            DaoEntity::Task => "Task",
            DaoEntity::Comment => "Comment",
            DaoEntity::Notification => "Notification",
        }
    }
}

impl fmt::Display for DaoEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DaoLayerError {
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
    #[error("{entity} not found (id={id})")]
    NotFound { entity: DaoEntity, id: i32 },
    #[error("{entity} violates a unique constraint")]
    Duplicate { entity: DaoEntity },
}

impl DaoLayerError {
    /// Classifies `err` as a unique-index violation on `entity` when the driver reports one.
    pub fn from_insert(entity: DaoEntity, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => DaoLayerError::Duplicate { entity },
            _ => DaoLayerError::Db(err),
        }
    }
}

pub type DaoResult<T> = Result<T, DaoLayerError>;
