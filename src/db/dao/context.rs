use sea_orm::DatabaseConnection;

use super::{CommentDao, DaoBase, NotificationDao, TaskDao, TaskListDao, UserDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn user(&self) -> UserDao {
        DaoBase::new(&self.db)
    }

    pub fn task_list(&self) -> TaskListDao {
        DaoBase::new(&self.db)
    }

    pub fn task(&self) -> TaskDao {
        DaoBase::new(&self.db)
    }

    pub fn comment(&self) -> CommentDao {
        DaoBase::new(&self.db)
    }

    pub fn notification(&self) -> NotificationDao {
        DaoBase::new(&self.db)
    }
}
