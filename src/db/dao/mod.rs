pub mod base;
pub mod comment_dao;
mod context;
pub mod error;
pub mod notification_dao;
pub mod task_dao;
pub mod task_list_dao;
pub mod user_dao;

pub use base::DaoBase;
pub use comment_dao::{CommentDao, NewComment};
pub use context::DaoContext;
pub use error::{DaoEntity, DaoLayerError, DaoResult};
pub use notification_dao::{NotificationDao, NotificationDraft};
pub use task_dao::TaskDao;
pub use task_list_dao::TaskListDao;
pub use user_dao::{NewUser, UserDao};
