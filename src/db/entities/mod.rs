#[allow(unused_imports)]
pub mod prelude {
    pub use super::comment::Entity as Comment;
    pub use super::notification::Entity as Notification;
    pub use super::task::Entity as Task;
    pub use super::task_list::Entity as TaskList;
    pub use super::user::Entity as User;
}

pub mod comment;
pub mod enums;
pub mod notification;
pub mod task;
pub mod task_list;
pub mod user;

pub use enums::{TaskPriority, TaskStatus};
