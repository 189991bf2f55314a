pub mod auth_service;
pub mod context;
pub mod notification_service;
pub mod task_list_service;
pub mod task_service;
pub mod user_service;
mod viewer;

pub use context::ServiceContext;
pub use viewer::Viewer;
