pub mod auth;
pub mod dto;
pub mod group_admin;
pub mod me;
pub mod notifications;
mod router;
pub mod tasklists;
pub mod tasks;

pub use router::router;
