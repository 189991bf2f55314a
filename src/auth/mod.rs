pub mod bootstrap;
pub mod jwt;
pub mod password;
pub mod providers;
mod types;

pub use types::{
    Claims, GroupAdminRole, LoginOutcome, Registration, RequiredRole, Role, TokenBundle,
};
