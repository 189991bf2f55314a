use serde::{Deserialize, Serialize};

use crate::{db::entities::user, error::AppError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    #[serde(rename = "Group Admin")]
    GroupAdmin,
    #[serde(rename = "Team Member")]
    TeamMember,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::GroupAdmin => "Group Admin",
            Role::TeamMember => "Team Member",
        }
    }

    /// Client-side landing page for the role.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::GroupAdmin => "/group_admin",
            Role::TeamMember => "/team_member",
        }
    }

    /// Roles carried in an access token. Admins can act as members too.
    pub fn granted(self) -> Vec<Role> {
        match self {
            Role::GroupAdmin => vec![Role::GroupAdmin, Role::TeamMember],
            Role::TeamMember => vec![Role::TeamMember],
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Group Admin" => Ok(Role::GroupAdmin),
            "Team Member" => Ok(Role::TeamMember),
            _ => Err(()),
        }
    }
}

pub trait RequiredRole {
    fn required() -> Role;
}

pub struct GroupAdminRole;

impl RequiredRole for GroupAdminRole {
    fn required() -> Role {
        Role::GroupAdmin
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // user id
    pub exp: usize,  // expiry (unix)
    pub iat: usize,  // issued at
    pub roles: Vec<Role>,
}

impl Claims {
    pub fn user_id(&self) -> Result<i32, AppError> {
        self.sub
            .parse::<i32>()
            .map_err(|_| AppError::unauthorized("Invalid token subject"))
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_group_admin(&self) -> bool {
        self.has_role(Role::GroupAdmin)
    }
}

#[derive(Debug)]
pub struct TokenBundle {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: usize,
}

/// Validated registration form. `email` is already normalized.
#[derive(Debug, Clone)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Registration {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

#[derive(Debug)]
pub struct LoginOutcome {
    pub user: user::Model,
    pub role: Role,
    pub tokens: TokenBundle,
}
