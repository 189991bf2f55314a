use crate::{
    auth::{Claims, Role},
    error::AppError,
};

/// The authenticated caller, as far as row visibility is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: i32,
    pub role: Role,
}

impl Viewer {
    pub fn from_claims(claims: &Claims) -> Result<Self, AppError> {
        let role = if claims.is_group_admin() {
            Role::GroupAdmin
        } else if claims.has_role(Role::TeamMember) {
            Role::TeamMember
        } else {
            return Err(AppError::forbidden("Unauthorized role"));
        };

        Ok(Self {
            user_id: claims.user_id()?,
            role,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::GroupAdmin
    }
}
