use std::collections::HashMap;

use crate::{
    db::dao::{DaoBase, DaoLayerError, NewUser, UserDao},
    db::entities::user,
    error::AppError,
};

#[derive(Clone)]
pub struct UserService {
    user_dao: UserDao,
}

impl UserService {
    pub fn new(user_dao: UserDao) -> Self {
        Self { user_dao }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<user::Model>, AppError> {
        Ok(self.user_dao.find_optional(id).await?)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, AppError> {
        Ok(self.user_dao.find_by_email(email).await?)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.user_dao.exists(id).await?)
    }

    pub async fn create_user(&self, new_user: NewUser) -> Result<user::Model, AppError> {
        self.user_dao
            .create_user(new_user)
            .await
            .map_err(|err| match err {
                DaoLayerError::Duplicate { .. } => AppError::bad_request("Email already exists"),
                other => other.into(),
            })
    }

    pub async fn set_last_login(&self, user_id: i32) -> Result<user::Model, AppError> {
        Ok(self.user_dao.set_last_login(user_id).await?)
    }

    pub async fn names_by_ids(&self, user_ids: &[i32]) -> Result<HashMap<i32, String>, AppError> {
        Ok(self.user_dao.names_by_ids(user_ids).await?)
    }
}
