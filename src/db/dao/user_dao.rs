use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::{DaoBase, DaoEntity, DaoLayerError, DaoResult};
use crate::db::entities::{prelude::User, user};

/// Registration payload after validation. `email` is already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

#[derive(Clone)]
pub struct UserDao {
    db: DatabaseConnection,
}

impl DaoBase for UserDao {
    type Entity = User;
    const ENTITY: DaoEntity = DaoEntity::User;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserDao {
    pub async fn create_user(&self, new_user: NewUser) -> DaoResult<user::Model> {
        user::ActiveModel {
            name: Set(new_user.name),
            email: Set(new_user.email),
            password_hash: Set(new_user.password_hash),
            role: Set(new_user.role),
            created_at: Set(Utc::now().fixed_offset()),
            last_login_at: Set(None),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|err| DaoLayerError::from_insert(Self::ENTITY, err))
    }

    pub async fn find_by_email(&self, email: &str) -> DaoResult<Option<user::Model>> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }

    pub async fn exists(&self, user_id: i32) -> DaoResult<bool> {
        Ok(self.find_optional(user_id).await?.is_some())
    }

    pub async fn set_last_login(&self, user_id: i32) -> DaoResult<user::Model> {
        self.update(user_id, |active| {
            active.last_login_at = Set(Some(Utc::now().fixed_offset()));
        })
        .await
    }

    /// Display names keyed by user id. Unknown ids are absent from the map.
    pub async fn names_by_ids(&self, user_ids: &[i32]) -> DaoResult<HashMap<i32, String>> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let user_ids = user_ids.to_vec();
        let users = self
            .list(move |query| {
                query
                    .filter(user::Column::UserId.is_in(user_ids))
                    .order_by_asc(user::Column::UserId)
            })
            .await?;
        Ok(users
            .into_iter()
            .map(|user| (user.user_id, user.name))
            .collect())
    }
}
