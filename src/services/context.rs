use sea_orm::DatabaseConnection;

use crate::{
    auth::providers::AuthProviders,
    db::dao::DaoContext,
    services::{
        auth_service::AuthService, notification_service::NotificationService,
        task_list_service::TaskListService, task_service::TaskService, user_service::UserService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn user(&self) -> UserService {
        UserService::new(self.daos.user())
    }

    pub fn task(&self) -> TaskService {
        TaskService::new(
            self.daos.task(),
            self.daos.comment(),
            self.daos.task_list(),
            self.user(),
        )
    }

    pub fn task_list(&self) -> TaskListService {
        TaskListService::new(self.daos.task_list(), self.daos.task(), self.user())
    }

    pub fn notification(&self) -> NotificationService {
        NotificationService::new(self.daos.notification())
    }

    pub fn auth<'a>(&self, providers: &'a AuthProviders) -> AuthService<'a> {
        AuthService::new(providers)
    }
}
