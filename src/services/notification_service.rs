use crate::{
    db::{dao::NotificationDao, entities::notification},
    error::AppError,
    services::Viewer,
};

#[derive(Clone)]
pub struct NotificationService {
    notification_dao: NotificationDao,
}

impl NotificationService {
    pub fn new(notification_dao: NotificationDao) -> Self {
        Self { notification_dao }
    }

    /// Newest first. Members only see notifications addressed to them.
    pub async fn list_for(&self, viewer: &Viewer) -> Result<Vec<notification::Model>, AppError> {
        let rows = if viewer.is_admin() {
            self.notification_dao.list_all().await?
        } else {
            self.notification_dao.list_for_user(viewer.user_id).await?
        };
        Ok(rows)
    }

    /// Deletes what `list_for` would return and reports how many rows went.
    pub async fn clear_for(&self, viewer: &Viewer) -> Result<u64, AppError> {
        let deleted = if viewer.is_admin() {
            self.notification_dao.clear_all().await?
        } else {
            self.notification_dao.clear_for_user(viewer.user_id).await?
        };
        tracing::info!(user_id = viewer.user_id, deleted, "notifications cleared");
        Ok(deleted)
    }
}
