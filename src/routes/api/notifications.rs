use std::sync::Arc;

use axum::{Router, extract::State, routing::get};
use serde::Serialize;

use crate::{
    response::{ApiResult, JsonApiResponse},
    routes::api::dto::NotificationResponse,
    services::{ServiceContext, Viewer},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct ClearedNotifications {
    pub deleted: u64,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/notifications",
            get(list_notifications).delete(clear_notifications),
        )
        .with_state(state)
}

async fn list_notifications(
    State(state): State<Arc<AppState>>,
    viewer: Viewer,
) -> ApiResult<Vec<NotificationResponse>> {
    let rows = ServiceContext::from_state(state.as_ref())
        .notification()
        .list_for(&viewer)
        .await?;
    JsonApiResponse::ok(rows.into_iter().map(Into::into).collect())
}

async fn clear_notifications(
    State(state): State<Arc<AppState>>,
    viewer: Viewer,
) -> ApiResult<ClearedNotifications> {
    let deleted = ServiceContext::from_state(state.as_ref())
        .notification()
        .clear_for(&viewer)
        .await?;
    JsonApiResponse::ok_with_message("Notifications cleared", ClearedNotifications { deleted })
}
