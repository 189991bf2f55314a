use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

use super::{auth, group_admin, me, notifications, tasklists, tasks};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(auth::router(state.clone()))
        .merge(me::router(state.clone()))
        .merge(group_admin::router(state.clone()))
        .merge(tasks::router(state.clone()))
        .merge(tasklists::router(state.clone()))
        .merge(notifications::router(state))
}
