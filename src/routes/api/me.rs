use std::sync::Arc;

use axum::{Router, extract::State, routing::get};
use serde::Serialize;

use crate::{
    auth::Role,
    error::AppError,
    middleware::guards::AuthGuard,
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(rename = "redirectTo")]
    pub redirect_to: Option<&'static str>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/me", get(me)).with_state(state)
}

async fn me(State(state): State<Arc<AppState>>, claims: AuthGuard) -> ApiResult<ProfileResponse> {
    let user = ServiceContext::from_state(state.as_ref())
        .user()
        .find_by_id(claims.user_id()?)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let redirect_to = Role::try_from(user.role.as_str())
        .ok()
        .map(|role| role.dashboard_path());

    JsonApiResponse::ok(ProfileResponse {
        user_id: user.user_id,
        name: user.name,
        email: user.email,
        role: user.role,
        redirect_to,
    })
}
