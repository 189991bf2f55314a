use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{LoginOutcome, Registration},
    db::entities::user,
    error::AppError,
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
    validation::{non_blank, normalize_email, parse_role},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub account_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(rename = "redirectTo")]
    pub redirect_to: &'static str,
    pub role: &'static str,
    pub user_id: i32,
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: usize,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth", post(login))
        .route("/auth/register", post(register))
        .with_state(state)
}

impl RegisterRequest {
    fn into_registration(self) -> Result<Registration, AppError> {
        let (Some(first_name), Some(last_name), Some(email), Some(password), Some(account_type)) = (
            non_blank(self.first_name.as_deref()),
            non_blank(self.last_name.as_deref()),
            non_blank(self.email.as_deref()),
            non_blank(self.password.as_deref()),
            non_blank(self.account_type.as_deref()),
        ) else {
            return Err(AppError::bad_request("Missing required fields"));
        };

        Ok(Registration {
            role: parse_role(account_type)?,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: normalize_email(email),
            password: password.to_string(),
        })
    }
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> ApiResult<RegisteredUser> {
    let registration = body.into_registration()?;
    let services = ServiceContext::from_state(state.as_ref());
    let user = services
        .auth(&state.auth_providers)
        .register(registration)
        .await?;
    JsonApiResponse::ok_with_message("User registered successfully", user.into())
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let (Some(email), Some(password)) = (
        non_blank(body.email.as_deref()),
        non_blank(body.password.as_deref()),
    ) else {
        return Err(AppError::bad_request("Missing email or password"));
    };

    let services = ServiceContext::from_state(state.as_ref());
    let outcome = services
        .auth(&state.auth_providers)
        .login(email, password)
        .await?;
    JsonApiResponse::ok_with_message("Login successful", outcome.into())
}

impl From<user::Model> for RegisteredUser {
    fn from(user: user::Model) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            redirect_to: outcome.role.dashboard_path(),
            role: outcome.role.as_str(),
            user_id: outcome.user.user_id,
            access_token: outcome.tokens.access_token,
            token_type: outcome.tokens.token_type,
            expires_in: outcome.tokens.expires_in,
        }
    }
}
