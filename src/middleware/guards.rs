use std::{marker::PhantomData, sync::Arc};

use axum::extract::FromRequestParts;

use crate::{
    auth::{Claims, RequiredRole},
    error::AppError,
    middleware::auth::bearer_token,
    services::{ServiceContext, Viewer},
    state::AppState,
};

// Reuses claims left by `jwt_auth`, otherwise verifies the header itself.
impl FromRequestParts<Arc<AppState>> for Claims {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        if let Some(claims) = parts.extensions.get::<Claims>().cloned() {
            return Ok(claims);
        }

        let token = bearer_token(&parts.headers)?;
        let claims = ServiceContext::from_state(state)
            .auth(&state.auth_providers)
            .verify(token)
            .await?;

        parts.extensions.insert(claims.clone());
        Ok(claims)
    }
}

pub type AuthGuard = Claims;

impl FromRequestParts<Arc<AppState>> for Viewer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let claims = Claims::from_request_parts(parts, state).await?;
        Viewer::from_claims(&claims)
    }
}

pub struct AuthRoleGuard<R: RequiredRole> {
    pub claims: Claims,
    _marker: PhantomData<R>,
}

impl<R> FromRequestParts<Arc<AppState>> for AuthRoleGuard<R>
where
    R: RequiredRole,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let claims = Claims::from_request_parts(parts, state).await?;

        if !claims.has_role(R::required()) {
            return Err(AppError::forbidden("Unauthorized role"));
        }

        Ok(Self {
            claims,
            _marker: PhantomData,
        })
    }
}
