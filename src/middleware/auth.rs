use std::{
    sync::Arc,
    task::{Context, Poll},
};

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, Request as HttpRequest, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;
use tower::{Layer, Service};

use crate::{
    auth::{Claims, Role},
    error::AppError,
    services::ServiceContext,
    state::AppState,
};

pub(crate) fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::unauthorized("Missing/invalid Authorization header"))
}

/// Verifies the bearer token and stores its claims in the request extensions.
pub async fn jwt_auth(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers())?;
    let claims = ServiceContext::from_state(&state)
        .auth(&state.auth_providers)
        .verify(token)
        .await?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Rejects requests whose claims lack `required`. Must sit inside [`jwt_auth`].
#[derive(Clone)]
pub struct AuthRoleGuardLayer {
    required: Role,
}

impl AuthRoleGuardLayer {
    pub fn new(required: Role) -> Self {
        Self { required }
    }
}

#[derive(Clone)]
pub struct RequireRole<S> {
    inner: S,
    required: Role,
}

impl<S> Layer<S> for AuthRoleGuardLayer {
    type Service = RequireRole<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequireRole {
            inner,
            required: self.required,
        }
    }
}

impl<S> Service<HttpRequest<Body>> for RequireRole<S>
where
    S: Service<HttpRequest<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: HttpRequest<Body>) -> Self::Future {
        let required = self.required;
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let Some(claims) = req.extensions().get::<Claims>() else {
                return Ok(AppError::unauthorized("Missing/invalid Authorization header")
                    .into_response());
            };

            if !claims.has_role(required) {
                tracing::warn!(
                    sub = %claims.sub,
                    required = required.as_str(),
                    "role check failed"
                );
                return Ok(AppError::forbidden("Unauthorized role").into_response());
            }

            inner.call(req).await
        })
    }
}
