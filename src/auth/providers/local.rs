use async_trait::async_trait;

use crate::{
    auth::{
        Claims, LoginOutcome, Registration, Role, TokenBundle,
        jwt::{JwtKeys, decode_token, encode_token, make_access_claims},
        password::{hash_password, verify_password},
    },
    config::AuthConfig,
    db::{dao::NewUser, entities::user},
    error::AppError,
    services::user_service::UserService,
    validation::normalize_email,
};

use super::{AuthProvider, AuthProviderId};

/// Email + password accounts stored in the `users` table.
#[derive(Clone)]
pub struct LocalAuthProvider {
    user_service: UserService,
    jwt: JwtKeys,
    access_ttl_secs: usize,
}

impl LocalAuthProvider {
    pub fn new(user_service: UserService, jwt: JwtKeys, access_ttl_secs: usize) -> Self {
        Self {
            user_service,
            jwt,
            access_ttl_secs,
        }
    }

    fn issue_tokens(&self, user: &user::Model, role: Role) -> Result<TokenBundle, AppError> {
        let claims = make_access_claims(user.user_id, role.granted(), self.access_ttl_secs);
        let access_token = encode_token(&self.jwt, &claims)?;

        Ok(TokenBundle {
            access_token,
            token_type: "Bearer",
            expires_in: self.access_ttl_secs,
        })
    }
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    fn id(&self) -> AuthProviderId {
        AuthProviderId::Local
    }

    async fn register(&self, registration: Registration) -> Result<user::Model, AppError> {
        let email = normalize_email(&registration.email);
        if self.user_service.find_by_email(&email).await?.is_some() {
            return Err(AppError::bad_request("Email already exists"));
        }

        let password_hash = hash_password(registration.password.trim())?;
        let user = self
            .user_service
            .create_user(NewUser {
                name: registration.display_name(),
                email,
                password_hash,
                role: registration.role.as_str().to_string(),
            })
            .await?;

        tracing::info!(user_id = user.user_id, role = %user.role, "registered user");
        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let user = self
            .user_service
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

        if !verify_password(password.trim(), &user.password_hash) {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let role = Role::try_from(user.role.as_str())
            .map_err(|_| AppError::forbidden("Unauthorized role"))?;

        let user = self.user_service.set_last_login(user.user_id).await?;
        let tokens = self.issue_tokens(&user, role)?;

        tracing::info!(user_id = user.user_id, "user logged in");
        Ok(LoginOutcome { user, role, tokens })
    }

    async fn verify(&self, access_token: &str) -> Result<Claims, AppError> {
        decode_token(&self.jwt, access_token)
    }

    async fn seed_admin(&self, cfg: &AuthConfig) -> anyhow::Result<()> {
        let email = normalize_email(&cfg.admin_email);
        if let Some(existing) = self
            .user_service
            .find_by_email(&email)
            .await
            .map_err(|err| anyhow::anyhow!("{err}"))?
        {
            tracing::info!("admin user already present: {}", existing.email);
            return Ok(());
        }

        let hash = hash_password(&cfg.admin_password)
            .map_err(|e| anyhow::anyhow!("admin seed hash error: {e}"))?;
        let user = self
            .user_service
            .create_user(NewUser {
                name: cfg.admin_name.trim().to_string(),
                email,
                password_hash: hash,
                role: Role::GroupAdmin.as_str().to_string(),
            })
            .await
            .map_err(|err| anyhow::anyhow!("{err}"))?;
        tracing::info!("seeded admin user {}", user.email);
        Ok(())
    }
}
