//! Builders shared by unit and integration tests.

use std::sync::Arc;

use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use crate::{
    auth::{
        Role,
        bootstrap::{build_providers, init_providers},
        jwt::{JwtKeys, encode_token, make_access_claims},
    },
    config::AppConfig,
    db::connection,
    services::ServiceContext,
    state::AppState,
};

pub const TEST_JWT_SECRET: &str = "test-secret";
pub const TEST_ADMIN_EMAIL: &str = "admin@example.com";
pub const TEST_ADMIN_PASSWORD: &str = "adminpassword";

pub fn test_config(database_url: &str) -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.database.url = database_url.to_string();
    cfg.database.max_connections = 1;
    cfg.database.min_idle = 1;
    cfg.auth.jwt_secret = TEST_JWT_SECRET.to_string();
    cfg.auth.admin_email = TEST_ADMIN_EMAIL.to_string();
    cfg.auth.admin_password = TEST_ADMIN_PASSWORD.to_string();
    cfg
}

/// Connects to `database_url`, syncs the schema and seeds the admin account
/// (user id 1 on a fresh database).
pub async fn database_state(database_url: &str) -> anyhow::Result<Arc<AppState>> {
    let cfg = test_config(database_url);
    let db = connection::connect(&cfg.database).await?;
    let services = ServiceContext::new(&db);
    let providers = init_providers(&cfg.auth, &services).await?;
    Ok(AppState::new(cfg, db, providers))
}

/// State over a mock connection; no admin is seeded.
pub fn mock_state(db: DatabaseConnection) -> Arc<AppState> {
    let cfg = test_config("sqlite::memory:");
    let services = ServiceContext::new(&db);
    let providers = build_providers(&cfg.auth, &services).expect("create auth providers");
    AppState::new(cfg, db, providers)
}

pub fn empty_mock_state() -> Arc<AppState> {
    mock_state(MockDatabase::new(DatabaseBackend::Sqlite).into_connection())
}

/// A bearer header value for `user_id` signed with the test secret.
pub fn bearer_for(user_id: i32, role: Role) -> String {
    let claims = make_access_claims(user_id, role.granted(), 600);
    let token = encode_token(&JwtKeys::from_secret(TEST_JWT_SECRET.as_bytes()), &claims)
        .expect("test token should encode");
    format!("Bearer {token}")
}
