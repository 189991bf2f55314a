use anyhow::{Result, bail};

use super::AppConfig;

const MIN_ADMIN_PASSWORD_LEN: usize = 8;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if cfg.database.url.trim().is_empty() {
        errors.push("database.url must not be empty".to_string());
    }

    if cfg.database.max_connections == 0 {
        errors.push("database.max_connections must be > 0".to_string());
    }

    if cfg.database.min_idle > cfg.database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            cfg.database.min_idle, cfg.database.max_connections
        ));
    }

    if cfg.auth.jwt_secret.trim().is_empty() {
        errors.push("auth.jwt_secret must not be empty".to_string());
    }

    if cfg.auth.access_token_ttl_secs == 0 {
        errors.push("auth.access_token_ttl_secs must be > 0".to_string());
    }

    if cfg.auth.admin_email.trim().is_empty() {
        errors.push("auth.admin_email must not be empty".to_string());
    }

    if cfg.auth.admin_name.trim().is_empty() {
        errors.push("auth.admin_name must not be empty".to_string());
    }

    if cfg.auth.admin_password.len() < MIN_ADMIN_PASSWORD_LEN {
        errors.push(format!(
            "auth.admin_password must be at least {MIN_ADMIN_PASSWORD_LEN} characters"
        ));
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}
