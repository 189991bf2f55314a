use sea_orm::DatabaseConnection;
use tracing::info;

use super::providers::default_registry;
use crate::config::DatabaseConfig;

pub const ENTITY_REGISTRY_PREFIX: &str = "taskboard::db::entities::*";

/// Opens the pool for `cfg.url`, applies provider pragmas, and brings the
/// schema in line with the entity definitions.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let providers = default_registry()?;
    let provider = providers.provider_for_url(&cfg.url)?;

    info!(provider = provider.id().as_str(), "connecting to database");
    let db = provider.connect(cfg).await?;
    provider.post_connect(&db, cfg).await?;

    info!("syncing database schema from entities");
    db.get_schema_registry(ENTITY_REGISTRY_PREFIX)
        .sync(&db)
        .await?;
    Ok(db)
}
