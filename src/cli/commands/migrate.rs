use anyhow::Context;

use crate::cli::{utils::output_success, OutputFormat};
use crate::config::AppConfig;
use crate::database::DatabaseManager;

pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    // Only the database section matters here; secrets are not required
    let config = AppConfig::load().context("loading configuration")?;

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("connecting to database")?;
    DatabaseManager::migrate(&pool).await?;
    pool.close().await;

    output_success(output_format, "Database migration complete", None)
}
