use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::DatabaseConfig;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id          TEXT PRIMARY KEY,
        email       TEXT NOT NULL UNIQUE,
        password    TEXT NOT NULL,
        name        TEXT NOT NULL,
        role        TEXT NOT NULL,
        department  TEXT,
        gender      TEXT NOT NULL,
        birth_date  TEXT NOT NULL
    )
"#;

pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let db = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url())
        .await
        .context("connect to database")?;
    Ok(db)
}

/// Creates the `users` table if it does not exist yet. Safe to run on every start.
pub async fn init_schema(db: &PgPool) -> anyhow::Result<()> {
    sqlx::query(CREATE_USERS_TABLE)
        .execute(db)
        .await
        .context("create users table")?;
    tracing::info!("users schema ready");
    Ok(())
}
