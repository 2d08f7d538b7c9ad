use std::sync::Arc;

mod app;
mod config;
mod db;
mod error;
mod state;
mod users;

use crate::{config::AppConfig, state::AppState, users::repo::PgUserRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "accounts=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env();

    let db = db::connect(&config.database).await?;
    db::init_schema(&db).await?;

    let state = AppState::from_parts(Arc::new(PgUserRepository::new(db.clone())));
    let served = app::serve(app::build_app(state), &config.listen_addr()).await;

    db.close().await;
    tracing::info!("database pool closed");

    served
}
