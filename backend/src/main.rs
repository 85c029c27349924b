use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing::info;

use blog_api::{
    api,
    auth::SystemClock,
    config::Settings,
    models::AppState,
    store::{self, SqlitePostStore},
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if dotenvy::dotenv().is_err() {
        eprintln!("No .env file found; relying on environment variables.");
    }

    let settings = Settings::from_env().context("Invalid configuration")?;
    telemetry::init(&settings.log_level);
    info!("Log level: {}", settings.log_level);
    info!("DB url: {}", settings.database_url);

    let pool = store::connect(&settings.database_url)
        .await
        .context("Could not open the database")?;
    let post_store = SqlitePostStore::new(pool);
    post_store.init_schema().await?;

    let state = AppState::new(
        &settings.auth,
        Arc::new(post_store),
        Arc::new(SystemClock),
    )?;
    let app = api::app(Arc::new(state));

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    info!("Blog API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
