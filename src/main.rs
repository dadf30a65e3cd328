use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vanbladel::{config::Config, db::Database, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let db = Database::connect(&config).await;
    if !db.is_connected() {
        info!("Starting without a document store, data endpoints will return errors");
    }

    let state = Arc::new(AppState {
        db,
        config: config.clone(),
    });

    let app = vanbladel::create_app(state);

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    info!("Server starting on {}", config.server_address);

    axum::serve(listener, app).await?;

    Ok(())
}
