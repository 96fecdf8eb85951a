//! Entry point: load config, wire dependencies, and run the server.

use marker_progress::auth::JwtIssuer;
use marker_progress::config::Config;
use marker_progress::db::{self, PgStore};
use marker_progress::middleware::cors_layer;
use marker_progress::{create_app, AppState};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_pool = db::create_pool(&config.database_url, config.db_max_connections).await?;
    db::run_migrations(&db_pool).await?;
    tracing::info!("migrations applied");

    let state = AppState::new(
        Arc::new(PgStore::new(db_pool)),
        JwtIssuer::new(config.token.clone()),
    );

    let mut app = create_app(state);
    // Client-side routes fall back to index.html.
    if let Some(dir) = &config.static_dir {
        tracing::info!(dir = %dir.display(), "serving front-end");
        let index = ServeFile::new(dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(dir).not_found_service(index));
    }
    let app = app.layer(cors_layer(&config.cors_allowed_origins));

    tracing::info!(addr = %config.server_addr, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
