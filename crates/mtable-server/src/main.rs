mod app;
mod form_context;
mod views;

use anyhow::Context;
use mtable::Config;
use tower_livereload::LiveReloadLayer;
use tracing::{info, warn};

use crate::app::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first so RUST_LOG and the MTABLE_* overrides can live there
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::load_default()
        .unwrap_or_else(|e| {
            warn!("Failed to load config: {:#}, using defaults", e);
            Config::default()
        })
        .with_env();

    info!(title = %config.project.title, "mtable starting");

    let addr = config.bind_addr();
    let live_reload = config.dev.live_reload;

    let app = app::router(AppState::new(config));
    let app = if live_reload {
        info!("Live reload: enabled");
        app.layer(LiveReloadLayer::new())
    } else {
        app
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
