//! Service entry point for the Vacation Alert Engine.

use tracing::info;
use tracing_subscriber::EnvFilter;
use vacation_alert_engine::api::{AppState, create_router};
use vacation_alert_engine::config::AppConfig;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let addr = config.bind_addr();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Vacation Alert Engine listening");
    axum::serve(listener, app).await
}
