use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use agro_service_rs::config::Config;
use agro_service_rs::routes;
use agro_service_rs::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    info!("model dir: {}", config.model_dir.display());
    info!("allowed origin: {}", config.cors_origin);

    let state = Arc::new(AppState::load(&config)?);
    let app = routes::app(state, &config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on http://{addr}");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
