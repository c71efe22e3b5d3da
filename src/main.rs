use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use wisdombadge::http::{self, AppState};
use wisdombadge::render::BadgeRenderer;
use wisdombadge::{RenderOptions, WisdomStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    // Unset or unparsable PORT falls back to the default.
    let port: u16 = std::env::var("PORT").ok().and_then(|s| s.parse().ok()).unwrap_or(3000);

    let renderer: Arc<dyn BadgeRenderer> =
        Arc::new(wisdombadge::new_renderer(RenderOptions::default())?);
    let state = Arc::new(AppState::new(WisdomStore::default(), renderer));
    let app = http::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("wisdombadge listening on http://{}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
