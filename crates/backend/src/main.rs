pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use axum::http::{header, Method};
use axum::middleware;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use shared::app_state::AppState;
use shared::config;
use shared::data::{fixtures, MockDataSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = config::load_config()?;

    let collections = fixtures::load(&config.data)?;
    let total: usize = collections.values().map(Vec::len).sum();
    tracing::info!(
        "Mock data source ready: {} records in {} collections",
        total,
        collections.len()
    );
    let state = AppState::new(MockDataSource::new(collections));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let mut app = routes::configure_routes(state);

    if let Some(static_dir) = config.server.static_dir.as_deref() {
        let dir = config::resolve_path(static_dir);
        tracing::info!("Serving frontend from {}", dir.display());
        // Unknown paths fall back to index.html so client-side routes survive a reload
        let index = ServeFile::new(dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(dir).fallback(index));
    }

    let app = app
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors);

    let addr = config.server.socket_addr()?;
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
