//! Binary entrypoint for the textproc HTTP server.
//!
//! Configuration comes from environment variables, see
//! [`textproc_server::config`]. Log filtering follows `RUST_LOG`
//! (default: "info").

use std::process;

use textproc_server::config::ServerConfig;
use textproc_server::router::build_router;
use textproc_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            process::exit(2);
        }
    };

    let addr = config.socket_addr();
    let locale = config.locale;
    let app = build_router(AppState::new(config));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", addr, e);
            process::exit(1);
        }
    };

    tracing::info!(%locale, "textproc server listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {}", e);
        process::exit(1);
    }
}
