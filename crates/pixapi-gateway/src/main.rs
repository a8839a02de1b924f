//! pixapi gateway binary.
//!
//! - Application listener: `/`, `/hello`, `/metrics`
//! - Dedicated metrics listener: `/metrics`
//! - Every inbound request bumps the request counter before dispatch

use std::future::IntoFuture;
use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use pixapi_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_or_default("pixapi.yaml").expect("config load failed");
    let state = app_state::AppState::new(cfg);

    let listen: SocketAddr = state
        .cfg()
        .server
        .parse_listen()
        .expect("server.listen must be a valid SocketAddr");
    let metrics_listen: SocketAddr = state
        .cfg()
        .server
        .parse_metrics_listen()
        .expect("server.metrics_listen must be a valid SocketAddr");

    let app = router::build_app_router(state.clone());
    let metrics = router::build_metrics_router(state);

    tracing::info!(%listen, %metrics_listen, "pixapi-gateway starting");

    let app_listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind application listener");
    let metrics_listener = tokio::net::TcpListener::bind(metrics_listen)
        .await
        .expect("failed to bind metrics listener");

    // Both servers run for the process lifetime; losing either is fatal.
    tokio::try_join!(
        axum::serve(app_listener, app).into_future(),
        axum::serve(metrics_listener, metrics).into_future(),
    )
    .expect("server failed");
}
