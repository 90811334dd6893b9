use skillet_core::InMemoryStore;
use skillet_server::config::Config;
use skillet_server::{api, AppState};
use std::env;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Window granted to in-flight requests after a shutdown signal.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

fn init_telemetry() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json().unwrap();
        println!("{}", spec);
        return;
    }

    init_telemetry();

    let config = Config::load();
    let store: AppState = Arc::new(InMemoryStore::new());
    let app = skillet_server::app(store, &config);

    let listener = tokio::net::TcpListener::bind(&config.addr).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);
    tracing::info!("OpenAPI spec available at http://{}/api-docs/openapi.json", addr);

    let (drain_tx, drain_rx) = tokio::sync::oneshot::channel();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = drain_tx.send(());
        })
        .into_future();

    tokio::select! {
        result = server => result.unwrap(),
        _ = drain_deadline(drain_rx) => {
            tracing::warn!("Connections still open after {:?}, closing them now", DRAIN_TIMEOUT);
        }
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for shutdown signal");
    tracing::info!("Shutdown signal received, draining connections");
}

/// Resolves [`DRAIN_TIMEOUT`] after the shutdown signal fired, bounding how
/// long the drain may take. Pends forever while no signal has arrived.
async fn drain_deadline(drain_started: tokio::sync::oneshot::Receiver<()>) {
    if drain_started.await.is_ok() {
        tokio::time::sleep(DRAIN_TIMEOUT).await;
    } else {
        std::future::pending::<()>().await;
    }
}
