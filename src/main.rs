//! Internmatch HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use internmatch::config::Config;
use internmatch::embedding::EmbedderConfig;
use internmatch::gateway::{GatewayState, create_router_with_state};
use internmatch::scoring::Recommender;
use internmatch::similarity::build_provider;
use internmatch::{catalog, similarity};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_addr = %config.bind_addr,
        port = config.port,
        "Internmatch starting"
    );

    // All blocking setup (catalog read, model load, provider fitting)
    // completes before the listener is bound; ranking calls never block on
    // I/O.
    let listing_catalog = Arc::new(catalog::load_catalog(&config.catalog_path)?);

    let embedder_config = config.model_dir.as_ref().map(EmbedderConfig::new);
    if embedder_config.is_none() {
        tracing::warn!("No INTERNMATCH_MODEL_DIR configured, using the TF-IDF similarity variant");
    }
    let provider: Box<dyn similarity::SimilarityProvider> =
        build_provider(embedder_config, &listing_catalog);

    tracing::info!(
        listings = listing_catalog.len(),
        provider = provider.name(),
        default_top_n = config.default_top_n,
        "Matching engine ready"
    );

    let recommender = Arc::new(Recommender::new(listing_catalog, provider));
    let state = GatewayState::new(recommender, config.default_top_n);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Internmatch shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
