use std::net::SocketAddr;

use aot_api::config::AppConfig;
use aot_api::{data, AppState};
use mimalloc::MiMalloc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Use mimalloc as global allocator for improved performance.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aot_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = AppConfig::from_env();

    // A freshly configured base origin means the URLs stored inside the data
    // files may still point at the previous deployment; fix them up front.
    // Failure here is logged but not fatal, matching the list endpoints'
    // tolerance for whatever is in the files.
    if let Some(base) = &config.base_url {
        match data::rewrite_stored_urls(&config.data_dir, data::STALE_DOMAINS, base) {
            Ok(changed) if !changed.is_empty() => {
                tracing::info!(files = ?changed, "Rewrote stale domains in data files");
            }
            Ok(_) => {}
            Err(e) => tracing::error!(error = %e, "Failed to rewrite stored URLs"),
        }
    }

    let addr = SocketAddr::new(config.host.parse()?, config.port);
    tracing::info!(host = %addr, "Starting Attack on Titan API server");

    let app = aot_api::app(AppState { config });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
