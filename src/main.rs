//! HAK Empire server entry point.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use hak_empire::config::AppConfig;
use hak_empire::server::start_server;

#[tokio::main]
async fn main() {
    // Load .env (if present)
    let _ = dotenv();

    // Initialize tracing (M-LOG-STRUCTURED)
    // LOG_FORMAT=json switches to one JSON object per line.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    tracing_subscriber::registry()
        .with(filter)
        .with((!json).then(|| fmt::layer().with_target(true)))
        .with(json.then(|| fmt::layer().json().with_target(true)))
        .init();

    let config = match AppConfig::load() {
        Ok(c) => Arc::new(c),
        Err(e) => {
            error!(name: "config.invalid", error = %e, "Configuration error");
            std::process::exit(1);
        }
    };

    info!(
        name: "config.loaded",
        address = %config.bind_address(),
        static_dir = %config.assets.static_dir,
        "Configuration loaded"
    );

    if let Err(e) = start_server(config).await {
        error!(name: "server.failed", error = %e, "Server error");
        std::process::exit(1);
    }
}
