use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use givename::config::{Config, LoggingConfig};
use givename::services::GeminiClient;
use givename::{AppState, create_router};

#[derive(Parser, Debug)]
#[command(name = "givename", about = "Chinese name suggestion service")]
struct Args {
    /// Path to the configuration file (default: conf/config.toml)
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Config errors are fatal: never serve traffic half-configured.
    let config = Config::load(args.config.as_deref()).context("failed to load configuration")?;
    let _log_guard = init_tracing(&config.logging)?;

    tracing::info!("Starting givename with model {}", config.gemini.model);

    let generator = GeminiClient::new(&config.gemini, &config.proxy)
        .context("failed to create Gemini client")?;
    let state = Arc::new(AppState { generator: Arc::new(generator) });

    let app = create_router(state, &config);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

/// Initialize tracing with an env-filter level and an optional log file.
/// The returned guard must stay alive for the non-blocking writer to flush.
fn init_tracing(
    config: &LoggingConfig,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>, anyhow::Error> {
    let filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("invalid log level '{}'", config.level))?;

    match &config.file {
        Some(file) => {
            let path = Path::new(file);
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let name = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_else(|| "givename.log".to_string());
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, name));
            tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        },
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            Ok(None)
        },
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutting down");
}
