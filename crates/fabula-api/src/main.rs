//! Fabula REST API entry point.
//!
//! Binary name: `fabula`
//!
//! Loads `.env` and configuration, resolves the Gemini credential, wires the
//! session store and story catalog, then serves the HTTP API until Ctrl+C or
//! SIGTERM.

mod cli;
mod http;
mod state;

use clap::Parser;

use fabula_infra::config::load_config;
use fabula_infra::secret::{GEMINI_API_KEY_VAR, api_key_from_env, load_dotenv};
use fabula_observe::tracing_setup::{init_tracing, shutdown_tracing};

use cli::{Cli, Commands, ServeArgs};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_filter = cli.default_log_filter();

    // `.env` must be in the environment before config overrides are read.
    let dotenv_path = load_dotenv()?;
    let mut config = load_config(cli.config.as_deref()).await?;

    let args = match cli.command {
        Some(Commands::Config) => {
            print!("{}", toml::to_string_pretty(&config)?);
            return Ok(());
        }
        Some(Commands::Serve(args)) => args,
        None => ServeArgs::default(),
    };

    init_tracing(config.otel, log_filter)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    if let Some(path) = dotenv_path {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let api_key = api_key_from_env(GEMINI_API_KEY_VAR)?;
    let state = AppState::init(&config, api_key)?;

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %listener.local_addr()?, "Fabula API listening");

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    shutdown_tracing();
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
