use clap::Parser;
use rc_app::{AppConfig, BackendKind};
use rc_web::{AppState, router, telemetry};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rc-web")]
#[command(about = "refcycle web frontend", long_about = None)]
struct Args {
    /// Path to a YAML config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Listen address, overrides the config file
    #[arg(long)]
    bind: Option<String>,
    /// Property backend, overrides the config file
    #[arg(long)]
    backend: Option<BackendKind>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing();
    let args = Args::parse();

    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    if let Some(backend) = args.backend {
        config.backend = backend;
    }
    if let Some(bind) = args.bind {
        config.web.bind = bind;
    }
    config.validate()?;

    let addr = config.web.bind.clone();
    let state = AppState::new(config)?;
    tracing::info!(%addr, backend = state.oracle.name(), "starting refcycle web");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    tracing::info!("shutdown complete");
    Ok(())
}
