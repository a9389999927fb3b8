#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use args::Args;
use clap::Parser;
use scribe_config::Config;
use scribe_server::Server;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load(&args.config)?;
    if let Some(listen) = args.listen {
        config.server.listen_address = Some(listen);
    }

    scribe_telemetry::init(config.telemetry.as_ref(), "info");

    tracing::info!(
        config_path = %args.config.display(),
        model = %config.provider.model,
        "starting scribe"
    );

    run(config).await?;

    tracing::info!("scribe stopped");
    Ok(())
}

/// Serve until `SIGINT` or `SIGTERM` arrives
async fn run(config: Config) -> anyhow::Result<()> {
    let server = Server::new(&config)?;

    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_clone.cancel();
    });

    server.serve(shutdown).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
