use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use todo_server::{config::Config, shared, telemetry, TodoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    telemetry::init_tracing(config.log_format);

    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    todo_server::serve(listener, shared(TodoStore::seeded()), shutdown_signal()).await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => {
            tracing::error!(%err, "unable to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
