use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payhere_gateway::config::GatewayConfig;
use payhere_gateway::domain::ports::{PaymentStoreRef, RegistrationStoreRef};
use payhere_gateway::infrastructure::in_memory::{InMemoryPaymentStore, InMemoryRegistrationStore};
use payhere_gateway::interfaces::http::{self, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address the HTTP server binds to.
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Arc::new(GatewayConfig::from_env().into_diagnostic()?);

    // Reference store adapters; deployments with a real database implement
    // the ports in `domain::ports` and wire their own here.
    let payments: PaymentStoreRef = Arc::new(InMemoryPaymentStore::new());
    let registrations: RegistrationStoreRef = Arc::new(InMemoryRegistrationStore::new());

    let app = http::router(AppState::new(config, payments, registrations));
    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .into_diagnostic()?;
    tracing::info!(addr = %cli.bind, "payhere gateway listening");
    axum::serve(listener, app).await.into_diagnostic()?;

    Ok(())
}
