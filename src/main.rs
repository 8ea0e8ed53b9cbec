//! Fault Lab server binary.
//!
//! Serves the product-listing endpoint with caller-selected failure
//! injection. Optional first argument: path to a TOML config file; without
//! it the documented demo defaults apply (3000ms client budget, 5000ms
//! injected timeout delay).

use std::path::Path;

use tokio::net::TcpListener;

use fault_lab::config::{self, LabConfig};
use fault_lab::lifecycle::shutdown::wait_for_signal;
use fault_lab::lifecycle::Shutdown;
use fault_lab::observability::logging;
use fault_lab::responder::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => config::load_config(Path::new(&path))?,
        None => LabConfig::default(),
    };

    logging::init(&config.observability.log_level);

    tracing::info!("fault-lab v0.1.0 starting");

    let server = HttpServer::new(config);
    let bind_address = server.config().listener.bind_address.clone();
    tracing::info!(
        %bind_address,
        budget_ms = server.config().requester.budget_ms,
        timeout_delay_ms = server.config().responder.timeout_delay_ms,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&bind_address).await?;
    let address = listener.local_addr()?;
    tracing::info!(%address, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
