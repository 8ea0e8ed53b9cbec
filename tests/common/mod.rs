//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::io::AsyncWriteExt;

use fault_lab::config::LabConfig;
use fault_lab::lifecycle::Shutdown;
use fault_lab::responder::HttpServer;

/// Config with delays scaled down so the full suite stays fast: 200ms client
/// budget against a 600ms injected timeout delay.
pub fn test_config() -> LabConfig {
    let mut config = LabConfig::default();
    config.responder.base_delay_min_ms = 20;
    config.responder.base_delay_max_ms = 40;
    config.responder.timeout_delay_ms = 600;
    config.requester.budget_ms = 200;
    config
}

/// Spawn a real server on an ephemeral port.
///
/// Returns the bound address and the shutdown handle; dropping the handle
/// without triggering leaves the task to die with the test runtime.
pub async fn spawn_server(mut config: LabConfig) -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Start a bare TCP server that answers every request with a fixed 200 body.
///
/// Stands in for a responder gone wrong: syntactically valid HTTP carrying a
/// payload the requester cannot decode.
#[allow(dead_code)]
pub async fn spawn_fixed_body_server(body: &'static str) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let response = format!(
                            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\
                             Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}
