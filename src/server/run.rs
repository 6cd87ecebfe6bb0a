// Accept loop module
// Runs the listener for the life of the process

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::logger;

use super::connection::accept_connection;

/// Accept connections for the life of the process.
///
/// Accept errors are logged and never fatal; the loop keeps going.
pub async fn run(
    listener: TcpListener,
    config: Arc<Config>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &config),
            Err(e) => logger::error(&format!("Failed to accept connection: {e}")),
        }
    }
}
