// Connection handling module
// Accepts and serves a single TCP connection

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::config::Config;
use crate::handler;
use crate::logger;

/// Accept a connection and hand it to a serving task.
pub fn accept_connection(stream: TcpStream, peer_addr: SocketAddr, config: &Arc<Config>) {
    if config.logging.access_log {
        logger::log_connection_accepted(&peer_addr);
    }
    handle_connection(stream, Arc::clone(config));
}

/// Serve a single connection in a spawned task.
///
/// The stream is wrapped in `TokioIo` and served with hyper's HTTP/1.1
/// connection builder, keep-alive enabled. A connection lives until the
/// peer closes it or the protocol errors out.
fn handle_connection(stream: TcpStream, config: Arc<Config>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let service = service_fn(move |req| {
            let config = Arc::clone(&config);
            async move { handler::handle_request(req, &config).await }
        });

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(io, service);
        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
