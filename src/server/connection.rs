// Connection handling module
// Serves a single accepted TCP connection

use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::api;
use crate::config::AppState;
use crate::logger;

/// Serve one connection in a spawned task.
pub fn handle_connection(stream: tokio::net::TcpStream, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new()
            .keep_alive(true)
            .serve_connection(
                io,
                service_fn(move |req| {
                    let state = Arc::clone(&state);
                    async move { api::handle_request(req, state).await }
                }),
            );

        if let Err(e) = conn.await {
            logger::log_connection_error(&e);
        }
    });
}
