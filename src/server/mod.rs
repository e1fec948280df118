//! Server module
//!
//! Accept loop over a reusable listener, one spawned task per connection,
//! and a signal-driven graceful stop.

mod connection;
mod listener;
mod signal;

use std::sync::Arc;

pub use listener::create_listener;
pub use signal::start_signal_handler;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::AppState;
use crate::logger;

/// Run the accept loop until the shutdown signal fires.
pub async fn run(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> std::io::Result<()> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _peer_addr)) => {
                        connection::handle_connection(stream, Arc::clone(&state));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                logger::log_shutdown();
                return Ok(());
            }
        }
    }
}
