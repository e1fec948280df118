// Signal handling module
// SIGTERM and SIGINT both request a graceful stop of the accept loop

use std::sync::Arc;

use tokio::sync::Notify;

/// Spawn the shutdown signal listener.
pub fn start_signal_handler() -> Arc<Notify> {
    let shutdown = Arc::new(Notify::new());
    let notify = Arc::clone(&shutdown);

    tokio::spawn(async move {
        wait_for_signal().await;
        notify.notify_one();
    });

    shutdown
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to register SIGTERM handler: {e}"));
            return;
        }
    };
    let mut sigint = match signal(SignalKind::interrupt()) {
        Ok(s) => s,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to register SIGINT handler: {e}"));
            return;
        }
    };

    tokio::select! {
        _ = sigterm.recv() => {}
        _ = sigint.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
