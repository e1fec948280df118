//! Logger module
//!
//! Server lifecycle, request access lines and error logging with optional
//! file targets.

pub mod writer;

use std::net::SocketAddr;

use chrono::Local;

use crate::config::Config;

/// Initialize the logger with configuration.
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn write_info(message: &str) {
    if writer::is_initialized() {
        writer::get().write_access(message);
    } else {
        println!("{message}");
    }
}

fn write_error(message: &str) {
    if writer::is_initialized() {
        writer::get().write_error(message);
    } else {
        eprintln!("{message}");
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("File API server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Storage root: {}", config.storage.root));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

/// One access line per handled request.
pub fn log_request(method: &str, path: &str, status: u16) {
    write_info(&format!(
        "[{}] \"{method} {path}\" {status}",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z")
    ));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_shutdown() {
    write_info("[SIGNAL] Shutdown requested, stopping accept loop");
}
