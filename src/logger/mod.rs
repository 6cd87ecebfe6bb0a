//! Logger module
//!
//! Provides leveled logging for the server including:
//! - Six severities from trace to fatal with a runtime threshold
//! - Server lifecycle and access logging helpers
//! - File-based logging support
//!
//! Lines look like `2026-08-22T20:15:30.123Z [WARN ] message`, with the
//! level name padded to five columns.

mod writer;

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU8, Ordering};

use chrono::{SecondsFormat, Utc};
use hyper::{Method, StatusCode, Uri, Version};

use crate::config::Config;

/// Log severity, ordered from most to least verbose.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl Level {
    /// Parse a level name, case-insensitively. Unknown names fall back to
    /// `Info`.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "trace" => Self::Trace,
            "debug" => Self::Debug,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            "fatal" => Self::Fatal,
            _ => Self::Info,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }
}

/// Minimum severity that gets written. Set once at init.
static THRESHOLD: AtomicU8 = AtomicU8::new(Level::Info as u8);

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    THRESHOLD.store(Level::parse(&config.logging.level) as u8, Ordering::Relaxed);
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn enabled(level: Level) -> bool {
    level as u8 >= THRESHOLD.load(Ordering::Relaxed)
}

fn format_line(timestamp: &str, level: Level, message: &str) -> String {
    format!("{timestamp} [{:<5}] {message}", level.name())
}

fn emit(level: Level, message: &str) {
    if !enabled(level) {
        return;
    }
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let line = format_line(&timestamp, level, message);
    if level >= Level::Warn {
        write_error(&line);
    } else {
        write_output(&line);
    }
}

/// Write to the output log target
fn write_output(message: &str) {
    if writer::is_initialized() {
        writer::get().write_output(message);
    } else {
        println!("{message}");
    }
}

/// Write to the error log target
fn write_error(message: &str) {
    if writer::is_initialized() {
        writer::get().write_error(message);
    } else {
        eprintln!("{message}");
    }
}

pub fn trace(message: &str) {
    emit(Level::Trace, message);
}

pub fn debug(message: &str) {
    emit(Level::Debug, message);
}

pub fn info(message: &str) {
    emit(Level::Info, message);
}

pub fn warn(message: &str) {
    emit(Level::Warn, message);
}

pub fn error(message: &str) {
    emit(Level::Error, message);
}

pub fn fatal(message: &str) {
    emit(Level::Fatal, message);
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    info("======================================");
    info("servelite started successfully");
    info(&format!("Listening on: http://{addr}"));
    info(&format!("Web root: {}", config.site.web_root));
    info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        info(&format!("Output log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        info(&format!("Error log: {path}"));
    }
    info("======================================");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    info(&format!("[Request] {method} {uri} {version:?}"));
}

pub fn log_response(status: StatusCode, bytes: usize) {
    info(&format!("[Response] {status} ({bytes} bytes)"));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    error(&format!("Failed to serve connection: {err:?}"));
}
