// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads; defaults to the number of CPU cores when unset
    pub workers: Option<usize>,
}

/// Site layout configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Directory prepended to every request path. No trailing slash.
    pub web_root: String,
    /// Path served when the request target is exactly `/`
    pub index_path: String,
    /// Folder under the web root holding JS concatenation members
    pub concat_js_folder: String,
    /// Folder under the web root holding CSS concatenation members
    pub concat_css_folder: String,
    /// Exact request path that triggers JS concatenation
    pub concat_js_route: String,
    /// Exact request path that triggers CSS concatenation
    pub concat_css_route: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Output log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Value of the Server header on every response
    pub server_name: String,
}
