// Configuration module entry point
// Loads the typed configuration from file, environment and built-in defaults

mod types;

use std::net::SocketAddr;

pub use types::{Config, HttpConfig, LoggingConfig, ServerConfig, SiteConfig};

impl Config {
    /// Load configuration from "config.toml" in the working directory, or
    /// from the file named by `SERVELITE_CONFIG` when set.
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::var("SERVELITE_CONFIG").unwrap_or_else(|_| "config".to_string());
        Self::load_from(&path)
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// A missing file is not an error: every key has a default, and
    /// `SERVELITE_`-prefixed environment variables are applied on top.
    /// Nested keys use a double-underscore separator, e.g.
    /// `SERVELITE_SERVER__PORT=8080` overrides `server.port`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::load_with_env(config_path, env_source())
    }

    fn load_with_env(
        config_path: &str,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(env)
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("site.web_root", "webapp")?
            .set_default("site.index_path", "/index.html")?
            .set_default("site.concat_js_folder", "/js/concat/")?
            .set_default("site.concat_css_folder", "/css/concat/")?
            .set_default("site.concat_js_route", "/concat.js")?
            .set_default("site.concat_css_route", "/concat.css")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("http.server_name", "servelite/0.3")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// `SERVELITE_`-prefixed environment source. The `__` separator addresses
/// nested keys; section and field names themselves may contain `_`.
fn env_source() -> config::Environment {
    config::Environment::with_prefix("SERVELITE")
        .prefix_separator("_")
        .separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let cfg = Config::load_from("no-such-config").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.server.workers, None);
        assert_eq!(cfg.site.web_root, "webapp");
        assert_eq!(cfg.site.index_path, "/index.html");
        assert_eq!(cfg.site.concat_js_folder, "/js/concat/");
        assert_eq!(cfg.site.concat_css_folder, "/css/concat/");
        assert_eq!(cfg.site.concat_js_route, "/concat.js");
        assert_eq!(cfg.site.concat_css_route, "/concat.css");
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.logging.access_log);
        assert!(cfg.logging.access_log_file.is_none());
        assert!(cfg.logging.error_log_file.is_none());
        assert_eq!(cfg.http.server_name, "servelite/0.3");
    }

    #[test]
    fn test_env_overrides_reach_nested_keys() {
        let vars: config::Map<String, String> = [
            ("SERVELITE_SERVER__PORT".to_string(), "9000".to_string()),
            ("SERVELITE_SITE__WEB_ROOT".to_string(), "public".to_string()),
            (
                "SERVELITE_LOGGING__ACCESS_LOG".to_string(),
                "false".to_string(),
            ),
        ]
        .into_iter()
        .collect();

        let cfg =
            Config::load_with_env("no-such-config", env_source().source(Some(vars))).unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.site.web_root, "public");
        assert!(!cfg.logging.access_log);
    }

    #[test]
    fn test_socket_addr_from_host_and_port() {
        let mut cfg = Config::load_from("no-such-config").unwrap();
        cfg.server.host = "0.0.0.0".to_string();
        cfg.server.port = 8080;
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let mut cfg = Config::load_from("no-such-config").unwrap();
        cfg.server.host = "not a hostname".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }
}
