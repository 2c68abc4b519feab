//! Server configuration for the complaint intake API.
//!
//! Supports programmatic construction, command line arguments, and
//! environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `INTAKE_SERVER_PORT` | 8080 | Server port |
//! | `INTAKE_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `INTAKE_LOG_LEVEL` | info | Log level (error, warn, info, debug, trace) |
//! | `INTAKE_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `INTAKE_ENABLE_CORS` | true | Enable CORS |
//! | `INTAKE_CORS_ORIGINS` | * | Allowed origins |
//! | `INTAKE_CORS_METHODS` | GET,POST,PATCH,DELETE,OPTIONS | Allowed methods |
//! | `INTAKE_CORS_HEADERS` | Content-Type,Authorization | Allowed headers |
//! | `INTAKE_DATABASE_URL` | unset | MongoDB connection string |
//! | `INTAKE_DATABASE_NAME` | unset | Database name override |
//!
//! When `INTAKE_DATABASE_URL` is unset the server falls back to a local
//! development URI and logs a warning; production deployments must set it.

use clap::Parser;

/// Server configuration for the complaint intake API.
///
/// Construct from environment variables with [`ServerConfig::from_env`],
/// from command line arguments with `ServerConfig::parse`, or
/// programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "intake-server")]
#[command(about = "Complaint intake HTTP API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "INTAKE_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "INTAKE_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "INTAKE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "INTAKE_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "INTAKE_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "INTAKE_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "INTAKE_CORS_METHODS",
        default_value = "GET,POST,PATCH,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "INTAKE_CORS_HEADERS",
        default_value = "Content-Type,Authorization"
    )]
    pub cors_headers: String,

    /// MongoDB connection string.
    #[arg(long, env = "INTAKE_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Database name, overriding any database named in the connection
    /// string.
    #[arg(long, env = "INTAKE_DATABASE_NAME")]
    pub database_name: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PATCH,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization".to_string(),
            database_url: None,
            database_name: None,
        }
    }
}

impl ServerConfig {
    /// Creates a `ServerConfig` from environment variables, falling back to
    /// defaults without requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing: ephemeral port, short
    /// timeout, CORS disabled.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            database_url: None,
            database_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert!(config.enable_cors);
        assert_eq!(config.cors_methods, "GET,POST,PATCH,DELETE,OPTIONS");
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("Port")));
    }

    #[test]
    fn test_validate_invalid_timeout() {
        let config = ServerConfig {
            request_timeout: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert!(!config.enable_cors);
        assert_eq!(config.request_timeout, 5);
    }
}
