//! Service configuration.
//!
//! Values are resolved once at startup: built-in defaults, then an optional
//! TOML file, then environment variables. Command-line overrides are applied
//! last by the entry point via [`ServiceConfig::override_server`].

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use url::Url;

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Database connection settings.
    database: DatabaseConfig,
    /// HTTP listener settings.
    server: ServerConfig,
}

/// MySQL connection settings.
#[derive(Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database host.
    host: String,
    /// Database port.
    port: u16,
    /// Database user.
    user: String,
    /// Database password. Empty means no password.
    password: String,
    /// Database (schema) name.
    database: String,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to.
    host: String,
    /// Port to listen on.
    port: u16,
    /// Path prefix every route is mounted under. Empty mounts at the root.
    route_prefix: String,
    /// Whether 500 responses carry the raw database message.
    expose_db_errors: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            database: "gamedb".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            route_prefix: "/game-data".to_string(),
            expose_db_errors: true,
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let password = if self.password.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &password)
            .field("database", &self.database)
            .finish()
    }
}

impl ServiceConfig {
    /// Loads configuration from an optional TOML file, then applies the
    /// process environment on top.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if an
    /// environment variable holds a malformed value.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                debug!("No config file given, starting from defaults");
                Self::default()
            }
        };
        base.with_env()
    }

    /// Loads configuration from a TOML file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!("Config file loaded");
        Ok(config)
    }

    /// Applies overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable holds a malformed value.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides read through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// Recognized variables are `MYSQL_HOST`, `MYSQL_PORT`, `MYSQL_USER`,
    /// `MYSQL_PASSWORD`, `MYSQL_DATABASE`, `HOST`, `PORT`, `ROUTE_PREFIX` and
    /// `EXPOSE_DB_ERRORS`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a port or boolean variable cannot be parsed.
    #[instrument(skip_all)]
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("MYSQL_HOST") {
            self.database.host = host;
        }
        if let Some(port) = lookup("MYSQL_PORT") {
            self.database.port = parse_port("MYSQL_PORT", &port)?;
        }
        if let Some(user) = lookup("MYSQL_USER") {
            self.database.user = user;
        }
        if let Some(password) = lookup("MYSQL_PASSWORD") {
            self.database.password = password;
        }
        if let Some(database) = lookup("MYSQL_DATABASE") {
            self.database.database = database;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_port("PORT", &port)?;
        }
        if let Some(prefix) = lookup("ROUTE_PREFIX") {
            self.server.route_prefix = prefix;
        }
        if let Some(expose) = lookup("EXPOSE_DB_ERRORS") {
            self.server.expose_db_errors = parse_flag("EXPOSE_DB_ERRORS", &expose)?;
        }
        Ok(self)
    }

    /// Replaces listener settings with any values given on the command line.
    pub fn override_server(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        route_prefix: Option<String>,
    ) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(prefix) = route_prefix {
            self.server.route_prefix = prefix;
        }
        self
    }
}

impl DatabaseConfig {
    /// Builds the `mysql://` connection URL, percent-encoding the credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the host is not a valid URL host.
    pub fn connection_url(&self) -> Result<String, ConfigError> {
        let mut url = Url::parse("mysql://localhost")
            .map_err(|e| ConfigError::new(format!("Invalid base URL: {}", e)))?;

        url.set_host(Some(&self.host))
            .map_err(|e| ConfigError::new(format!("Invalid database host '{}': {}", self.host, e)))?;
        url.set_port(Some(self.port))
            .map_err(|_| ConfigError::new("Cannot set database port"))?;
        url.set_username(&self.user)
            .map_err(|_| ConfigError::new("Cannot set database user"))?;
        if !self.password.is_empty() {
            url.set_password(Some(&self.password))
                .map_err(|_| ConfigError::new("Cannot set database password"))?;
        }
        url.set_path(&self.database);

        Ok(url.into())
    }
}

impl ServerConfig {
    /// Returns the route prefix with a leading slash and no trailing slash,
    /// or an empty string for the root.
    pub fn normalized_prefix(&self) -> String {
        normalize_prefix(&self.route_prefix)
    }
}

/// Normalizes a route prefix to `""` or `/segment[/segment...]`.
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

fn parse_port(key: &str, value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|e| ConfigError::new(format!("{} must be a port number, got '{}': {}", key, value, e)))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::new(format!(
            "{} must be a boolean, got '{}'",
            key, value
        ))),
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
