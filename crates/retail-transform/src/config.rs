//! Database connection settings
//!
//! Credentials are read once at startup into an explicit [`DatabaseConfig`]
//! that is handed to [`crate::db::connect`]. Nothing else reads the environment.

use retail_common::CommonError;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Default PostgreSQL port.
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Default database host.
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default TLS mode; the hosted catalog database only accepts TLS.
pub const DEFAULT_DB_SSLMODE: &str = "require";

/// One connection is enough for a sequential run; the second covers the health check.
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 2;

/// Default connection acquire timeout in seconds.
pub const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the source catalog database
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Full connection URL; when set it wins over the individual fields
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub ssl_mode: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: DEFAULT_DB_HOST.to_string(),
            port: DEFAULT_DB_PORT,
            user: String::new(),
            password: String::new(),
            database: String::new(),
            ssl_mode: DEFAULT_DB_SSLMODE.to_string(),
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            connect_timeout_secs: DEFAULT_DB_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    /// Load `.env` if present, read the environment and validate
    pub fn load() -> retail_common::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_env()?;
        config.validate()?;

        Ok(config)
    }

    /// Read settings from environment variables
    ///
    /// - `DATABASE_URL`: full connection URL (optional)
    /// - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `DB_SSLMODE`
    /// - `DB_MAX_CONNECTIONS`, `DB_CONNECT_TIMEOUT`
    pub fn from_env() -> retail_common::Result<Self> {
        let defaults = Self::default();

        let port = match std::env::var("DB_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| CommonError::invalid_value("DB_PORT", &raw))?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            url: std::env::var("DATABASE_URL").ok().filter(|u| !u.is_empty()),
            host: std::env::var("DB_HOST").unwrap_or(defaults.host),
            port,
            user: std::env::var("DB_USER").unwrap_or_default(),
            password: std::env::var("DB_PASSWORD").unwrap_or_default(),
            database: std::env::var("DB_NAME").unwrap_or_default(),
            ssl_mode: std::env::var("DB_SSLMODE").unwrap_or(defaults.ssl_mode),
            max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_connections),
            connect_timeout_secs: std::env::var("DB_CONNECT_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.connect_timeout_secs),
        })
    }

    pub fn validate(&self) -> retail_common::Result<()> {
        if self.max_connections == 0 {
            return Err(CommonError::config("DB_MAX_CONNECTIONS must be greater than 0"));
        }

        if self.url.is_some() {
            return Ok(());
        }

        if self.host.is_empty() {
            return Err(CommonError::config("DB_HOST cannot be empty"));
        }
        if self.port == 0 {
            return Err(CommonError::config("DB_PORT must be greater than 0"));
        }
        if self.user.is_empty() {
            return Err(CommonError::config("DB_USER not set (or set DATABASE_URL)"));
        }
        if self.database.is_empty() {
            return Err(CommonError::config("DB_NAME not set (or set DATABASE_URL)"));
        }

        self.ssl_mode()?;
        Ok(())
    }

    fn ssl_mode(&self) -> retail_common::Result<PgSslMode> {
        self.ssl_mode
            .parse()
            .map_err(|_| CommonError::invalid_value("DB_SSLMODE", &self.ssl_mode))
    }

    /// Build driver connect options from the URL or the individual fields
    pub fn connect_options(&self) -> retail_common::Result<PgConnectOptions> {
        if let Some(url) = &self.url {
            return url
                .parse()
                .map_err(|_| CommonError::config("DATABASE_URL is not a valid PostgreSQL URL"));
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(self.ssl_mode()?))
    }
}
