//! Connection settings read from the environment.
//!
//! The libpq variable names are used (`PGHOST`, `PGPORT`, `PGDATABASE`,
//! `PGUSER`, `PGPASSWORD`, `PGSSLMODE`) so an existing `psql` setup works
//! unchanged. A `.env` file in the working directory is loaded first.

use std::fmt;
use std::str::FromStr;

use postgres::config::SslMode as PgSslMode;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_USER: &str = "postgres";

/// TLS negotiation preference, as in `PGSSLMODE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SslMode {
    /// Never use TLS.
    Disable,
    /// Use TLS if the server supports it.
    #[default]
    Prefer,
    /// Fail unless TLS is used.
    Require,
}

impl FromStr for SslMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disable" => Ok(Self::Disable),
            "prefer" => Ok(Self::Prefer),
            "require" => Ok(Self::Require),
            other => Err(format!(
                "invalid PGSSLMODE {other:?}: expected disable, prefer, or require"
            )),
        }
    }
}

impl From<SslMode> for PgSslMode {
    fn from(mode: SslMode) -> Self {
        match mode {
            SslMode::Disable => Self::Disable,
            SslMode::Prefer => Self::Prefer,
            SslMode::Require => Self::Require,
        }
    }
}

/// Everything needed to open a database connection.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Server host name or socket directory.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database name.
    pub dbname: String,
    /// Role to connect as.
    pub user: String,
    /// Password, if the server requires one.
    pub password: Option<String>,
    /// TLS preference.
    pub ssl_mode: SslMode,
}

impl ConnectionConfig {
    /// Reads the configuration from the process environment, after loading `.env`.
    ///
    /// # Errors
    ///
    /// Returns an error if `PGPORT` or `PGSSLMODE` hold invalid values.
    pub fn from_env() -> Result<Self, String> {
        // A missing .env file is the common case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Unset and empty variables fall back to the libpq defaults; the
    /// database name defaults to the user name.
    ///
    /// # Errors
    ///
    /// Returns an error if `PGPORT` or `PGSSLMODE` hold invalid values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = match var("PGPORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| format!("invalid PGPORT {raw:?}: {e}"))?,
            None => DEFAULT_PORT,
        };
        let ssl_mode = match var("PGSSLMODE") {
            Some(raw) => raw.parse::<SslMode>()?,
            None => SslMode::default(),
        };
        let user = var("PGUSER").unwrap_or_else(|| DEFAULT_USER.to_string());
        let dbname = var("PGDATABASE").unwrap_or_else(|| user.clone());

        Ok(Self {
            host: var("PGHOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            dbname,
            user,
            password: var("PGPASSWORD"),
            ssl_mode,
        })
    }

    /// Converts into a `postgres` client configuration.
    #[must_use]
    pub fn to_postgres(&self) -> postgres::Config {
        let mut config = postgres::Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .dbname(&self.dbname)
            .user(&self.user)
            .ssl_mode(self.ssl_mode.into());
        if let Some(password) = &self.password {
            config.password(password);
        }
        config
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}
