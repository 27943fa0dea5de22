/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables and
 * opens the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * `AppConfig::from_env` reads the process environment (after `.env` has been
 * loaded by `main`). `AppConfig::from_lookup` accepts any lookup function so
 * tests never touch process-wide state.
 *
 * | Variable | Default |
 * |---|---|
 * | `DATABASE_URL` | required |
 * | `DB_NAME` | `chat_history` |
 * | `JWT_SECRET_KEY` / `JWT_SECRET` | insecure development secret |
 * | `CORS_ORIGINS` | `*` |
 * | `SMTP_SERVER` / `SMTP_PORT` | `smtp.gmail.com` / `587` |
 * | `SMTP_USERNAME` / `SMTP_PASSWORD` | unset (mail delivery disabled) |
 * | `SERVER_PORT` | `8001` |
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

/// Secret used when none is configured. Tokens signed with it are only fit
/// for local development.
pub const DEV_JWT_SECRET: &str = "your-secret-key-change-in-production";

const DEFAULT_DB_NAME: &str = "chat_history";
const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_SERVER_PORT: u16 = 8001;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Outbound mail credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    pub server: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// Immutable server configuration, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Store connection string (sqlx SQLite URL, or a directory URL that
    /// `database_url` completes with `database_name`)
    pub database_url: String,
    pub database_name: String,
    pub jwt_secret: String,
    /// Allowed cross-origin hosts; `*` allows any origin
    pub cors_origins: Vec<String>,
    /// `None` disables real delivery; verification codes are logged instead
    pub smtp: Option<SmtpConfig>,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::MissingValue("DATABASE_URL"))?;
        let database_name = get("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string());

        let jwt_secret = get("JWT_SECRET_KEY")
            .or_else(|| get("JWT_SECRET"))
            .unwrap_or_else(|| {
                tracing::warn!("JWT_SECRET_KEY not set, using the insecure development secret");
                DEV_JWT_SECRET.to_string()
            });

        let cors_origins = get("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let smtp = match (get("SMTP_USERNAME"), get("SMTP_PASSWORD")) {
            (Some(username), Some(password)) => Some(SmtpConfig {
                server: get("SMTP_SERVER").unwrap_or_else(|| DEFAULT_SMTP_SERVER.to_string()),
                port: parse_port("SMTP_PORT", get("SMTP_PORT"), DEFAULT_SMTP_PORT)?,
                username,
                password,
            }),
            _ => None,
        };

        let port = parse_port("SERVER_PORT", get("SERVER_PORT"), DEFAULT_SERVER_PORT)?;

        Ok(Self {
            database_url,
            database_name,
            jwt_secret,
            cors_origins,
            smtp,
            port,
        })
    }

    /// Full sqlx connection URL
    ///
    /// URLs that already name a database (in-memory, `.db`/`.sqlite` files,
    /// or URLs with query options) are used as-is. Anything else is treated
    /// as a directory and completed with `<database_name>.db`.
    pub fn database_url(&self) -> String {
        let url = self.database_url.trim_end_matches('/');
        if url.contains(":memory:")
            || url.contains('?')
            || url.ends_with(".db")
            || url.ends_with(".sqlite")
        {
            url.to_string()
        } else {
            format!("{}/{}.db", url, self.database_name)
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|origin| origin == "*")
    }
}

fn parse_port(name: &'static str, value: Option<String>, default: u16) -> Result<u16, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}

/// Open the connection pool and run migrations
///
/// In-memory databases live as long as their connection, so they get a
/// single connection that is never recycled.
pub async fn connect_database(url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(8)
            .connect_with(options)
            .await?
    };

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}
