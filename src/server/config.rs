/**
 * Server Configuration
 *
 * Loads server configuration from environment variables (a `.env` file
 * is honored by `main`). The signing secret and database URL are
 * required - there is deliberately no baked-in fallback secret - and
 * both are loaded exactly once at process start and injected into the
 * application state.
 */

use std::path::PathBuf;

use sqlx::PgPool;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_IMAGE_DIR: &str = "images";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },
}

/// Process-wide server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// JWT signing secret
    pub jwt_secret: String,
    /// Directory uploaded image assets are stored in and served from
    pub image_dir: PathBuf,
    /// TCP port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// Required: `DATABASE_URL`, `JWT_SECRET`.
    /// Optional: `SERVER_PORT` (default 8080), `IMAGE_DIR` (default `images`).
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

        let image_dir = std::env::var("IMAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_IMAGE_DIR));

        let port = match std::env::var("SERVER_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar {
                    var: "SERVER_PORT",
                    value,
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            image_dir,
            port,
        })
    }
}

/// Create the database connection pool and run migrations
///
/// Unlike configuration of optional services, the database is
/// mandatory: the server does not start without it.
pub async fn connect_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}
