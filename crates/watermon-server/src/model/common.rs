//! Configuration and shared application state
//!
//! Configuration layers `conf/application.yml`, `WATERMON`-prefixed
//! environment variables, and CLI overrides, and exposes typed accessors
//! the way the rest of the code wants to read them.

use std::time::Duration;

use clap::Parser;
use config::{Config, Environment};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use watermon_common::error::WatermonError;

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command()]
struct Cli {
    #[arg(short = 'p', long = "port", env = "PORT")]
    port: Option<u16>,
    #[arg(long = "db-url", env = "DATABASE_URL")]
    database_url: Option<String>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new() -> Self {
        let args = Cli::parse();
        let mut config_builder = Config::builder()
            .add_source(
                Environment::with_prefix("watermon")
                    .separator(".")
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("conf/application.yml"));

        if let Some(v) = args.port {
            config_builder = config_builder
                .set_override("server.port", i64::from(v))
                .expect("Failed to set server port override");
        }
        if let Some(v) = args.database_url {
            config_builder = config_builder
                .set_override("db.url", v)
                .expect("Failed to set database URL override");
        }

        let app_config = config_builder
            .build()
            .expect("Failed to build configuration - check conf/application.yml");

        Configuration { config: app_config }
    }

    // ========================================================================
    // Server Configuration
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string("server.address")
            .unwrap_or(DEFAULT_SERVER_ADDRESS.to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int("server.port")
            .unwrap_or(DEFAULT_SERVER_PORT as i64) as u16
    }

    // ========================================================================
    // Database Configuration
    // ========================================================================

    /// Full connection URL when given, otherwise composed from the
    /// discrete credential fields.
    fn database_url(&self) -> anyhow::Result<String> {
        if let Ok(url) = self.config.get_string("db.url") {
            return Ok(url);
        }

        let username = self.config.get_string("db.username");
        let password = self.config.get_string("db.password");
        let name = self.config.get_string("db.name");
        let (Ok(username), Ok(password), Ok(name)) = (username, password, name) else {
            return Err(WatermonError::ConfigError(
                "either db.url or db.username/db.password/db.name must be set".to_string(),
            )
            .into());
        };
        let host = self
            .config
            .get_string("db.host")
            .unwrap_or("localhost".to_string());
        let port = self.config.get_int("db.port").unwrap_or(3306);

        Ok(format!("mysql://{username}:{password}@{host}:{port}/{name}"))
    }

    pub async fn database_connection(&self) -> anyhow::Result<DatabaseConnection> {
        let max_connections = self
            .config
            .get_int("db.pool.maxConnections")
            .unwrap_or(20) as u32;
        let min_connections = self.config.get_int("db.pool.minConnections").unwrap_or(1) as u32;
        let connect_timeout = self.config.get_int("db.pool.connectTimeout").unwrap_or(30) as u64;
        let acquire_timeout = self.config.get_int("db.pool.acquireTimeout").unwrap_or(8) as u64;
        let idle_timeout = self.config.get_int("db.pool.idleTimeout").unwrap_or(10) as u64;
        let max_lifetime = self.config.get_int("db.pool.maxLifetime").unwrap_or(1800) as u64;
        let sqlx_logging = self
            .config
            .get_bool("db.pool.sqlxLogging")
            .unwrap_or(false);

        let url = self.database_url()?;

        let mut opt = ConnectOptions::new(url);

        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(connect_timeout))
            .acquire_timeout(Duration::from_secs(acquire_timeout))
            .idle_timeout(Duration::from_secs(idle_timeout))
            .max_lifetime(Duration::from_secs(max_lifetime))
            .sqlx_logging(sqlx_logging);

        tracing::info!(
            max_connections = max_connections,
            min_connections = min_connections,
            connect_timeout = connect_timeout,
            idle_timeout = idle_timeout,
            max_lifetime = max_lifetime,
            "Database connection pool configured"
        );

        let database_connection = Database::connect(opt)
            .await
            .map_err(|e| WatermonError::DatabaseError(e.to_string()))?;

        Ok(database_connection)
    }
}

/// Application state shared across all handlers
#[derive(Debug)]
pub struct AppState {
    pub configuration: Configuration,
    pub database_connection: DatabaseConnection,
}
