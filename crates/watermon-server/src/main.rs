//! Main entry point for the watermon server.
//!
//! Loads configuration, initializes logging, acquires the connection pool,
//! and starts the HTTP server.

use std::sync::Arc;

use tracing::info;
use watermon_server::{
    model::common::{AppState, Configuration},
    startup,
};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let configuration = Configuration::new();
    startup::init_logging();

    // One pool for the whole process; handlers borrow it through AppState.
    let database_connection = configuration.database_connection().await?;
    database_connection.ping().await?;
    info!("Connected to the store");

    let address = configuration.server_address();
    let port = configuration.server_port();

    let app_state = Arc::new(AppState {
        configuration,
        database_connection,
    });

    info!("Starting watermon server on {}:{}", address, port);
    startup::server(app_state, address, port)?.await?;

    Ok(())
}
