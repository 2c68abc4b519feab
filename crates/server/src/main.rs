//! Complaint intake service binary.
//!
//! Wires the HTTP API to a storage backend and serves it.

use clap::Parser;
use intake_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        "Starting complaint intake server"
    );

    start_mongo(config).await
}

/// Starts the server with the MongoDB backend.
#[cfg(feature = "mongodb")]
async fn start_mongo(config: ServerConfig) -> anyhow::Result<()> {
    use intake_store::backends::mongo::{DEFAULT_URI, MongoConfig, MongoStore};
    use tracing::warn;

    let uri = match config.database_url.clone() {
        Some(url) => url,
        None => {
            warn!(
                uri = DEFAULT_URI,
                "INTAKE_DATABASE_URL is not set, falling back to the local development URI"
            );
            DEFAULT_URI.to_string()
        }
    };

    let store = MongoStore::new(MongoConfig {
        uri,
        database: config.database_name.clone(),
        ..Default::default()
    });

    let app = create_app_with_config(store, config.clone());
    serve(app, &config).await
}

/// Fallback when the mongodb feature is not enabled.
#[cfg(not(feature = "mongodb"))]
async fn start_mongo(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The MongoDB backend requires the 'mongodb' feature. \
         Build with: cargo build -p intake-server --features mongodb"
    )
}
