use kg_server::{AppState, build_router, error::ServerError, logger};

use kg_classifier::{Classifier, KneeClassifier, TfServingClassifier};
use kg_db::{DbError, MIGRATOR};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = kg_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = kg_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir).map_err(|source| ServerError::Io {
            path: log_dir.clone(),
            source,
        })?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting kg-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(config.server.max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await
        .map_err(|e| ServerError::Database(DbError::from(e)))?;

    info!("Database connection established");

    info!("Running database migrations...");
    MIGRATOR
        .run(&pool)
        .await
        .map_err(|e| ServerError::Database(DbError::from(e)))?;
    info!("Migrations complete");

    // Both models are reached over TF Serving; built once, shared by all requests
    let timeout = config.classifier_timeout();
    let vgg16: Arc<dyn Classifier> = Arc::new(TfServingClassifier::new(
        &config.classifier.endpoint,
        &config.classifier.vgg16_model,
        timeout,
    )?);
    let mobilenet_v2: Arc<dyn Classifier> = Arc::new(TfServingClassifier::new(
        &config.classifier.endpoint,
        &config.classifier.mobilenet_model,
        timeout,
    )?);
    let classifier = Arc::new(KneeClassifier::new(
        vgg16,
        mobilenet_v2,
        config.classifier.input_size,
    ));
    info!(
        "Classifier ready: {} and {} at {}",
        config.classifier.vgg16_model,
        config.classifier.mobilenet_model,
        config.classifier.endpoint
    );

    let upload_dir = config.upload_dir();
    std::fs::create_dir_all(&upload_dir).map_err(|source| ServerError::Io {
        path: upload_dir.clone(),
        source,
    })?;
    info!("Uploads stored in {}", upload_dir.display());

    let app_state = AppState {
        pool: pool.clone(),
        classifier,
        upload_dir,
    };

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
