use std::sync::Arc;

use anyhow::Result;

pub mod ai;
pub mod api;
pub mod catalog;
pub mod clock;
mod config;
pub mod db;
pub mod error;
pub mod formatting;
pub mod handlers;
pub mod messages;
pub mod prompt;
mod text_utils;

pub use api::router as api_router;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::AdvisorError;
pub use formatting::format_message;
pub use handlers::{parse_input, Advisor, Reply};
pub use prompt::{build_prompt, Function, PromptOutcome};
pub use text_utils::{capitalize_first, category_title};

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting shopping advisor...");

    // A missing API key is fatal before anything is served.
    let config = Config::from_env()?;

    // --- SQLite Pool ---
    let db_url = db::prepare_sqlite_url(&config.db_url);
    tracing::info!("Connecting to database at: {}", &db_url);
    let pool = db::connect_db(&db_url, 5).await?;
    tracing::info!("Database connection successful.");

    // --- Run Migrations ---
    db::migrate(&pool).await?;
    let db = db::Database::new(pool);

    // --- Import Datasets ---
    // All four tables are filled before the listener is bound; after this the
    // store is only read.
    let files = db::DatasetFiles::in_dir(&config.data_dir);
    db::load_all(&db, &files).await?;

    // --- Completion Gateway ---
    let completer = ai::OpenAiCompleter::new(&config.ai)?;
    tracing::info!(model = completer.model(), "Completion gateway ready");

    let advisor = Advisor::new(db, Arc::new(completer), Arc::new(SystemClock));

    // --- HTTP Server ---
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(bind_addr = %config.bind_addr, "Listening");
    axum::serve(listener, api_router(advisor))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shopping advisor stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
    }
}
