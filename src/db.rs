// Database related types and functions

use anyhow::Result;
use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};

pub mod database;
pub mod ingest;
pub mod sales;
pub mod types;

pub use database::Database;
pub use ingest::{load_all, DatasetFiles};
pub use sales::{CategorySales, Customer, DailyBought, SegmentBought};
pub use types::CustomerCode;

/// Lets sqlx create the sales database on first start.
///
/// File-backed sqlite URLs without an explicit `mode=` get `mode=rwc`;
/// in-memory and non-sqlite URLs pass through.
pub fn prepare_sqlite_url(url: &str) -> String {
    let is_file = url.starts_with("sqlite:") && !url.contains(":memory:");
    if !is_file || url.contains("mode=") {
        return url.to_string();
    }
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}mode=rwc")
}

pub async fn connect_db(db_url: &str, max_connections: u32) -> Result<Pool<Sqlite>> {
    tracing::debug!(db_url = %db_url, max_connections, "Connecting to database");
    Ok(SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(db_url)
        .await?)
}

/// Applies the embedded schema migrations.
pub async fn migrate(pool: &Pool<Sqlite>) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
