//! Startup import of the four sales datasets.
//!
//! Each CSV replaces the full contents of its table inside a single
//! transaction. Columns not used by the advisor are ignored.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Deserialize};

use super::{CustomerCode, Database};

pub const CUSTOMERS_FILE: &str = "customer_category.csv";
pub const CATEGORY_SALES_FILE: &str = "item_category_product_sales.csv";
pub const DAILY_BOUGHT_FILE: &str = "most_bought_items_by_each_customer_per_day.csv";
pub const SEGMENT_BOUGHT_FILE: &str = "each_customer_segmentwise_most_bought.csv";

/// Locations of the source files.
#[derive(Debug, Clone)]
pub struct DatasetFiles {
    pub customers: PathBuf,
    pub category_sales: PathBuf,
    pub daily_bought: PathBuf,
    pub segment_bought: PathBuf,
}

impl DatasetFiles {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            customers: dir.join(CUSTOMERS_FILE),
            category_sales: dir.join(CATEGORY_SALES_FILE),
            daily_bought: dir.join(DAILY_BOUGHT_FILE),
            segment_bought: dir.join(SEGMENT_BOUGHT_FILE),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CustomerRow {
    customer_code: CustomerCode,
    segment: String,
}

#[derive(Debug, Deserialize)]
struct CategorySalesRow {
    item_category: String,
    most_sold: String,
    second_most_sold: String,
    third_most_sold: String,
    least_sold: String,
    second_least_sold: String,
    third_least_sold: String,
}

#[derive(Debug, Deserialize)]
struct DailyBoughtRow {
    customer_code: CustomerCode,
    day_of_week: String,
    most_bought_item_category: String,
}

#[derive(Debug, Deserialize)]
struct SegmentBoughtRow {
    customer_code: CustomerCode,
    segment: String,
    most_bought: String,
    second_most_bought: String,
    third_most_bought: String,
    fourth_most_bought: String,
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut rows = Vec::new();
    for (index, record) in reader.deserialize().enumerate() {
        let row: T =
            record.with_context(|| format!("{}: bad record {}", path.display(), index + 1))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Import all four datasets. Must finish before the server starts listening.
pub async fn load_all(db: &Database, files: &DatasetFiles) -> Result<()> {
    load_customers(db, &files.customers).await?;
    load_category_sales(db, &files.category_sales).await?;
    load_daily_bought(db, &files.daily_bought).await?;
    load_segment_bought(db, &files.segment_bought).await?;
    Ok(())
}

pub async fn load_customers(db: &Database, path: &Path) -> Result<u64> {
    let rows: Vec<CustomerRow> = read_rows(path)?;
    let mut tx = db.pool().begin().await?;
    sqlx::query("DELETE FROM customer_category")
        .execute(&mut *tx)
        .await?;
    for row in &rows {
        sqlx::query(
            "INSERT OR REPLACE INTO customer_category (customer_code, segment) VALUES (?, ?)",
        )
        .bind(row.customer_code.0)
        .bind(&row.segment)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    log_loaded("customer_category", rows.len());
    Ok(rows.len() as u64)
}

pub async fn load_category_sales(db: &Database, path: &Path) -> Result<u64> {
    let rows: Vec<CategorySalesRow> = read_rows(path)?;
    let mut tx = db.pool().begin().await?;
    sqlx::query("DELETE FROM item_category_product_sales")
        .execute(&mut *tx)
        .await?;
    for row in &rows {
        sqlx::query(
            "INSERT OR REPLACE INTO item_category_product_sales \
             (item_category, most_sold, second_most_sold, third_most_sold, \
              least_sold, second_least_sold, third_least_sold) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&row.item_category)
        .bind(&row.most_sold)
        .bind(&row.second_most_sold)
        .bind(&row.third_most_sold)
        .bind(&row.least_sold)
        .bind(&row.second_least_sold)
        .bind(&row.third_least_sold)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    log_loaded("item_category_product_sales", rows.len());
    Ok(rows.len() as u64)
}

pub async fn load_daily_bought(db: &Database, path: &Path) -> Result<u64> {
    let rows: Vec<DailyBoughtRow> = read_rows(path)?;
    let mut tx = db.pool().begin().await?;
    sqlx::query("DELETE FROM most_bought_items")
        .execute(&mut *tx)
        .await?;
    for row in &rows {
        sqlx::query(
            "INSERT OR REPLACE INTO most_bought_items \
             (customer_code, day_of_week, most_bought_item_category) VALUES (?, ?, ?)",
        )
        .bind(row.customer_code.0)
        .bind(&row.day_of_week)
        .bind(&row.most_bought_item_category)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    log_loaded("most_bought_items", rows.len());
    Ok(rows.len() as u64)
}

pub async fn load_segment_bought(db: &Database, path: &Path) -> Result<u64> {
    let rows: Vec<SegmentBoughtRow> = read_rows(path)?;
    let mut tx = db.pool().begin().await?;
    sqlx::query("DELETE FROM each_customer_segmentwise_most_bought")
        .execute(&mut *tx)
        .await?;
    for row in &rows {
        sqlx::query(
            "INSERT OR REPLACE INTO each_customer_segmentwise_most_bought \
             (customer_code, segment, most_bought, second_most_bought, \
              third_most_bought, fourth_most_bought) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(row.customer_code.0)
        .bind(&row.segment)
        .bind(&row.most_bought)
        .bind(&row.second_most_bought)
        .bind(&row.third_most_bought)
        .bind(&row.fourth_most_bought)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    log_loaded("each_customer_segmentwise_most_bought", rows.len());
    Ok(rows.len() as u64)
}

fn log_loaded(table: &str, rows: usize) {
    tracing::info!(table, rows, "CSV data written to table");
}
