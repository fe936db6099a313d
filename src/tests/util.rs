use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ai::{Completer, CompletionError};
use crate::db::{connect_db, migrate, Database};

/// In-memory database with the schema applied and a small set of rows.
///
/// Customers:
/// * 101 Dairy Aficionados, full data for Monday
/// * 102 Fresh Produce Lovers, no sales record for vegetables
/// * 103 segment without preferred categories
/// * 104 Diverse Shoppers
/// * 105 Dairy Aficionados, no daily purchases
pub async fn init_test_db() -> Database {
    let pool = connect_db("sqlite::memory:", 1)
        .await
        .expect("failed to create in-memory database");
    migrate(&pool).await.expect("failed to run migrations");

    let customers = [
        (101, "Dairy Aficionados"),
        (102, "Fresh Produce Lovers"),
        (103, "Night Owls"),
        (104, "Diverse Shoppers"),
        (105, "Dairy Aficionados"),
    ];
    for (code, segment) in customers {
        sqlx::query("INSERT INTO customer_category (customer_code, segment) VALUES (?, ?)")
            .bind(code)
            .bind(segment)
            .execute(&pool)
            .await
            .unwrap();
    }

    let sales = [
        (
            "dairy",
            ["Milk", "Cheese", "Yogurt", "Kefir", "Ghee", "Quark"],
        ),
        (
            "fruits",
            ["Apples", "Bananas", "Grapes", "Quince", "Figs", "Dates"],
        ),
        (
            "frozen_meat",
            ["Chicken", "Beef", "Lamb", "Duck", "Venison", "Rabbit"],
        ),
        (
            "seafood",
            ["Salmon", "Shrimp", "Tuna", "Eel", "Squid", "Clams"],
        ),
    ];
    for (category, ranks) in sales {
        sqlx::query(
            "INSERT INTO item_category_product_sales (item_category, most_sold, second_most_sold, \
             third_most_sold, least_sold, second_least_sold, third_least_sold) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(category)
        .bind(ranks[0])
        .bind(ranks[1])
        .bind(ranks[2])
        .bind(ranks[3])
        .bind(ranks[4])
        .bind(ranks[5])
        .execute(&pool)
        .await
        .unwrap();
    }

    for (code, day, category) in [(101, "Monday", "dairy"), (102, "Monday", "fruits")] {
        sqlx::query(
            "INSERT INTO most_bought_items (customer_code, day_of_week, most_bought_item_category) \
             VALUES (?, ?, ?)",
        )
        .bind(code)
        .bind(day)
        .bind(category)
        .execute(&pool)
        .await
        .unwrap();
    }

    let segment_bought = [
        (
            101,
            "Dairy Aficionados",
            ["Milk", "Cheese", "Butter", "Yogurt"],
        ),
        (
            102,
            "Fresh Produce Lovers",
            ["Apples", "Bananas", "Carrots", "Spinach"],
        ),
        (
            105,
            "Dairy Aficionados",
            ["Cream", "Milk", "Butter", "Cheese"],
        ),
    ];
    for (code, segment, items) in segment_bought {
        sqlx::query(
            "INSERT INTO each_customer_segmentwise_most_bought (customer_code, segment, \
             most_bought, second_most_bought, third_most_bought, fourth_most_bought) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(code)
        .bind(segment)
        .bind(items[0])
        .bind(items[1])
        .bind(items[2])
        .bind(items[3])
        .execute(&pool)
        .await
        .unwrap();
    }

    Database::new(pool)
}

/// Completer that returns a canned reply and records what it was asked.
pub struct ScriptedCompleter {
    reply: Option<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedCompleter {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Every call fails as if the service returned no content.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Completer for ScriptedCompleter {
    async fn complete(
        &self,
        _system_prompt: &str,
        prompt: &str,
    ) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or(CompletionError::Empty)
    }
}
