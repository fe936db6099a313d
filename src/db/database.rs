use sqlx::{Pool, Sqlite};

/// Handle to the sales tables.
///
/// Clones share one connection pool. After the startup import the tables are
/// only read; the importer opens its transactions through [`Database::pool`].
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}
