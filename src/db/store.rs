use crate::db::models::{CreatedItem, Item, NewItem};
use crate::db::schema::MYSQL_INIT;
use crate::error::LarderError;
use futures::future::try_join_all;
use sqlx::MySqlPool;
use tracing::info;

/// Fixed rows for `POST /seed`. Re-seeding appends; there is no uniqueness
/// constraint or dedup.
pub const SEED_ITEMS: [(&str, &str); 3] = [
    ("Item A", "This is the first seeded item."),
    ("Item B", "This is the second seeded item."),
    ("Item C", "This is the third seeded item."),
];

#[derive(Clone)]
pub struct ItemStore {
    pool: MySqlPool,
}

impl ItemStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL on a single
    /// acquired connection; the guard releases it on every exit path.
    pub async fn init_schema(&self) -> Result<(), LarderError> {
        let mut conn = self.pool.acquire().await.map_err(LarderError::SchemaInit)?;
        sqlx::query(MYSQL_INIT)
            .execute(&mut *conn)
            .await
            .map_err(LarderError::SchemaInit)?;
        Ok(())
    }

    /// All items, newest first. An empty table is a valid, empty result.
    pub async fn list_all(&self) -> Result<Vec<Item>, LarderError> {
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, name, description, created_at FROM items ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    pub async fn create(&self, new: NewItem) -> Result<CreatedItem, LarderError> {
        let result = sqlx::query("INSERT INTO items (name, description) VALUES (?, ?)")
            .bind(&new.name)
            .bind(&new.description)
            .execute(&self.pool)
            .await?;
        Ok(CreatedItem {
            id: result.last_insert_id() as i64,
            name: new.name,
            description: new.description,
        })
    }

    /// Deletes zero or one row; an absent id is a success ("row absent" is
    /// the stable end state).
    pub async fn delete_by_id(&self, id: i64) -> Result<(), LarderError> {
        sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Issue the three sample inserts concurrently and await them together;
    /// any single failure fails the whole operation.
    pub async fn seed_samples(&self) -> Result<(), LarderError> {
        let inserts = SEED_ITEMS.iter().map(|(name, description)| {
            sqlx::query("INSERT INTO items (name, description) VALUES (?, ?)")
                .bind(*name)
                .bind(*description)
                .execute(&self.pool)
        });
        try_join_all(inserts).await?;
        info!(count = SEED_ITEMS.len(), "sample items seeded");
        Ok(())
    }
}
