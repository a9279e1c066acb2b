use sqlx::{SqliteConnection, SqlitePool};

use crate::{
    error::StorageError,
    models::quotes::{NewQuote, Quote},
};

/// The `quotes` table.
///
/// Cloning is cheap, every clone shares the same pool.
#[derive(Clone, Debug)]
pub struct QuoteStore {
    pool: SqlitePool,
}

impl QuoteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    #[tracing::instrument(skip_all)]
    pub async fn count(&self) -> Result<i64, StorageError> {
        let mut conn = self.pool.acquire().await?;

        count_quotes(&mut conn).await
    }

    /// Inserts every record in a single transaction. Nothing is written if any
    /// record is rejected.
    #[tracing::instrument(skip_all, fields(records = records.len()))]
    pub async fn insert_all(&self, records: &[NewQuote]) -> Result<u64, StorageError> {
        validate(records)?;

        let mut tx = self.pool.begin().await?;
        let inserted = insert_quotes(&mut tx, records).await?;
        tx.commit().await?;

        Ok(inserted)
    }

    /// Like [`QuoteStore::insert_all`], but only when the table is empty.
    ///
    /// The transaction takes sqlite's write lock before counting, so a racing
    /// caller waits (up to the busy timeout) and then sees the committed rows.
    /// Returns `None` without writing anything if the table already has rows.
    #[tracing::instrument(skip_all, fields(records = records.len()))]
    pub async fn insert_all_if_empty(
        &self,
        records: &[NewQuote],
    ) -> Result<Option<u64>, StorageError> {
        validate(records)?;

        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let existing = count_quotes(&mut tx).await?;
        if existing != 0 {
            tracing::debug!(existing, "quotes table is not empty, not inserting");
            tx.rollback().await?;

            return Ok(None);
        }

        let inserted = insert_quotes(&mut tx, records).await?;
        tx.commit().await?;

        Ok(Some(inserted))
    }

    /// One quote in sqlite's `RANDOM()` order, or `None` if the table is empty.
    #[tracing::instrument(skip_all)]
    pub async fn pick_random(&self) -> Result<Option<Quote>, StorageError> {
        let quote = sqlx::query_as::<_, Quote>(
            r#"
                SELECT
                    id, text, author
                FROM quotes
                ORDER BY RANDOM()
                LIMIT 1;
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when fetching a random quote"))?;

        Ok(quote)
    }
}

fn validate(records: &[NewQuote]) -> Result<(), StorageError> {
    match records
        .iter()
        .position(|record| record.text.trim().is_empty())
    {
        Some(index) => Err(StorageError::EmptyText { index }),
        None => Ok(()),
    }
}

async fn count_quotes(conn: &mut SqliteConnection) -> Result<i64, StorageError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM quotes;")
        .fetch_one(conn)
        .await
        .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when counting quotes"))?;

    Ok(count)
}

async fn insert_quotes(
    conn: &mut SqliteConnection,
    records: &[NewQuote],
) -> Result<u64, StorageError> {
    let mut inserted = 0;

    for record in records {
        let result = sqlx::query(
            r#"
                INSERT INTO
                    quotes (id, text, author)
                VALUES
                    ($1, $2, $3);
            "#,
        )
        .bind(record.id)
        .bind(&record.text)
        .bind(&record.author)
        .execute(&mut *conn)
        .await;

        match result {
            Ok(done) => inserted += done.rows_affected(),
            Err(e) => {
                let unique_violation = e
                    .as_database_error()
                    .is_some_and(|db| db.is_unique_violation());

                return Err(match record.id {
                    Some(id) if unique_violation => StorageError::DuplicateId(id),
                    _ => {
                        tracing::error!(err = ?e, id = ?record.id, "an error occurred when inserting quote");
                        StorageError::Database(e)
                    }
                });
            }
        }
    }

    Ok(inserted)
}
