//! Borrows repository for ledger inserts and the summary aggregation

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres, Row, Transaction};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::borrow::{BorrowRecord, BorrowSummary, BorrowedBook},
};

#[derive(Clone)]
pub struct BorrowsRepository {
    pool: Pool<Postgres>,
}

impl BorrowsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Append a borrow record to the ledger
    pub async fn insert(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book_id: Uuid,
        quantity: i32,
        due_date: DateTime<Utc>,
    ) -> AppResult<BorrowRecord> {
        let record = sqlx::query_as::<_, BorrowRecord>(
            r#"
            INSERT INTO borrows (book_id, quantity, due_date)
            VALUES ($1, $2, $3)
            RETURNING id, book_id, quantity, due_date, created_at
            "#,
        )
        .bind(book_id)
        .bind(quantity)
        .bind(due_date)
        .fetch_one(&mut **tx)
        .await?;

        Ok(record)
    }

    /// Total quantity borrowed per book, joined with book metadata.
    ///
    /// Inner-join semantics: books with no borrow records are omitted.
    /// Order is driven by the grouping, not guaranteed stable.
    pub async fn summary(&self) -> AppResult<Vec<BorrowSummary>> {
        let rows = sqlx::query(
            r#"
            SELECT b.title, b.isbn, SUM(br.quantity)::bigint AS total_quantity
            FROM borrows br
            JOIN books b ON br.book_id = b.id
            GROUP BY b.id, b.title, b.isbn
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| BorrowSummary {
                book: BorrowedBook {
                    title: row.get("title"),
                    isbn: row.get("isbn"),
                },
                total_quantity: row.get("total_quantity"),
            })
            .collect())
    }
}
