//! Books repository for catalog lookups and stock mutation

use sqlx::{Pool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Atomically decrease a book's available copies.
    ///
    /// The stock check and the decrement are one conditional UPDATE, so
    /// concurrent borrows against the same book cannot jointly take the
    /// count below zero. Zero rows affected means insufficient stock and
    /// the book is left unchanged.
    pub async fn decrease_copies(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        quantity: i32,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE books SET available_copies = available_copies - $2 \
             WHERE id = $1 AND available_copies >= $2",
        )
        .bind(id)
        .bind(quantity)
        .execute(&mut **tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::InsufficientStock(
                "Not enough copies available".to_string(),
            ));
        }

        Ok(())
    }
}
