//! Borrow registration and reporting service

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::borrow::{BorrowRecord, BorrowSummary, CreateBorrowRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowsService {
    repository: Repository,
}

impl BorrowsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a borrow of a book.
    ///
    /// Validates the request, checks the book exists, then decrements the
    /// available copies and appends the ledger record in one transaction,
    /// so a failed insert never leaves the stock decremented.
    pub async fn borrow_book(&self, request: CreateBorrowRequest) -> AppResult<BorrowRecord> {
        let (book_id, quantity, due_date) = Self::validate(&request)?;

        // Separate lookup so an unknown book reports 404, not a stock error
        self.repository.books.get_by_id(book_id).await?;

        let mut tx = self.repository.pool.begin().await?;
        self.repository
            .books
            .decrease_copies(&mut tx, book_id, quantity)
            .await?;
        let record = self
            .repository
            .borrows
            .insert(&mut tx, book_id, quantity, due_date)
            .await?;
        tx.commit().await?;

        Ok(record)
    }

    /// Aggregated borrow totals per book
    pub async fn summary(&self) -> AppResult<Vec<BorrowSummary>> {
        self.repository.borrows.summary().await
    }

    /// Validate a create-borrow request before any store access
    fn validate(request: &CreateBorrowRequest) -> AppResult<(Uuid, i32, DateTime<Utc>)> {
        let (Some(book), Some(quantity), Some(due_date)) =
            (&request.book, request.quantity, &request.due_date)
        else {
            return Err(AppError::Validation("Missing required fields".to_string()));
        };

        let book_id = book
            .parse::<Uuid>()
            .map_err(|_| AppError::Validation("Invalid book ID".to_string()))?;

        if quantity < 1 || quantity > i64::from(i32::MAX) {
            return Err(AppError::Validation(
                "Quantity must be a positive integer".to_string(),
            ));
        }

        let due_date = parse_due_date(due_date)
            .ok_or_else(|| AppError::Validation("Invalid due date".to_string()))?;

        Ok((book_id, quantity as i32, due_date))
    }
}

/// Accepts RFC 3339 timestamps or plain dates (taken as midnight UTC)
fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    raw.parse::<NaiveDate>()
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        book: Option<&str>,
        quantity: Option<i64>,
        due_date: Option<&str>,
    ) -> CreateBorrowRequest {
        CreateBorrowRequest {
            book: book.map(str::to_string),
            quantity,
            due_date: due_date.map(str::to_string),
        }
    }

    const BOOK_ID: &str = "0c5f7a2e-9f1d-4c3b-8a6e-2b7d1e4f9a0c";

    #[test]
    fn test_validate_ok() {
        let (book_id, quantity, due_date) =
            BorrowsService::validate(&request(Some(BOOK_ID), Some(3), Some("2026-09-15")))
                .unwrap();

        assert_eq!(book_id.to_string(), BOOK_ID);
        assert_eq!(quantity, 3);
        assert_eq!(due_date.to_rfc3339(), "2026-09-15T00:00:00+00:00");
    }

    #[test]
    fn test_validate_missing_fields() {
        for req in [
            request(None, Some(1), Some("2026-09-15")),
            request(Some(BOOK_ID), None, Some("2026-09-15")),
            request(Some(BOOK_ID), Some(1), None),
            request(None, None, None),
        ] {
            let err = BorrowsService::validate(&req).unwrap_err();
            assert!(matches!(err, AppError::Validation(msg) if msg == "Missing required fields"));
        }
    }

    #[test]
    fn test_validate_malformed_book_id() {
        let err =
            BorrowsService::validate(&request(Some("not-a-uuid"), Some(1), Some("2026-09-15")))
                .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Invalid book ID"));
    }

    #[test]
    fn test_validate_non_positive_quantity() {
        for quantity in [0, -4] {
            let err = BorrowsService::validate(&request(
                Some(BOOK_ID),
                Some(quantity),
                Some("2026-09-15"),
            ))
            .unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[test]
    fn test_validate_bad_due_date() {
        let err = BorrowsService::validate(&request(Some(BOOK_ID), Some(1), Some("next tuesday")))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Invalid due date"));
    }

    #[test]
    fn test_parse_due_date_rfc3339() {
        let parsed = parse_due_date("2026-09-15T12:30:00+02:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-09-15T10:30:00+00:00");
    }

    #[test]
    fn test_parse_due_date_plain_date() {
        let parsed = parse_due_date("2026-09-15").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-09-15T00:00:00+00:00");
    }
}
