//! Borrow ledger models and related request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A registered borrow. Append-only: never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRecord {
    pub id: Uuid,
    pub book_id: Uuid,
    pub quantity: i32,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Create borrow request.
///
/// Every field is optional at the serde level so a missing value is reported
/// through the service's own validation error instead of a transport
/// rejection.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBorrowRequest {
    /// Book ID (UUID)
    pub book: Option<String>,
    /// Number of copies to borrow
    pub quantity: Option<i64>,
    /// Due date (RFC 3339 or YYYY-MM-DD)
    pub due_date: Option<String>,
}

/// Book metadata embedded in a summary entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BorrowedBook {
    pub title: String,
    pub isbn: String,
}

/// Aggregated borrow total for one book
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowSummary {
    pub book: BorrowedBook,
    pub total_quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_camel_case_body() {
        let request: CreateBorrowRequest = serde_json::from_str(
            r#"{"book":"0c5f7a2e-9f1d-4c3b-8a6e-2b7d1e4f9a0c","quantity":2,"dueDate":"2026-09-15"}"#,
        )
        .unwrap();

        assert_eq!(
            request.book.as_deref(),
            Some("0c5f7a2e-9f1d-4c3b-8a6e-2b7d1e4f9a0c")
        );
        assert_eq!(request.quantity, Some(2));
        assert_eq!(request.due_date.as_deref(), Some("2026-09-15"));
    }

    #[test]
    fn test_request_tolerates_missing_fields() {
        let request: CreateBorrowRequest = serde_json::from_str(r#"{"quantity":1}"#).unwrap();
        assert!(request.book.is_none());
        assert!(request.due_date.is_none());
    }

    #[test]
    fn test_summary_serializes_total_quantity_camel_case() {
        let summary = BorrowSummary {
            book: BorrowedBook {
                title: "T1".to_string(),
                isbn: "I1".to_string(),
            },
            total_quantity: 5,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["book"]["title"], "T1");
        assert_eq!(json["book"]["isbn"], "I1");
        assert_eq!(json["totalQuantity"], 5);
    }
}
