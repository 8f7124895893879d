//! Book catalog model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Book from the catalog.
///
/// Title and ISBN are maintained by the cataloging process and immutable
/// here; `available_copies` is the only field this service mutates and
/// never goes below zero.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub isbn: String,
    pub available_copies: i32,
    pub created_at: DateTime<Utc>,
}
