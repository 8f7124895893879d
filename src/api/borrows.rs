//! Borrow endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::{AppResult, ErrorResponse},
    models::borrow::{BorrowRecord, BorrowSummary, CreateBorrowRequest},
    AppState,
};

use super::ApiResponse;

/// Register a borrow of a book
#[utoipa::path(
    post,
    path = "/",
    tag = "borrows",
    request_body = CreateBorrowRequest,
    responses(
        (status = 201, description = "Book borrowed successfully"),
        (status = 400, description = "Missing/malformed fields or not enough copies", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<AppState>,
    Json(request): Json<CreateBorrowRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<BorrowRecord>>)> {
    let record = state.services.borrows.borrow_book(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Book borrowed successfully", record)),
    ))
}

/// Total borrowed quantity per book, joined with book metadata
#[utoipa::path(
    get,
    path = "/",
    tag = "borrows",
    responses(
        (status = 200, description = "Borrowed books summary"),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn borrow_summary(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<BorrowSummary>>>> {
    let summary = state.services.borrows.summary().await?;

    Ok(Json(ApiResponse::new(
        "Borrowed books summary retrieved successfully",
        summary,
    )))
}
