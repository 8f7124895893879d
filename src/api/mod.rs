//! API handlers for circulation REST endpoints

pub mod borrows;
pub mod health;
pub mod openapi;

use serde::Serialize;

/// Uniform success envelope wrapping every endpoint payload
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}
