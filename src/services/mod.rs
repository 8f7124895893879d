//! Business logic services

pub mod borrows;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub borrows: borrows::BorrowsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            borrows: borrows::BorrowsService::new(repository),
        }
    }
}
