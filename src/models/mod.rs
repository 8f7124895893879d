//! Data models for the circulation server

pub mod book;
pub mod borrow;
