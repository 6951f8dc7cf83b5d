//! Domain rules for the practices service.
//!
//! Nothing in this crate performs I/O. The storage adapters and HTTP handlers
//! both depend on it for field defaults, create-input validation, search-term
//! matching and summary aggregation.

pub mod error;
pub mod practice;
pub mod summary;
pub mod types;
