//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the [`PracticeStore`](practices_db::PracticeStore)
//! in [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod practice;
