//! Response envelope types for API handlers.
//!
//! Every `/api` success response carries `"success": true` plus a payload.
//! Use these structs instead of ad-hoc `serde_json::json!` bodies so the
//! envelope stays identical across endpoints.

use serde::Serialize;

/// `{ "success": true, "count": n, "data": [...] }` for list results.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// `{ "success": true, "data": T }` for a single payload.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": true, "message": ..., "data": T }` after a create.
#[derive(Debug, Serialize)]
pub struct CreatedResponse<T: Serialize> {
    pub success: bool,
    pub message: &'static str,
    pub data: T,
}

/// `{ "success": true, "message": ... }` for confirmations without payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}
