//! Handlers for the `/practices` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use practices_core::error::CoreError;
use practices_core::practice::{validate_required, ENTITY_PRACTICE};
use practices_core::summary::PracticeSummary;
use practices_db::models::practice::{NewPractice, Practice};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::{CreatedResponse, DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;

/// Request body for `POST /api/practices`.
///
/// Every field is optional at the serde level so a missing field becomes a
/// validation error that names it, instead of a generic parse failure.
#[derive(Debug, Deserialize)]
pub struct CreatePracticeRequest {
    pub name: Option<String>,
    pub management: Option<String>,
    pub practice: Option<String>,
    pub date: Option<String>,
}

impl CreatePracticeRequest {
    /// Check required fields and build the insert value with defaults applied.
    pub fn into_new_practice(self) -> Result<NewPractice, CoreError> {
        validate_required(&[
            ("name", self.name.as_deref()),
            ("management", self.management.as_deref()),
            ("practice", self.practice.as_deref()),
            ("date", self.date.as_deref()),
        ])?;

        Ok(NewPractice::new(
            self.name.unwrap_or_default(),
            self.management.unwrap_or_default(),
            self.practice.unwrap_or_default(),
            self.date.unwrap_or_default(),
        ))
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/practices
///
/// All practices, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let practices = state.store.list_recent().await?;
    Ok(Json(ListResponse::new(practices)))
}

/// POST /api/practices
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreatePracticeRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let input = body.into_new_practice()?;

    let practice = state.store.insert(&input).await?;

    tracing::info!(
        practice_id = %practice.id,
        management = %practice.management,
        "Practice created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            message: "Practice created successfully",
            data: practice,
        }),
    ))
}

/// Extract the `{id}` segment. A segment that does not even decode (for
/// example invalid UTF-8) cannot name a stored record.
fn record_id(path: Result<Path<String>, PathRejection>) -> AppResult<String> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            let id = rejection.body_text();
            tracing::debug!(%id, "Undecodable practice id");
            Err(AppError::Core(CoreError::NotFound {
                entity: ENTITY_PRACTICE,
                id,
            }))
        }
    }
}

/// GET /api/practices/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = record_id(path)?;
    let practice = state.store.find_by_id(&id).await?;
    let practice = practice.ok_or(AppError::Core(CoreError::NotFound {
        entity: ENTITY_PRACTICE,
        id,
    }))?;
    Ok(Json(DataResponse::new(practice)))
}

/// DELETE /api/practices/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = record_id(path)?;
    if !state.store.delete_by_id(&id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: ENTITY_PRACTICE,
            id,
        }));
    }

    tracing::info!(practice_id = %id, "Practice deleted");

    Ok(Json(MessageResponse {
        success: true,
        message: "Practice deleted successfully",
    }))
}

/// GET /api/practices/search/{term}
///
/// Case-insensitive match on `practice`, `name` or `management`.
pub async fn search(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(term) = path.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    run_search(&state, &term).await
}

/// GET /api/practices/search/
///
/// An empty term matches every practice.
pub async fn search_empty(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    run_search(&state, "").await
}

async fn run_search(state: &AppState, term: &str) -> AppResult<Json<ListResponse<Practice>>> {
    let practices = state.store.search(term).await?;
    tracing::debug!(term, count = practices.len(), "Practice search");
    Ok(Json(ListResponse::new(practices)))
}

/// GET /api/practices/stats/summary
///
/// Scans every practice on each call; see [`PracticeSummary`].
pub async fn summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let practices = state.store.list_recent().await?;
    let summary = PracticeSummary::from_records(
        practices
            .iter()
            .map(|p| (p.name.as_str(), p.management.as_str())),
    );
    Ok(Json(DataResponse::new(summary)))
}
