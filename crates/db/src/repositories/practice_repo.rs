//! Repository for the `practices` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::practice::{NewPractice, Practice};

/// Column list shared across queries to avoid repetition.
///
/// `id` is a UUID column; it is read back as text so the model stays
/// backend-neutral.
const COLUMNS: &str =
    "id::text AS id, name, management, practice, date, category, area, created_at, updated_at";

/// Provides CRUD and search operations for practices.
pub struct PracticeRepo;

impl PracticeRepo {
    /// Insert a new practice, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewPractice) -> Result<Practice, sqlx::Error> {
        let query = format!(
            "INSERT INTO practices (name, management, practice, date, category, area)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Practice>(&query)
            .bind(&input.name)
            .bind(&input.management)
            .bind(&input.practice)
            .bind(&input.date)
            .bind(&input.category)
            .bind(&input.area)
            .fetch_one(pool)
            .await
    }

    /// List all practices ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Practice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM practices ORDER BY created_at DESC");
        sqlx::query_as::<_, Practice>(&query).fetch_all(pool).await
    }

    /// Find a practice by ID.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Practice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM practices WHERE id = $1");
        sqlx::query_as::<_, Practice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a practice by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM practices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over `practice`, `name` and
    /// `management`, most recently created first.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Practice>, sqlx::Error> {
        let query = format!(
            r"SELECT {COLUMNS} FROM practices
              WHERE practice ILIKE $1 ESCAPE '\'
                 OR name ILIKE $1 ESCAPE '\'
                 OR management ILIKE $1 ESCAPE '\'
              ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Practice>(&query)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }
}

/// Build an `ILIKE` pattern matching `term` anywhere, with `\`, `%` and `_`
/// escaped so they match literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
