//! Practice record rules: defaults, required-field validation and term matching.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity label used in not-found errors and log fields.
pub const ENTITY_PRACTICE: &str = "Practice";

/// Category assigned when the client does not provide one.
pub const DEFAULT_CATEGORY: &str = "Auditor";

/// Area assigned when the client does not provide one.
pub const DEFAULT_AREA: &str = "Geral";

/// Fields that must be present and non-empty on create, in report order.
pub const REQUIRED_FIELDS: &[&str] = &["name", "management", "practice", "date"];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Return the names of required fields whose value is absent or empty.
///
/// Whitespace-only values count as present; only the empty string is
/// rejected.
pub fn missing_fields<'a>(fields: &[(&'a str, Option<&str>)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| value.map_or(true, str::is_empty))
        .map(|(name, _)| *name)
        .collect()
}

/// Validate that every `(field, value)` pair carries a non-empty value.
///
/// The error message lists every offending field so the client can fix the
/// request in one round-trip.
pub fn validate_required(fields: &[(&str, Option<&str>)]) -> Result<(), CoreError> {
    let missing = missing_fields(fields);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "All fields are required (name, management, practice, date); missing or empty: {}",
            missing.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Case-insensitive substring test of `term` against any of `haystacks`.
///
/// An empty term matches everything. Case is folded with Unicode lowercase,
/// which agrees with PostgreSQL `ILIKE` and MongoDB's `i` regex option for
/// ASCII and accented Latin letters (`Gestão` / `GESTÃO`). Special cases such
/// as `ß` or dotted `İ` may fold differently between backends.
pub fn matches_term(term: &str, haystacks: &[&str]) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    haystacks
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
