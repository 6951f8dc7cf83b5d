//! Practice entity model and insert value.

use practices_core::practice::{DEFAULT_AREA, DEFAULT_CATEGORY};
use practices_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored practice record.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Practice {
    pub id: RecordId,
    pub name: String,
    pub management: String,
    pub practice: String,
    pub date: String,
    pub category: String,
    pub area: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Values for a new practice row. Built only from validated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPractice {
    pub name: String,
    pub management: String,
    pub practice: String,
    pub date: String,
    pub category: String,
    pub area: String,
}

impl NewPractice {
    /// Create an insert value with `category` and `area` set to their defaults.
    pub fn new(
        name: impl Into<String>,
        management: impl Into<String>,
        practice: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            management: management.into(),
            practice: practice.into(),
            date: date.into(),
            category: DEFAULT_CATEGORY.to_string(),
            area: DEFAULT_AREA.to_string(),
        }
    }
}

impl Practice {
    /// Fields matched by the free-text search, in match order.
    pub fn search_fields(&self) -> [&str; 3] {
        [
            self.practice.as_str(),
            self.name.as_str(),
            self.management.as_str(),
        ]
    }
}
