//! In-process adapter. Data lives only as long as the process.
//!
//! Used for local development (`STORAGE_BACKEND=memory`) and by the HTTP
//! integration tests.

use async_trait::async_trait;
use chrono::Utc;
use practices_core::practice::matches_term;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StorageError;
use crate::models::practice::{NewPractice, Practice};
use crate::store::PracticeStore;

/// [`PracticeStore`] over a vector kept in insertion order.
#[derive(Default)]
pub struct InMemoryPracticeStore {
    records: RwLock<Vec<Practice>>,
}

impl InMemoryPracticeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PracticeStore for InMemoryPracticeStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        Ok(())
    }

    async fn insert(&self, input: &NewPractice) -> Result<Practice, StorageError> {
        let now = Utc::now();
        let practice = Practice {
            id: Uuid::now_v7().to_string(),
            name: input.name.clone(),
            management: input.management.clone(),
            practice: input.practice.clone(),
            date: input.date.clone(),
            category: input.category.clone(),
            area: input.area.clone(),
            created_at: now,
            updated_at: now,
        };
        self.records.write().await.push(practice.clone());
        Ok(practice)
    }

    async fn list_recent(&self) -> Result<Vec<Practice>, StorageError> {
        // Insertion order is creation order, so newest-first is a reverse walk.
        Ok(self.records.read().await.iter().rev().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Practice>, StorageError> {
        Ok(self.records.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StorageError> {
        let mut records = self.records.write().await;
        match records.iter().position(|p| p.id == id) {
            Some(index) => {
                records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn search(&self, term: &str) -> Result<Vec<Practice>, StorageError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .rev()
            .filter(|p| matches_term(term, &p.search_fields()))
            .cloned()
            .collect())
    }

    async fn close(&self) {}
}
