//! Document-store adapter backed by MongoDB.
//!
//! Documents keep the camelCase timestamp keys (`createdAt`, `updatedAt`)
//! that existing `practices` collections already use.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, DateTime as BsonDateTime, Document};
use mongodb::{Client, Collection, Database};
use practices_core::practice::{DEFAULT_AREA, DEFAULT_CATEGORY};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::models::practice::{NewPractice, Practice};
use crate::store::PracticeStore;

const COLLECTION: &str = "practices";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_area() -> String {
    DEFAULT_AREA.to_string()
}

/// On-disk shape of a practice document.
#[derive(Debug, Serialize, Deserialize)]
struct PracticeDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    management: String,
    practice: String,
    date: String,
    #[serde(default = "default_category")]
    category: String,
    #[serde(default = "default_area")]
    area: String,
    #[serde(rename = "createdAt")]
    created_at: BsonDateTime,
    #[serde(rename = "updatedAt")]
    updated_at: BsonDateTime,
}

impl From<PracticeDocument> for Practice {
    fn from(doc: PracticeDocument) -> Self {
        Practice {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: doc.name,
            management: doc.management,
            practice: doc.practice,
            date: doc.date,
            category: doc.category,
            area: doc.area,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}

/// Case-insensitive `$or` filter matching `term` literally in any searched field.
fn search_filter(term: &str) -> Document {
    let pattern = regex::escape(term);
    let pattern = pattern.as_str();
    doc! {
        "$or": [
            { "practice": { "$regex": pattern, "$options": "i" } },
            { "name": { "$regex": pattern, "$options": "i" } },
            { "management": { "$regex": pattern, "$options": "i" } },
        ]
    }
}

/// Newest first; `_id` breaks ties within the same millisecond.
fn recency_sort() -> Document {
    doc! { "createdAt": -1, "_id": -1 }
}

/// [`PracticeStore`] over a MongoDB collection.
#[derive(Clone)]
pub struct MongoPracticeStore {
    client: Client,
    database: Database,
    collection: Collection<PracticeDocument>,
}

impl MongoPracticeStore {
    /// Connect to `uri` and use the `practices` collection of `database`.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StorageError> {
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(database);
        let collection = database.collection::<PracticeDocument>(COLLECTION);
        tracing::info!(database = database.name(), "MongoDB client created");
        Ok(Self {
            client,
            database,
            collection,
        })
    }

    async fn find_sorted(&self, filter: Document) -> Result<Vec<Practice>, StorageError> {
        let cursor = self.collection.find(filter).sort(recency_sort()).await?;
        let docs: Vec<PracticeDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Practice::from).collect())
    }
}

#[async_trait]
impl PracticeStore for MongoPracticeStore {
    fn backend_name(&self) -> &'static str {
        "mongodb"
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn insert(&self, input: &NewPractice) -> Result<Practice, StorageError> {
        let now = BsonDateTime::now();
        let mut document = PracticeDocument {
            id: None,
            name: input.name.clone(),
            management: input.management.clone(),
            practice: input.practice.clone(),
            date: input.date.clone(),
            category: input.category.clone(),
            area: input.area.clone(),
            created_at: now,
            updated_at: now,
        };

        let result = self.collection.insert_one(&document).await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            StorageError::Backend(format!(
                "unexpected inserted id type: {}",
                result.inserted_id
            ))
        })?;
        document.id = Some(id);
        Ok(document.into())
    }

    async fn list_recent(&self) -> Result<Vec<Practice>, StorageError> {
        self.find_sorted(doc! {}).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Practice>, StorageError> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        let found = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(found.map(Practice::from))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StorageError> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(false);
        };
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn search(&self, term: &str) -> Result<Vec<Practice>, StorageError> {
        self.find_sorted(search_filter(term)).await
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB client shut down");
    }
}
