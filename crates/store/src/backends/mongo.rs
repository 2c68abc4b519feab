//! MongoDB backend.
//!
//! Stores complaint records as documents in a single collection. The client
//! handle is established lazily on first use and memoized for the lifetime
//! of the process: warm serverless invocations reuse the cached handle
//! instead of re-dialing the cluster, while the initial `ping` keeps a dead
//! dial from ever being cached.

use std::time::Duration;

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, doc};
use mongodb::options::{ClientOptions, ReturnDocument};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::core::ComplaintStore;
use crate::error::{StoreError, StoreResult};
use crate::model::{Complaint, ComplaintDraft, ComplaintStatus};

/// Development fallback connection string, used when no URL is configured.
/// Deployments must supply their own via configuration.
pub const DEFAULT_URI: &str = "mongodb://localhost:27017/complaintdb";

/// Database used when the connection string names none.
pub const DEFAULT_DATABASE: &str = "complaintdb";

/// Collection holding complaint documents.
pub const COLLECTION: &str = "complaints";

/// Server selection is bounded so an unreachable cluster fails fast instead
/// of hanging the request.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Pooled connections idle longer than this are closed by the driver.
const MAX_IDLE_TIME: Duration = Duration::from_secs(45);

/// Configuration for the MongoDB backend.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string.
    pub uri: String,
    /// Database name override. When `None`, the database named in the URI is
    /// used, falling back to [`DEFAULT_DATABASE`].
    pub database: Option<String>,
    /// Collection name.
    pub collection: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        MongoConfig {
            uri: DEFAULT_URI.to_string(),
            database: None,
            collection: COLLECTION.to_string(),
        }
    }
}

/// MongoDB-backed complaint store.
///
/// The cached client slot is the only shared mutable state. The
/// check-then-connect sequence is deliberately not serialized: two requests
/// racing through a cold start may both dial, which is idempotent - the
/// second writer simply replaces an equivalent handle.
pub struct MongoStore {
    config: MongoConfig,
    client: RwLock<Option<Client>>,
}

impl std::fmt::Debug for MongoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoStore")
            .field("database", &self.config.database)
            .field("collection", &self.config.collection)
            .finish_non_exhaustive()
    }
}

/// Wire form of a stored complaint: `_id` as a native ObjectId and
/// `createdAt` as a BSON datetime, camelCase field keys throughout.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComplaintDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    mobile: String,
    email: String,
    address: String,
    complaint: String,
    status: ComplaintStatus,
    created_at: bson::DateTime,
}

impl ComplaintDocument {
    fn new(draft: ComplaintDraft) -> Self {
        ComplaintDocument {
            id: ObjectId::new(),
            name: draft.name,
            mobile: draft.mobile,
            email: draft.email,
            address: draft.address,
            complaint: draft.complaint,
            status: ComplaintStatus::Pending,
            created_at: bson::DateTime::now(),
        }
    }
}

impl From<ComplaintDocument> for Complaint {
    fn from(doc: ComplaintDocument) -> Self {
        Complaint {
            id: doc.id.to_hex(),
            name: doc.name,
            mobile: doc.mobile,
            email: doc.email,
            address: doc.address,
            complaint: doc.complaint,
            status: doc.status,
            created_at: doc.created_at.to_chrono(),
        }
    }
}

impl MongoStore {
    /// Creates a store with the given configuration. No connection is made
    /// until the first operation.
    pub fn new(config: MongoConfig) -> Self {
        MongoStore {
            config,
            client: RwLock::new(None),
        }
    }

    /// Creates a store for the given connection string with default database
    /// and collection settings.
    pub fn with_uri(uri: impl Into<String>) -> Self {
        MongoStore::new(MongoConfig {
            uri: uri.into(),
            ..Default::default()
        })
    }

    /// Returns the memoized client handle, dialing the cluster if none is
    /// cached yet.
    ///
    /// A fresh connection is verified with a `ping` before it is cached, so
    /// a failed attempt is never reused; the next call re-dials.
    async fn handle(&self) -> StoreResult<Client> {
        if let Some(client) = self.client.read().await.as_ref() {
            return Ok(client.clone());
        }

        let mut options = ClientOptions::parse(&self.config.uri)
            .await
            .map_err(unavailable)?;
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
        options.max_idle_time = Some(MAX_IDLE_TIME);

        let client = Client::with_options(options).map_err(unavailable)?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(unavailable)?;

        info!(collection = %self.config.collection, "MongoDB connected");
        *self.client.write().await = Some(client.clone());
        Ok(client)
    }

    async fn collection(&self) -> StoreResult<Collection<ComplaintDocument>> {
        let client = self.handle().await?;
        // Explicit override wins, then the database named in the URI path,
        // then the development default.
        let database = match &self.config.database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };
        Ok(database.collection(&self.config.collection))
    }
}

/// Maps a driver error during connection establishment, logging it for
/// operational visibility without swallowing the detail.
fn unavailable(err: mongodb::error::Error) -> StoreError {
    error!(error = %err, "MongoDB connection error");
    StoreError::Unavailable {
        message: err.to_string(),
    }
}

#[async_trait]
impl ComplaintStore for MongoStore {
    fn backend_name(&self) -> &'static str {
        "mongodb"
    }

    async fn ping(&self) -> StoreResult<()> {
        let client = self.handle().await?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(unavailable)?;
        Ok(())
    }

    async fn insert(&self, draft: ComplaintDraft) -> StoreResult<Complaint> {
        let collection = self.collection().await?;
        let document = ComplaintDocument::new(draft);
        collection.insert_one(&document).await?;
        debug!(id = %document.id, "complaint inserted");
        Ok(document.into())
    }

    async fn list(&self) -> StoreResult<Vec<Complaint>> {
        let collection = self.collection().await?;
        // Secondary _id sort keeps ordering stable when creation times
        // collide at millisecond precision.
        let cursor = collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .await?;
        let documents: Vec<ComplaintDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Complaint::from).collect())
    }

    async fn find(&self, id: &str) -> StoreResult<Option<Complaint>> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            // Not an id this backend could have issued.
            return Ok(None);
        };
        let collection = self.collection().await?;
        let document = collection.find_one(doc! { "_id": oid }).await?;
        Ok(document.map(Complaint::from))
    }

    async fn update_status(
        &self,
        id: &str,
        status: ComplaintStatus,
    ) -> StoreResult<Option<Complaint>> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        let collection = self.collection().await?;
        let updated = collection
            .find_one_and_update(
                doc! { "_id": oid },
                doc! { "$set": { "status": status.as_str() } },
            )
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated.map(Complaint::from))
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(false);
        };
        let collection = self.collection().await?;
        let result = collection.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count > 0)
    }
}
