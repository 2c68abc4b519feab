//! In-memory backend.
//!
//! Holds records in a `Vec` behind an async `RwLock`. Used by the REST
//! crate's integration tests and handy for local demos; it honors the same
//! contract as the MongoDB backend, including newest-first listing.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::ComplaintStore;
use crate::error::StoreResult;
use crate::model::{Complaint, ComplaintDraft, ComplaintStatus};

/// In-memory complaint store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    // Each record is paired with an insertion sequence number so that
    // listing stays deterministic even when two inserts land on the same
    // timestamp tick.
    records: RwLock<Vec<(u64, Complaint)>>,
    seq: AtomicU64,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held. Test convenience.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ComplaintStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn insert(&self, draft: ComplaintDraft) -> StoreResult<Complaint> {
        let record = Complaint::from_draft(draft, Uuid::new_v4().to_string(), Utc::now());
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        self.records.write().await.push((seq, record.clone()));
        Ok(record)
    }

    async fn list(&self) -> StoreResult<Vec<Complaint>> {
        let records = self.records.read().await;
        let mut ordered: Vec<(u64, Complaint)> = records.clone();
        ordered.sort_by(|a, b| (b.1.created_at, b.0).cmp(&(a.1.created_at, a.0)));
        Ok(ordered.into_iter().map(|(_, record)| record).collect())
    }

    async fn find(&self, id: &str) -> StoreResult<Option<Complaint>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|(_, record)| record.id == id)
            .map(|(_, record)| record.clone()))
    }

    async fn update_status(
        &self,
        id: &str,
        status: ComplaintStatus,
    ) -> StoreResult<Option<Complaint>> {
        let mut records = self.records.write().await;
        Ok(records
            .iter_mut()
            .find(|(_, record)| record.id == id)
            .map(|(_, record)| {
                record.status = status;
                record.clone()
            }))
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|(_, record)| record.id != id);
        Ok(records.len() < before)
    }
}
