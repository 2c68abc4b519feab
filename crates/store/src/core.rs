//! Core storage trait.
//!
//! This module defines the [`ComplaintStore`] trait, the full storage
//! contract for complaint records. Backends implement it; the HTTP layer is
//! generic over it, which is what lets tests substitute the in-memory
//! backend for MongoDB.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::model::{Complaint, ComplaintDraft, ComplaintStatus};

/// Storage contract for complaint records.
///
/// Every operation is a single atomic document action; the trait adds no
/// higher-level locking, so two racing status updates on the same record
/// resolve last-write-wins at the storage layer.
///
/// # Identifiers
///
/// Ids are opaque strings generated by the backend on insert. Lookups with
/// an id the backend could never have produced (for example, a string that
/// is not valid ObjectId hex on MongoDB) are treated as not-found rather
/// than errors.
///
/// # Example
///
/// ```ignore
/// async fn example<S: ComplaintStore>(store: &S) -> StoreResult<()> {
///     let stored = store.insert(draft).await?;
///     let found = store.find(&stored.id).await?;
///     assert!(found.is_some());
///
///     store.update_status(&stored.id, ComplaintStatus::Resolved).await?;
///     assert!(store.delete(&stored.id).await?);
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ComplaintStore: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Verifies connectivity to the datastore.
    ///
    /// Used by the health endpoint. Establishes the connection if none is
    /// cached yet.
    ///
    /// # Errors
    ///
    /// * `StoreError::Unavailable` - the datastore cannot be reached
    async fn ping(&self) -> StoreResult<()>;

    /// Persists a new complaint record built from a validated draft.
    ///
    /// The backend assigns the id, sets the status to
    /// [`ComplaintStatus::Pending`], and stamps the creation time.
    ///
    /// # Errors
    ///
    /// * `StoreError::Unavailable` - connection could not be established
    /// * `StoreError::Backend` - the write failed
    async fn insert(&self, draft: ComplaintDraft) -> StoreResult<Complaint>;

    /// Returns all complaint records, newest first (`createdAt` descending).
    async fn list(&self) -> StoreResult<Vec<Complaint>>;

    /// Looks up a record by id.
    ///
    /// Returns `None` when no record matches, including for malformed ids.
    async fn find(&self, id: &str) -> StoreResult<Option<Complaint>>;

    /// Replaces the status of the record with the given id.
    ///
    /// Only the status field changes. Returns the updated record, or `None`
    /// if no record matches.
    async fn update_status(
        &self,
        id: &str,
        status: ComplaintStatus,
    ) -> StoreResult<Option<Complaint>>;

    /// Removes the record with the given id.
    ///
    /// Returns whether a record was actually removed.
    async fn delete(&self, id: &str) -> StoreResult<bool>;
}
