//! Complaint Intake Service Persistence Layer
//!
//! This crate provides the persistence layer for storing and retrieving
//! complaint records. The storage contract is defined by the
//! [`ComplaintStore`] trait; backends are selected via feature flags.
//!
//! # Backend Features
//!
//! Enable backends with feature flags in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! intake-store = { version = "0.1", features = ["mongodb"] }
//! ```
//!
//! Available backends:
//! - `mongodb` (default) - MongoDB document storage with a memoized,
//!   lazily-established connection suited to ephemeral execution environments
//! - in-memory - always available, used by tests and local demos
//!
//! # Architecture
//!
//! - [`model`] - The complaint record, its status enum, and the draft type
//! - [`error`] - Error types for all storage operations
//! - [`core`] - The [`ComplaintStore`] storage trait
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```
//! use intake_store::backends::memory::MemoryStore;
//! use intake_store::{ComplaintDraft, ComplaintStatus, ComplaintStore};
//!
//! # async fn example() -> intake_store::StoreResult<()> {
//! let store = MemoryStore::new();
//!
//! let stored = store
//!     .insert(ComplaintDraft {
//!         name: "Ravi".to_string(),
//!         mobile: "9876543210".to_string(),
//!         email: "ravi@test.com".to_string(),
//!         address: "Patna".to_string(),
//!         complaint: "Streetlight broken".to_string(),
//!     })
//!     .await?;
//!
//! assert_eq!(stored.status, ComplaintStatus::Pending);
//! assert!(store.find(&stored.id).await?.is_some());
//! # Ok(())
//! # }
//! ```
//!
//! # Record Lifecycle
//!
//! Records are constructed only by [`ComplaintStore::insert`] (generated id,
//! status [`ComplaintStatus::Pending`], creation timestamp), mutated only by
//! [`ComplaintStore::update_status`] (and only the status field), and removed
//! only by [`ComplaintStore::delete`]. The backing store is the sole source
//! of truth; callers hold transient copies.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod model;

// Re-export commonly used types at crate root
pub use core::ComplaintStore;
pub use error::{StoreError, StoreResult};
pub use model::{Complaint, ComplaintDraft, ComplaintStatus, InvalidStatus};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
