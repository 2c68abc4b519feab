//! HTTP request handlers, one module per operation.
//!
//! - [`info`] - Service metadata at the root path
//! - [`health`] - Datastore connectivity check
//! - [`create`] - Submit a complaint
//! - [`list`] - List all complaints, newest first
//! - [`read`] - Fetch a single complaint by id
//! - [`update`] - Replace a complaint's status
//! - [`delete`] - Remove a complaint
//! - [`not_found`] - Fallback for unmatched routes

pub mod create;
pub mod delete;
pub mod health;
pub mod info;
pub mod list;
pub mod not_found;
pub mod read;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::health_handler;
pub use info::info_handler;
pub use list::list_handler;
pub use not_found::not_found_handler;
pub use read::read_handler;
pub use update::update_handler;
