//! Storage backend implementations.
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | MongoDB | `mongodb` | Document store, memoized connection for warm-process reuse |
//! | Memory | always | In-process store for tests and local demos |

pub mod memory;

#[cfg(feature = "mongodb")]
pub mod mongo;
