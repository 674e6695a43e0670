//! Key-value persistence for the GuitarLA cart.
//!
//! Provides a small string-keyed store abstraction with two backends and a
//! typed wrapper that handles JSON serialization.
//!
//! # Example
//!
//! ```rust
//! use guitarla_store::{Cache, MemoryStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Line {
//!     id: u32,
//!     quantity: u32,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! // Store a value
//! cache.set("cart", &vec![Line { id: 1, quantity: 2 }]).unwrap();
//!
//! // Retrieve a value
//! let lines: Option<Vec<Line>> = cache.get("cart").unwrap();
//! assert_eq!(lines.unwrap()[0].quantity, 2);
//!
//! // Delete a value
//! cache.delete("cart").unwrap();
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use kv::{Cache, KeyValueStore};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, FileStore, KeyValueStore, MemoryStore, StoreError};
}
