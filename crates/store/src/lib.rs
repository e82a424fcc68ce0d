//! Stringprops storage layer.
//!
//! An in-memory map from content fingerprint to stored record, plus the
//! filter engine that applies a [`StringFilters`] set to the stored
//! population. Identity is always the SHA-256 fingerprint produced by the
//! analysis layer: callers hash then look up, never compare raw strings.
//!
//! Nothing here survives the process; persistence is explicitly out of
//! scope. Concurrent access is safe without external locking thanks to the
//! sharded map underneath.
//!
//! [`StringFilters`]: nlquery::StringFilters

mod error;
mod filter;
mod record;
mod store;

pub use crate::error::StoreError;
pub use crate::filter::matches;
pub use crate::record::StoredString;
pub use crate::store::StringStore;
