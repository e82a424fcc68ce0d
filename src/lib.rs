//! Workspace umbrella crate for the stringprops service.
//!
//! This crate stitches together the three core layers so callers can work
//! with a single API entry point:
//!
//! - [`analyze`]: derive a [`StringProperties`] record from any string
//! - [`parse_query`]: turn free-form text into a [`StringFilters`] set
//! - [`StringStore`]: fingerprint-keyed storage with filtered listing
//!
//! The HTTP surface lives in the `stringprops-server` crate under
//! `crates/server`; everything here is synchronous, pure (analysis and
//! parsing) or lock-free shared state (the store), and usable without a
//! runtime.
//!
//! ```rust
//! use stringprops::{parse_query, StringStore};
//!
//! let store = StringStore::new();
//! store.insert("Race car").expect("new entry");
//! store.insert("hello").expect("new entry");
//!
//! let filters = parse_query("palindromes longer than 3 characters").expect("consistent query");
//! let hits = store.filter(&filters);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].value, "Race car");
//! ```

pub use analysis::{analyze, hash_text, StringProperties};
pub use nlquery::{parse_query, ParseError, StringFilters};
pub use store::{matches, StoreError, StoredString, StringStore};
