use analysis::StringProperties;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored string together with its derived properties.
///
/// `id` always equals `properties.sha256_hex`; it is duplicated at the top
/// level so responses carry the identity without digging into the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredString {
    /// Content fingerprint, the store key.
    pub id: String,

    /// The raw string exactly as submitted.
    pub value: String,

    /// Properties derived from `value` at insert time.
    pub properties: StringProperties,

    /// When the record entered the store.
    pub created_at: DateTime<Utc>,
}
