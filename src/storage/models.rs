use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One shareable video entry.
///
/// Serialized with camelCase keys (`createdAt`) and an RFC 3339 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}
