use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: u64,
    pub movie_id: String,
    pub created_at: DateTime<Utc>,
}

/// A per-user favorite with the upstream movie details attached.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedFavorite {
    pub id: u64,
    pub movie: Value,
    pub created_at: DateTime<Utc>,
}

impl EnrichedFavorite {
    /// Missing or non-string dates compare lowest.
    pub fn release_date(&self) -> &str {
        self.movie
            .get("release_date")
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}
