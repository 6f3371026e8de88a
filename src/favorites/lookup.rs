use async_trait::async_trait;
use serde_json::Value;

use crate::tmdb::TmdbError;

/// Source of movie details used to enrich per-user favorites.
#[async_trait]
pub trait MovieLookup: Send + Sync {
    /// `Ok(None)` means the upstream catalog has no such movie.
    async fn movie_details(&self, movie_id: &str) -> Result<Option<Value>, TmdbError>;
}
