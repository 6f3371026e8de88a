#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("TMDB_API_KEY is required")]
    MissingApiKey,
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
    /// Transport failure or upstream 5xx, surfaced once the retry budget is spent.
    #[error("{message}")]
    Connection { message: String, status: Option<u16> },
    /// Non-retryable rejection (4xx other than 404).
    #[error("TheMovieDB API error: {status} - {message}")]
    Response { status: u16, message: String },
    #[error("Invalid response from TheMovieDB API: {0}")]
    Decode(String),
}

impl TmdbError {
    pub fn is_connection(&self) -> bool {
        matches!(self, TmdbError::Connection { .. })
    }

    pub fn is_response(&self) -> bool {
        matches!(self, TmdbError::Response { .. })
    }

    /// Whether the message is safe to hand back to an HTTP caller.
    pub fn is_public(&self) -> bool {
        self.is_connection() || self.is_response()
    }
}
