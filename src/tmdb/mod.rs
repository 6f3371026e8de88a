mod client;
mod error;

pub use client::{TmdbClient, DEFAULT_BASE_URL};
pub use error::TmdbError;

pub type Result<T> = std::result::Result<T, TmdbError>;
