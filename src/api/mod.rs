pub mod error;
pub mod extract;
pub mod favorites;
pub mod movies;
pub mod user_favorites;

pub use error::ApiError;
pub use extract::IdPath;
pub use favorites::*;
pub use movies::*;
pub use user_favorites::*;
