pub mod repository;
pub mod service;

pub use repository::{MovieRepository, TmdbRepository};
pub use service::{MovieService, PopularMovies};
