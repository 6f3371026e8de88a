pub mod lookup;
pub mod model;
pub mod store;

pub use lookup::MovieLookup;
pub use model::*;
pub use store::FavoritesStore;
