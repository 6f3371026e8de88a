use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::lookup::MovieLookup;
use super::model::*;

struct FavoritesState {
    global: BTreeSet<String>,
    users: HashMap<u64, Vec<Favorite>>,
    next_id: u64,
}

impl Default for FavoritesState {
    fn default() -> Self {
        Self {
            global: BTreeSet::new(),
            users: HashMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory favorites: a global set of movie ids, plus per-user lists
/// whose entries get ids from one shared counter.
///
/// Nothing is persisted. Each check-then-mutate sequence runs under the
/// write lock.
pub struct FavoritesStore {
    state: RwLock<FavoritesState>,
    lookup: Arc<dyn MovieLookup>,
}

impl FavoritesStore {
    pub fn new(lookup: Arc<dyn MovieLookup>) -> Self {
        Self {
            state: RwLock::new(FavoritesState::default()),
            lookup,
        }
    }

    /// Returns `None` if the movie was already a favorite, otherwise its
    /// 1-based position in `list()` as of the insert.
    pub async fn add(&self, movie_id: &str) -> Option<usize> {
        let mut state = self.state.write().await;
        if !state.global.insert(movie_id.to_string()) {
            return None;
        }
        Some(state.global.range::<str, _>((std::ops::Bound::Unbounded, std::ops::Bound::Excluded(movie_id))).count() + 1)
    }

    pub async fn remove(&self, movie_id: &str) -> bool {
        let mut state = self.state.write().await;
        state.global.remove(movie_id)
    }

    pub async fn list(&self) -> Vec<String> {
        let state = self.state.read().await;
        state.global.iter().cloned().collect()
    }

    /// Returns `None` if the user already has this movie.
    pub async fn add_for_user(&self, user_id: u64, movie_id: &str) -> Option<Favorite> {
        let mut state = self.state.write().await;

        let exists = state
            .users
            .get(&user_id)
            .map(|favorites| favorites.iter().any(|f| f.movie_id == movie_id))
            .unwrap_or(false);
        if exists {
            return None;
        }

        let favorite = Favorite {
            id: state.next_id,
            movie_id: movie_id.to_string(),
            created_at: Utc::now(),
        };
        state.next_id += 1;
        state
            .users
            .entry(user_id)
            .or_default()
            .push(favorite.clone());

        debug!(user_id = user_id, favorite_id = favorite.id, movie_id = %movie_id, "Added favorite");
        Some(favorite)
    }

    pub async fn remove_for_user(&self, user_id: u64, favorite_id: u64) -> bool {
        let mut state = self.state.write().await;

        let Some(favorites) = state.users.get_mut(&user_id) else {
            return false;
        };
        match favorites.iter().position(|f| f.id == favorite_id) {
            Some(index) => {
                favorites.remove(index);
                true
            }
            None => false,
        }
    }

    /// Stored entries for a user, in insertion order, without enrichment.
    pub async fn entries_for_user(&self, user_id: u64) -> Vec<Favorite> {
        let state = self.state.read().await;
        state.users.get(&user_id).cloned().unwrap_or_default()
    }

    /// Enrich every favorite of the user with upstream details, newest
    /// release first. Entries whose lookup fails are skipped.
    pub async fn list_for_user(&self, user_id: u64) -> Vec<EnrichedFavorite> {
        let favorites = self.entries_for_user(user_id).await;
        let mut result = Vec::with_capacity(favorites.len());

        for favorite in favorites {
            match self.lookup.movie_details(&favorite.movie_id).await {
                Ok(Some(movie)) => result.push(EnrichedFavorite {
                    id: favorite.id,
                    movie,
                    created_at: favorite.created_at,
                }),
                Ok(None) => {
                    warn!(user_id = user_id, movie_id = %favorite.movie_id, "Movie not found upstream, skipping favorite");
                }
                Err(e) => {
                    warn!(user_id = user_id, movie_id = %favorite.movie_id, error = %e, "Error fetching movie details, skipping favorite");
                }
            }
        }

        result.sort_by(|a, b| b.release_date().cmp(a.release_date()));
        result
    }

    pub async fn clear_all_for_user(&self, user_id: u64) {
        let mut state = self.state.write().await;
        if let Some(favorites) = state.users.get_mut(&user_id) {
            favorites.clear();
        }
    }
}
