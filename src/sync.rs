use crate::{
    client::{AddOutcome, FavoritesApi},
    fallback::FallbackStore,
    models::Movie,
    store::now_ms,
};

/// Client-side favorites state. Keeps an in-memory copy of the server list,
/// updates it optimistically on mutation, and mirrors it to a local fallback
/// store so the list survives the API being unreachable.
///
/// When an add or remove fails, local state is still mutated and may diverge
/// from server truth until the next successful refresh. There is no
/// reconciliation; the caller surfaces `error()` and the user retries.
pub struct FavoritesSync<S: FallbackStore> {
    api: FavoritesApi,
    fallback: S,
    favorites: Vec<Movie>,
    loading: bool,
    error: Option<String>,
}

impl<S: FallbackStore> FavoritesSync<S> {
    pub fn new(api: FavoritesApi, fallback: S) -> Self {
        Self { api, fallback, favorites: Vec::new(), loading: false, error: None }
    }

    /// Replaces local state with the server list. On failure, sets the error
    /// and falls back to the persisted local copy if one exists.
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;

        match self.api.list().await {
            Ok(favorites) => self.favorites = favorites,
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch favorites");
                self.error = Some("Failed to load favorites".to_string());
                if let Some(saved) = self.fallback.load() {
                    self.favorites = saved;
                }
            }
        }

        self.loading = false;
    }

    pub async fn add(&mut self, mut movie: Movie) {
        match self.api.add(&movie).await {
            Ok(AddOutcome::Added { .. }) => {
                movie.added_at = Some(now_ms());
                self.favorites.push(movie);
                self.mirror();
            }
            // Already favorited server-side; nothing to sync.
            Ok(AddOutcome::AlreadyFavorite) => {}
            Err(err) => {
                tracing::warn!(error = %err, movie_id = movie.id, "failed to add favorite");
                self.error = Some("Failed to add to favorites".to_string());
                self.favorites.push(movie);
                self.mirror();
            }
        }
    }

    /// Removal is optimistic: the movie leaves local state whatever the
    /// server says.
    pub async fn remove(&mut self, movie_id: i64) {
        if let Err(err) = self.api.remove(movie_id).await {
            tracing::warn!(error = %err, movie_id, "failed to remove favorite");
            self.error = Some("Failed to remove from favorites".to_string());
        }
        self.favorites.retain(|m| m.id != movie_id);
        self.mirror();
    }

    /// Local membership scan; reflects only state known to this client.
    pub fn is_favorite(&self, movie_id: i64) -> bool {
        self.favorites.iter().any(|m| m.id == movie_id)
    }

    /// Authoritative membership check, degrading to the local scan when the
    /// API is unreachable.
    pub async fn check_is_favorite(&self, movie_id: i64) -> bool {
        match self.api.is_favorite(movie_id).await {
            Ok(flag) => flag,
            Err(err) => {
                tracing::warn!(error = %err, movie_id, "favorite check degraded to local state");
                self.is_favorite(movie_id)
            }
        }
    }

    /// Authoritative count, degrading to the local list length.
    pub async fn count(&self) -> u64 {
        match self.api.count().await {
            Ok(count) => count,
            Err(err) => {
                tracing::warn!(error = %err, "count degraded to local state");
                self.favorites.len() as u64
            }
        }
    }

    pub fn favorites(&self) -> &[Movie] {
        &self.favorites
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn mirror(&self) {
        self.fallback.save(&self.favorites);
    }
}
