use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{
        AddFavorite, FavoriteAdded, FavoriteFlag, FavoriteRemoved, FavoritesCount, Health, Movie,
    },
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/favorites", get(list_favorites).post(add_favorite))
        .route("/api/favorites/{movie_id}", get(check_favorite).delete(remove_favorite))
        .route("/api/favorites/stats/count", get(favorites_count))
        .route("/api/health", get(health))
        .with_state(state)
}

pub async fn list_favorites(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.store.list().await?))
}

pub async fn add_favorite(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AddFavorite>,
) -> AppResult<(StatusCode, Json<FavoriteAdded>)> {
    let Some(movie) = payload.into_movie() else {
        return Err(AppError::Validation("Invalid movie data".to_string()));
    };

    let id = state.store.add(&movie).await?;
    tracing::debug!(movie_id = movie.id, "favorite added");

    Ok((
        StatusCode::CREATED,
        Json(FavoriteAdded {
            message: "Movie added to favorites".to_string(),
            id,
            movie_id: movie.id,
        }),
    ))
}

pub async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i64>,
) -> AppResult<Json<FavoriteRemoved>> {
    if movie_id == 0 {
        return Err(AppError::Validation("Invalid movie ID".to_string()));
    }

    state.store.remove(movie_id).await?;
    tracing::debug!(movie_id, "favorite removed");

    Ok(Json(FavoriteRemoved { message: "Movie removed from favorites".to_string(), movie_id }))
}

pub async fn check_favorite(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i64>,
) -> AppResult<Json<FavoriteFlag>> {
    if movie_id == 0 {
        return Err(AppError::Validation("Invalid movie ID".to_string()));
    }

    Ok(Json(FavoriteFlag { is_favorite: state.store.contains(movie_id).await? }))
}

pub async fn favorites_count(State(state): State<Arc<AppState>>) -> AppResult<Json<FavoritesCount>> {
    Ok(Json(FavoritesCount { count: state.store.count().await? }))
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "OK".to_string(), timestamp: jiff::Timestamp::now().to_string() })
}
