use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};

use crate::{
    entities::favorite,
    error::{AppError, AppResult},
    models::{self, Movie},
};

/// Storage handle for the favorites table. One instance serves all request
/// handlers; clones share the underlying connection.
#[derive(Clone)]
pub struct FavoritesStore {
    db: DatabaseConnection,
}

impl FavoritesStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All favorites, most recently added first. Same-millisecond adds fall
    /// back to insertion order via the row id.
    pub async fn list(&self) -> AppResult<Vec<Movie>> {
        let rows = favorite::Entity::find()
            .order_by_desc(favorite::Column::AddedAt)
            .order_by_desc(favorite::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    /// Inserts a favorite, stamping it with the current time. A duplicate
    /// movie identity is a conflict and leaves the existing row untouched.
    pub async fn add(&self, movie: &Movie) -> AppResult<i32> {
        let model = favorite::ActiveModel {
            id: Default::default(),
            movie_id: Set(movie.id),
            title: Set(movie.title.clone()),
            poster_path: Set(movie.poster_path.clone()),
            release_date: Set(movie.release_date.clone()),
            overview: Set(movie.overview.clone()),
            vote_average: Set(movie.vote_average),
            vote_count: Set(movie.vote_count),
            genre_ids: Set(Some(models::encode_genre_ids(&movie.genre_ids)?)),
            original_language: Set(movie.original_language.clone()),
            popularity: Set(movie.popularity),
            backdrop_path: Set(movie.backdrop_path.clone()),
            adult: Set(movie.adult),
            video: Set(movie.video),
            original_title: Set(movie.original_title.clone()),
            added_at: Set(now_ms()),
        };

        match favorite::Entity::insert(model).exec(&self.db).await {
            Ok(res) => Ok(res.last_insert_id),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(AppError::Conflict("Movie already in favorites".to_string()))
                }
                _ => Err(err.into()),
            },
        }
    }

    pub async fn remove(&self, movie_id: i64) -> AppResult<()> {
        let res = favorite::Entity::delete_many()
            .filter(favorite::Column::MovieId.eq(movie_id))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Movie not found in favorites".to_string()));
        }
        Ok(())
    }

    /// Absence is a valid answer here, never an error.
    pub async fn contains(&self, movie_id: i64) -> AppResult<bool> {
        let n = favorite::Entity::find()
            .filter(favorite::Column::MovieId.eq(movie_id))
            .count(&self.db)
            .await?;
        Ok(n > 0)
    }

    pub async fn count(&self) -> AppResult<u64> {
        Ok(favorite::Entity::find().count(&self.db).await?)
    }
}

pub(crate) fn now_ms() -> i64 {
    jiff::Timestamp::now().as_millisecond()
}
