use serde::{Deserialize, Serialize};

use crate::entities::favorite;

/// Movie record as exchanged with the favorites API. Field names follow the
/// movie-metadata source so records pass through unchanged; `id` carries the
/// externally assigned movie identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i64>,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    pub original_language: Option<String>,
    pub popularity: Option<f64>,
    pub backdrop_path: Option<String>,
    pub adult: Option<bool>,
    pub video: Option<bool>,
    pub original_title: Option<String>,
    /// Assigned at insert time; None until the record is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<i64>,
}

/// Lenient add-favorite request body. Everything is optional at the wire
/// level so malformed submissions reach validation instead of failing
/// deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct AddFavorite {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i64>,
    pub genre_ids: Option<Vec<i64>>,
    pub original_language: Option<String>,
    pub popularity: Option<f64>,
    pub backdrop_path: Option<String>,
    pub adult: Option<bool>,
    pub video: Option<bool>,
    pub original_title: Option<String>,
}

impl AddFavorite {
    /// Validates the request into a `Movie`. Returns None when the movie
    /// identity is missing or zero, or the title is absent.
    pub fn into_movie(self) -> Option<Movie> {
        let id = self.id.filter(|id| *id != 0)?;
        let title = self.title?;
        Some(Movie {
            id,
            title,
            poster_path: self.poster_path,
            release_date: self.release_date,
            overview: self.overview,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            genre_ids: self.genre_ids.unwrap_or_default(),
            original_language: self.original_language,
            popularity: self.popularity,
            backdrop_path: self.backdrop_path,
            adult: self.adult,
            video: self.video,
            original_title: self.original_title,
            added_at: None,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteAdded {
    pub message: String,
    pub id: i32,
    pub movie_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteRemoved {
    pub message: String,
    pub movie_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteFlag {
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FavoritesCount {
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
}

pub fn encode_genre_ids(ids: &[i64]) -> serde_json::Result<String> {
    serde_json::to_string(ids)
}

/// Decodes the stored genre blob; absent or unparsable blobs read as empty.
pub fn decode_genre_ids(blob: Option<&str>) -> Vec<i64> {
    blob.and_then(|s| serde_json::from_str(s).ok()).unwrap_or_default()
}

impl From<favorite::Model> for Movie {
    fn from(row: favorite::Model) -> Self {
        Movie {
            id: row.movie_id,
            title: row.title,
            poster_path: row.poster_path,
            release_date: row.release_date,
            overview: row.overview,
            vote_average: row.vote_average,
            vote_count: row.vote_count,
            genre_ids: decode_genre_ids(row.genre_ids.as_deref()),
            original_language: row.original_language,
            popularity: row.popularity,
            backdrop_path: row.backdrop_path,
            adult: row.adult,
            video: row.video,
            original_title: row.original_title,
            added_at: Some(row.added_at),
        }
    }
}
