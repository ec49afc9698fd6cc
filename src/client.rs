use reqwest::StatusCode;

use crate::models::{FavoriteAdded, FavoriteFlag, FavoriteRemoved, FavoritesCount, Health, Movie};

/// Outcome of an add call. A duplicate is not an error: the movie is already
/// favorited server-side and nothing needs to change.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddOutcome {
    Added { id: i32 },
    AlreadyFavorite,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
}

/// Typed client for the favorites API.
pub struct FavoritesApi {
    client: reqwest::Client,
    base_url: String,
}

impl FavoritesApi {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub async fn list(&self) -> Result<Vec<Movie>, ClientError> {
        let resp = self.client.get(self.url("/favorites")).send().await?;
        Ok(resp.error_for_status()?.json().await?)
    }

    pub async fn add(&self, movie: &Movie) -> Result<AddOutcome, ClientError> {
        let resp = self.client.post(self.url("/favorites")).json(movie).send().await?;
        match resp.status() {
            StatusCode::CREATED => {
                let body: FavoriteAdded = resp.json().await?;
                Ok(AddOutcome::Added { id: body.id })
            }
            StatusCode::CONFLICT => Ok(AddOutcome::AlreadyFavorite),
            status => Err(ClientError::Status(status)),
        }
    }

    pub async fn remove(&self, movie_id: i64) -> Result<FavoriteRemoved, ClientError> {
        let resp = self.client.delete(self.url(&format!("/favorites/{movie_id}"))).send().await?;
        if !resp.status().is_success() {
            return Err(ClientError::Status(resp.status()));
        }
        Ok(resp.json().await?)
    }

    pub async fn is_favorite(&self, movie_id: i64) -> Result<bool, ClientError> {
        let resp = self.client.get(self.url(&format!("/favorites/{movie_id}"))).send().await?;
        let flag: FavoriteFlag = resp.error_for_status()?.json().await?;
        Ok(flag.is_favorite)
    }

    pub async fn count(&self) -> Result<u64, ClientError> {
        let resp = self.client.get(self.url("/favorites/stats/count")).send().await?;
        let body: FavoritesCount = resp.error_for_status()?.json().await?;
        Ok(body.count)
    }

    pub async fn health(&self) -> Result<Health, ClientError> {
        let resp = self.client.get(self.url("/health")).send().await?;
        Ok(resp.error_for_status()?.json().await?)
    }
}
