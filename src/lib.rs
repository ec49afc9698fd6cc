pub mod client;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod fallback;
pub mod models;
pub mod routes;
pub mod store;
pub mod sync;

use crate::store::FavoritesStore;

#[derive(Clone)]
pub struct AppState {
    pub store: FavoritesStore,
}
