use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};

use reelmarks::{AppState, models::Movie, routes, store::FavoritesStore};

/// Spins up the real router over an ephemeral in-memory database on an
/// OS-assigned port and returns the API base URL.
pub async fn spawn_server() -> String {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options).await.expect("connect in-memory database");
    Migrator::up(&db, None).await.expect("apply schema");

    let state = Arc::new(AppState { store: FavoritesStore::new(db) });
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    format!("http://{addr}/api")
}

pub fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: None,
        release_date: None,
        overview: None,
        vote_average: None,
        vote_count: None,
        genre_ids: Vec::new(),
        original_language: None,
        popularity: None,
        backdrop_path: None,
        adult: None,
        video: None,
        original_title: None,
        added_at: None,
    }
}
