mod common;

use reqwest::StatusCode;
use serde_json::{Value, json};

use common::{movie, spawn_server};

#[tokio::test]
async fn add_then_list_round_trips_every_field() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let payload = json!({
        "id": 550,
        "title": "Fight Club",
        "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
        "release_date": "1999-10-15",
        "overview": "A ticking-time-bomb insomniac.",
        "vote_average": 8.4,
        "vote_count": 26280,
        "genre_ids": [18, 53, 35],
        "original_language": "en",
        "popularity": 61.416,
        "backdrop_path": "/hZkgoQYus5vegHoetLkCJzb17zJ.jpg",
        "adult": false,
        "video": false,
        "original_title": "Fight Club"
    });

    let resp = client.post(format!("{base}/favorites")).json(&payload).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Movie added to favorites");
    assert_eq!(body["movie_id"], 550);
    assert!(body["id"].is_i64());

    let listed: Value =
        client.get(format!("{base}/favorites")).send().await.unwrap().json().await.unwrap();
    let movies = listed.as_array().unwrap();
    assert_eq!(movies.len(), 1);

    let got = &movies[0];
    assert_eq!(got["id"], 550);
    assert_eq!(got["title"], "Fight Club");
    assert_eq!(got["poster_path"], "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg");
    assert_eq!(got["release_date"], "1999-10-15");
    assert_eq!(got["overview"], "A ticking-time-bomb insomniac.");
    assert_eq!(got["vote_average"], 8.4);
    assert_eq!(got["vote_count"], 26280);
    assert_eq!(got["genre_ids"], json!([18, 53, 35]));
    assert_eq!(got["original_language"], "en");
    assert_eq!(got["popularity"], 61.416);
    assert_eq!(got["backdrop_path"], "/hZkgoQYus5vegHoetLkCJzb17zJ.jpg");
    assert_eq!(got["adult"], false);
    assert_eq!(got["video"], false);
    assert_eq!(got["original_title"], "Fight Club");
    assert!(got["added_at"].is_i64());
}

#[tokio::test]
async fn duplicate_add_conflicts_and_keeps_one_row() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let first = client
        .post(format!("{base}/favorites"))
        .json(&movie(1, "First"))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = client
        .post(format!("{base}/favorites"))
        .json(&movie(1, "Second"))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body: Value = second.json().await.unwrap();
    assert_eq!(body["error"], "Movie already in favorites");

    let listed: Value =
        client.get(format!("{base}/favorites")).send().await.unwrap().json().await.unwrap();
    let movies = listed.as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "First");
}

#[tokio::test]
async fn add_rejects_missing_or_zero_identity() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    for payload in [json!({"title": "No Id"}), json!({"id": 0, "title": "Zero Id"})] {
        let resp = client.post(format!("{base}/favorites")).json(&payload).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "Invalid movie data");
    }

    let count: Value = client
        .get(format!("{base}/favorites/stats/count"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(count["count"], 0);
}

#[tokio::test]
async fn delete_missing_is_not_found_and_leaves_table_unchanged() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    client.post(format!("{base}/favorites")).json(&movie(1, "One")).send().await.unwrap();

    let resp = client.delete(format!("{base}/favorites/99")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Movie not found in favorites");

    let count: Value = client
        .get(format!("{base}/favorites/stats/count"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(count["count"], 1);
}

#[tokio::test]
async fn delete_removes_exactly_one_row_and_decrements_count() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    client.post(format!("{base}/favorites")).json(&movie(1, "One")).send().await.unwrap();
    client.post(format!("{base}/favorites")).json(&movie(2, "Two")).send().await.unwrap();

    let resp = client.delete(format!("{base}/favorites/1")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Movie removed from favorites");
    assert_eq!(body["movie_id"], 1);

    let listed: Value =
        client.get(format!("{base}/favorites")).send().await.unwrap().json().await.unwrap();
    let movies = listed.as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["id"], 2);

    let count: Value = client
        .get(format!("{base}/favorites/stats/count"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(count["count"], 1);
}

#[tokio::test]
async fn path_identity_must_be_a_nonzero_integer() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client.delete(format!("{base}/favorites/not-a-number")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = client.delete(format!("{base}/favorites/0")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Invalid movie ID");

    let resp = client.get(format!("{base}/favorites/0")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_orders_newest_first() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    for (id, title) in [(1, "Oldest"), (2, "Middle"), (3, "Newest")] {
        client.post(format!("{base}/favorites")).json(&movie(id, title)).send().await.unwrap();
    }

    let listed: Value =
        client.get(format!("{base}/favorites")).send().await.unwrap().json().await.unwrap();
    let ids: Vec<i64> =
        listed.as_array().unwrap().iter().map(|m| m["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[tokio::test]
async fn health_reports_ok_with_timestamp() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "OK");
    assert!(!body["timestamp"].as_str().unwrap().is_empty());
}

// The worked example: add 42, check, count, delete, check again.
#[tokio::test]
async fn favorite_lifecycle_for_movie_42() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let payload = json!({"id": 42, "title": "X", "genre_ids": [1, 2]});
    let resp = client.post(format!("{base}/favorites")).json(&payload).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let flag: Value =
        client.get(format!("{base}/favorites/42")).send().await.unwrap().json().await.unwrap();
    assert_eq!(flag["isFavorite"], true);

    let count: Value = client
        .get(format!("{base}/favorites/stats/count"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(count["count"], 1);

    let resp = client.delete(format!("{base}/favorites/42")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let flag: Value =
        client.get(format!("{base}/favorites/42")).send().await.unwrap().json().await.unwrap();
    assert_eq!(flag["isFavorite"], false);
}
