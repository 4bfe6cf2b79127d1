//! HTTP-level tests for the catalog routes.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use cinedex::config::Config;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let db_path =
        std::env::temp_dir().join(format!("cinedex-api-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());

    let state = cinedex::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    cinedex::api::router(state).await
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(app: &Router, uri: &str, body: Value) -> i64 {
    let (status, json) = send(app, "POST", uri, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create {uri} failed: {json}");
    json["data"]["id"].as_i64().unwrap()
}

fn movie_body(title: &str, franchise_id: Option<i64>) -> Value {
    json!({
        "title": title,
        "genre": "Action",
        "release_year": 2008,
        "director": "Jon Favreau",
        "picture_url": "https://example.com/poster.jpg",
        "trailer_url": null,
        "franchise_id": franchise_id,
    })
}

fn character_body(name: &str) -> Value {
    json!({ "full_name": name, "alias": "Alias", "gender": "Female" })
}

fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_character_crud_lifecycle() {
    let app = spawn_app().await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/characters",
        Some(json!({
            "full_name": "Tony Stark",
            "alias": "Iron Man",
            "gender": "Male",
            "picture_url": "https://example.com/tony.jpg"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(json["success"].as_bool().unwrap());
    assert_eq!(json["data"]["full_name"], "Tony Stark");
    assert_eq!(json["data"]["movie_ids"], json!([]));
    let id = json["data"]["id"].as_i64().unwrap();

    let (status, json) = send(&app, "GET", &format!("/api/characters/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["alias"], "Iron Man");

    // Full replace: alias omitted means alias cleared
    let (status, json) = send(
        &app,
        "PUT",
        &format!("/api/characters/{id}"),
        Some(json!({ "full_name": "Anthony Stark", "gender": "Male" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["full_name"], "Anthony Stark");
    assert!(json["data"]["alias"].is_null());
    assert!(json["data"]["picture_url"].is_null());

    let (status, json) = send(&app, "GET", "/api/characters", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json["data"]), vec![id]);

    let (status, _) = send(&app, "DELETE", &format!("/api/characters/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, json) = send(&app, "GET", &format!("/api/characters/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], format!("Character {id} not found"));

    let (status, _) = send(&app, "DELETE", &format!("/api/characters/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_entities_returns_not_found() {
    let app = spawn_app().await;

    let (status, _) = send(&app, "PUT", "/api/characters/42", Some(character_body("X"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PUT", "/api/movies/42", Some(movie_body("X", None))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "PUT",
        "/api/franchises/42",
        Some(json!({ "name": "Nothing" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_validation_errors() {
    let app = spawn_app().await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/characters",
        Some(json!({ "full_name": "   ", "gender": "Male" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);

    let mut old = movie_body("Too Old", None);
    old["release_year"] = json!(1850);
    let (status, _) = send(&app, "POST", "/api/movies", Some(old)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/api/franchises",
        Some(json!({ "name": "n".repeat(101) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/api/movies/0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "DELETE", "/api/franchises/-3", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_movie_with_unknown_franchise_is_not_found() {
    let app = spawn_app().await;

    let (status, json) = send(&app, "POST", "/api/movies", Some(movie_body("Orphan", Some(77)))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Franchise 77 not found");

    let (_, json) = send(&app, "GET", "/api/movies", None).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_movie_update_moves_between_franchises() {
    let app = spawn_app().await;

    let first = create(&app, "/api/franchises", json!({ "name": "First" })).await;
    let second = create(&app, "/api/franchises", json!({ "name": "Second" })).await;
    let movie = create(&app, "/api/movies", movie_body("Traveller", Some(first))).await;

    let (status, json) = send(
        &app,
        "PUT",
        &format!("/api/movies/{movie}"),
        Some(movie_body("Traveller", Some(second))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["franchise_id"], second);

    let (_, json) = send(&app, "GET", &format!("/api/franchises/{first}"), None).await;
    assert_eq!(json["data"]["movie_ids"], json!([]));
    let (_, json) = send(&app, "GET", &format!("/api/franchises/{second}"), None).await;
    assert_eq!(json["data"]["movie_ids"], json!([movie]));
}

#[tokio::test]
async fn test_replace_franchise_movies_over_http() {
    let app = spawn_app().await;

    let franchise = create(&app, "/api/franchises", json!({ "name": "MCU" })).await;
    let iron_man = create(&app, "/api/movies", movie_body("Iron Man", None)).await;
    let thor = create(&app, "/api/movies", movie_body("Thor", None)).await;

    let (status, json) = send(
        &app,
        "PUT",
        &format!("/api/franchises/{franchise}/movies"),
        Some(json!({ "movie_ids": [thor, iron_man, 9999] })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(json.is_null());

    let (status, json) = send(&app, "GET", &format!("/api/franchises/{franchise}/movies"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json["data"]), vec![iron_man, thor]);

    let (_, json) = send(&app, "GET", &format!("/api/movies/{thor}"), None).await;
    assert_eq!(json["data"]["franchise_id"], franchise);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/franchises/{franchise}/movies"),
        Some(json!({ "movie_ids": [iron_man, 0, -3] })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Ids that can never exist are skipped like any other unknown id
    let (_, json) = send(&app, "GET", &format!("/api/franchises/{franchise}/movies"), None).await;
    assert_eq!(ids(&json["data"]), vec![iron_man]);
    let (_, json) = send(&app, "GET", &format!("/api/movies/{thor}"), None).await;
    assert!(json["data"]["franchise_id"].is_null());

    let (status, _) = send(
        &app,
        "PUT",
        "/api/franchises/555/movies",
        Some(json!({ "movie_ids": [iron_man] })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The rejected request changed nothing
    let (_, json) = send(&app, "GET", &format!("/api/franchises/{franchise}"), None).await;
    assert_eq!(json["data"]["movie_ids"], json!([iron_man]));
}

#[tokio::test]
async fn test_movie_characters_and_franchise_characters() {
    let app = spawn_app().await;

    let franchise = create(&app, "/api/franchises", json!({ "name": "LOTR" })).await;
    let fellowship = create(&app, "/api/movies", movie_body("Fellowship", Some(franchise))).await;
    let towers = create(&app, "/api/movies", movie_body("Two Towers", Some(franchise))).await;

    let frodo = create(&app, "/api/characters", character_body("Frodo")).await;
    let sam = create(&app, "/api/characters", character_body("Sam")).await;
    let gollum = create(&app, "/api/characters", character_body("Gollum")).await;

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/movies/{fellowship}/characters"),
        Some(json!({ "character_ids": [frodo, sam, sam] })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/movies/{towers}/characters"),
        Some(json!({ "character_ids": [frodo, gollum, 4242, 0] })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, json) = send(&app, "GET", &format!("/api/movies/{towers}/characters"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json["data"]), vec![frodo, gollum]);

    let (status, json) = send(
        &app,
        "GET",
        &format!("/api/franchises/{franchise}/characters"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json["data"]), vec![frodo, sam, gollum]);

    let frodo_json = &json["data"][0];
    assert_eq!(frodo_json["movie_ids"], json!([fellowship, towers]));

    let (_, json) = send(&app, "GET", &format!("/api/movies/{fellowship}"), None).await;
    assert_eq!(json["data"]["character_ids"], json!([frodo, sam]));

    let (status, _) = send(&app, "GET", "/api/movies/999/characters", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/api/franchises/999/characters", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_cascades_over_http() {
    let app = spawn_app().await;

    let franchise = create(&app, "/api/franchises", json!({ "name": "Doomed" })).await;
    let movie = create(&app, "/api/movies", movie_body("Survivor", Some(franchise))).await;
    let character = create(&app, "/api/characters", character_body("Extra")).await;

    send(
        &app,
        "PUT",
        &format!("/api/movies/{movie}/characters"),
        Some(json!({ "character_ids": [character] })),
    )
    .await;

    let (status, _) = send(&app, "DELETE", &format!("/api/franchises/{franchise}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, json) = send(&app, "GET", &format!("/api/movies/{movie}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["data"]["franchise_id"].is_null());

    let (status, _) = send(&app, "DELETE", &format!("/api/characters/{character}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, json) = send(&app, "GET", &format!("/api/movies/{movie}"), None).await;
    assert_eq!(json["data"]["character_ids"], json!([]));
}
