#![allow(dead_code)]

use anyhow::Result;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub fn post(id: i64) -> Value {
    json!({
        "userId": (id - 1) / 10 + 1,
        "id": id,
        "title": format!("post title {}", id),
        "body": format!("post body {}", id),
    })
}

pub fn comment(id: i64, post_id: i64) -> Value {
    json!({
        "postId": post_id,
        "id": id,
        "name": format!("comment {}", id),
        "email": format!("commenter{}@example.com", id),
        "body": "nice post",
    })
}

pub fn album(id: i64) -> Value {
    json!({ "userId": 1, "id": id, "title": format!("album {}", id) })
}

pub fn photo(id: i64, album_id: i64) -> Value {
    json!({
        "albumId": album_id,
        "id": id,
        "title": format!("photo {}", id),
        "url": format!("https://via.placeholder.com/600/{}", id),
        "thumbnailUrl": format!("https://via.placeholder.com/150/{}", id),
    })
}

/// Even ids up to 20 are completed.
pub fn todo(id: i64) -> Value {
    json!({
        "userId": (id - 1) / 20 + 1,
        "id": id,
        "title": format!("todo {}", id),
        "completed": id % 2 == 0 && id <= 20,
    })
}

pub fn user(id: i64) -> Value {
    json!({
        "id": id,
        "name": format!("User {}", id),
        "username": format!("user{}", id),
        "email": format!("user{}@example.com", id),
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031",
        "website": "hildegard.org",
        "company": {
            "name": format!("Company {}", id),
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    })
}

#[derive(Deserialize)]
struct PhotoQuery {
    #[serde(rename = "albumId")]
    album_id: i64,
}

async fn list_posts() -> Json<Value> {
    Json(Value::Array((1..=30).map(post).collect()))
}

async fn get_post(Path(id): Path<i64>) -> Result<Json<Value>, StatusCode> {
    match id {
        1..=30 => Ok(Json(post(id))),
        500 => Err(StatusCode::INTERNAL_SERVER_ERROR),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

async fn post_comments(Path(id): Path<i64>) -> Json<Value> {
    let comments = if (1..=30).contains(&id) {
        (1..=5).map(|n| comment((id - 1) * 5 + n, id)).collect()
    } else {
        Vec::new()
    };
    Json(Value::Array(comments))
}

async fn list_albums() -> Json<Value> {
    Json(Value::Array((1..=100).map(album).collect()))
}

async fn album_photos(Query(query): Query<PhotoQuery>) -> Json<Value> {
    let first = (query.album_id - 1) * 50 + 1;
    Json(Value::Array(
        (first..first + 50).map(|id| photo(id, query.album_id)).collect(),
    ))
}

async fn list_todos() -> Json<Value> {
    Json(Value::Array((1..=23).map(todo).collect()))
}

async fn get_todo(Path(id): Path<i64>) -> Result<Json<Value>, StatusCode> {
    if (1..=23).contains(&id) {
        Ok(Json(todo(id)))
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

async fn user_todos(Path(user_id): Path<i64>) -> Json<Value> {
    Json(Value::Array(
        (1..=23)
            .filter(|id| (id - 1) / 20 + 1 == user_id)
            .map(todo)
            .collect(),
    ))
}

async fn get_user(Path(id): Path<i64>) -> Result<Json<Value>, StatusCode> {
    match id {
        1 | 2 => Ok(Json(user(id))),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

async fn broken_json() -> (StatusCode, &'static str) {
    (StatusCode::OK, "<html>not json</html>")
}

/// Starts a placeholder API clone on an ephemeral port and returns its base URL.
///
/// Thirty posts, ten per user; posts 21..=30 belong to user 3, who is
/// missing, so their author lookups 404. Post 500 answers with a 500.
pub async fn spawn_placeholder_api() -> Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let app = Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/{id}", get(get_post))
        .route("/posts/{id}/comments", get(post_comments))
        .route("/albums", get(list_albums))
        .route("/photos", get(album_photos))
        .route("/todos", get(list_todos))
        .route("/todos/{id}", get(get_todo))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/todos", get(user_todos))
        .route("/broken/posts", get(broken_json));

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(format!("http://{addr}"))
}
