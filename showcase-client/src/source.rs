use crate::error::ShowcaseError;
use async_trait::async_trait;
use std::fmt;

/// Read-only resources exposed by the placeholder API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Posts,
    Post(i64),
    PostComments(i64),
    Albums,
    AlbumPhotos(i64),
    Todos,
    Todo(i64),
    UserTodos(i64),
    User(i64),
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Posts => "/posts".to_string(),
            Endpoint::Post(id) => format!("/posts/{}", id),
            Endpoint::PostComments(id) => format!("/posts/{}/comments", id),
            Endpoint::Albums => "/albums".to_string(),
            Endpoint::AlbumPhotos(album_id) => format!("/photos?albumId={}", album_id),
            Endpoint::Todos => "/todos".to_string(),
            Endpoint::Todo(id) => format!("/todos/{}", id),
            Endpoint::UserTodos(user_id) => format!("/users/{}/todos", user_id),
            Endpoint::User(id) => format!("/users/{}", id),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Anything that can answer a GET for an [`Endpoint`] with a JSON document.
///
/// Futures are not required to be `Send` so browser fetch implementations
/// qualify.
#[async_trait(?Send)]
pub trait DataSource {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<serde_json::Value, ShowcaseError>;
}
