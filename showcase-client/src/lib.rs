pub mod config;
pub mod error;
#[cfg(feature = "http")]
pub mod http_client;
pub mod models;
pub mod pagination;
pub mod source;
pub mod view;

use error::{FetchOutcome, ShowcaseError};
use models::{Album, Photo, Post, Todo, User};
use serde::de::DeserializeOwned;
use source::{DataSource, Endpoint};
use std::sync::Arc;
use view::{PostDetail, TodoDetail};

pub use config::ClientConfig;
#[cfg(feature = "http")]
pub use http_client::HttpClient;
pub use pagination::TodoFilter;
pub use view::{AlbumBrowser, LoadState, PostList, TodoList};

/// Typed access to the placeholder API on top of any [`DataSource`].
///
/// Every operation resolves to a [`FetchOutcome`]: failures are logged here
/// and never propagate further.
#[derive(Debug)]
pub struct ShowcaseClient<S> {
    source: Arc<S>,
}

impl<S> Clone for ShowcaseClient<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

#[cfg(feature = "http")]
impl ShowcaseClient<HttpClient> {
    /// Client backed by reqwest, configured from `config`.
    pub fn http(config: &ClientConfig) -> Result<Self, ShowcaseError> {
        Ok(Self::new(HttpClient::with_config(config)?))
    }
}

impl<S: DataSource> ShowcaseClient<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ShowcaseError> {
        tracing::debug!("Fetching {}", endpoint);
        let value = self.source.fetch(&endpoint).await?;
        serde_json::from_value(value)
            .map_err(|e| ShowcaseError::SerializationError(format!("{}: {}", endpoint, e)))
    }

    async fn outcome<T: DeserializeOwned>(&self, endpoint: Endpoint) -> FetchOutcome<T> {
        FetchOutcome::from_result(&endpoint.path(), self.fetch(endpoint).await)
    }

    pub async fn posts(&self) -> FetchOutcome<Vec<Post>> {
        self.outcome(Endpoint::Posts).await
    }

    pub async fn albums(&self) -> FetchOutcome<Vec<Album>> {
        self.outcome(Endpoint::Albums).await
    }

    pub async fn album_photos(&self, album_id: i64) -> FetchOutcome<Vec<Photo>> {
        self.outcome(Endpoint::AlbumPhotos(album_id)).await
    }

    pub async fn todos(&self) -> FetchOutcome<Vec<Todo>> {
        self.outcome(Endpoint::Todos).await
    }

    pub async fn user(&self, id: i64) -> FetchOutcome<User> {
        self.outcome(Endpoint::User(id)).await
    }

    /// Post and comments are requested together; the author only after the
    /// post has resolved, since its id comes from the post.
    pub async fn post_detail(&self, id: i64) -> PostDetail {
        let mut detail = PostDetail::loading();

        let (post, comments) = futures::join!(
            self.outcome::<Post>(Endpoint::Post(id)),
            self.outcome(Endpoint::PostComments(id)),
        );
        detail.apply_comments(comments);

        if let Some(user_id) = detail.apply_post(post) {
            detail.apply_author(self.user(user_id).await);
        }

        detail
    }

    /// The todo first, then its owner and the owner's other todos together.
    pub async fn todo_detail(&self, id: i64) -> TodoDetail {
        let mut detail = TodoDetail::loading();

        if let Some(user_id) = detail.apply_todo(self.outcome(Endpoint::Todo(id)).await) {
            let (owner, todos) = futures::join!(
                self.user(user_id),
                self.outcome(Endpoint::UserTodos(user_id)),
            );
            detail.apply_owner(owner);
            detail.apply_related(todos);
        }

        detail
    }
}
