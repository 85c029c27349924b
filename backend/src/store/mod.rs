use async_trait::async_trait;

use crate::models::{Comment, NewComment, NewPost, Post};

mod sqlite;

pub use sqlite::{connect, SqlitePostStore};

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct StoreError(#[from] sqlx::Error);

/// Persistence for posts and their comments.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn create_post(&self, post: NewPost) -> Result<Post, StoreError>;

    /// All posts, oldest first, each with its comments in insertion order.
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError>;

    /// Appends a comment. Returns `None` when the post does not exist.
    async fn add_comment(
        &self,
        post_id: i64,
        comment: NewComment,
    ) -> Result<Option<Comment>, StoreError>;
}
