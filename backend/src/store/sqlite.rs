use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::debug;

use super::{PostStore, StoreError};
use crate::models::{Comment, NewComment, NewPost, Post};

/// Opens a pool for `url`. An in-memory database only lives as long as
/// its connection, so those pools hold exactly one that never expires.
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool_options = if url.contains(":memory:") {
        SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };
    pool_options.connect_with(options).await
}

#[derive(Debug, Clone)]
pub struct SqlitePostStore {
    pool: SqlitePool,
}

impl SqlitePostStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS posts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS comments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                post_id INTEGER NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
                author TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl PostStore for SqlitePostStore {
    async fn create_post(&self, post: NewPost) -> Result<Post, StoreError> {
        let sql = "INSERT INTO posts (title, content, created_at) VALUES (?, ?, ?) RETURNING *";
        let post = sqlx::query_as::<_, Post>(sql)
            .bind(&post.title)
            .bind(&post.content)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;
        debug!("Post created: {}", post.id);
        Ok(post)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts = sqlx::query_as::<_, Post>("SELECT * FROM posts ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        let comments = sqlx::query_as::<_, Comment>("SELECT * FROM comments ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let mut by_post: HashMap<i64, Vec<Comment>> = HashMap::new();
        for comment in comments {
            by_post.entry(comment.post_id).or_default().push(comment);
        }
        for post in &mut posts {
            post.comments = by_post.remove(&post.id).unwrap_or_default();
        }
        Ok(posts)
    }

    async fn add_comment(
        &self,
        post_id: i64,
        comment: NewComment,
    ) -> Result<Option<Comment>, StoreError> {
        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM posts WHERE id = ?")
            .bind(post_id)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let sql = "INSERT INTO comments (post_id, author, content, created_at) \
                   VALUES (?, ?, ?, ?) RETURNING *";
        let comment = sqlx::query_as::<_, Comment>(sql)
            .bind(post_id)
            .bind(&comment.author)
            .bind(&comment.content)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;
        Ok(Some(comment))
    }
}
