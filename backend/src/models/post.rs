use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Filled in by the store after the post row itself is read
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: i64,
    #[serde(skip)]
    pub post_id: i64,
    pub author: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewComment {
    pub author: String,
    pub content: String,
}
