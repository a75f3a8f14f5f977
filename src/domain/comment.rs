use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ArticleId, CommentId};

/// Recent comment shown in the side panel.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub article_title: String,
    pub article_permalink: String,
    pub author_name: String,
    pub author_thumbnail_url: String,
    /// Sanitized HTML body.
    pub content: String,
    pub created_at: NaiveDateTime,
}
