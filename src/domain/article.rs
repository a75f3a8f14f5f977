use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::ArticleId;

/// Separator used by the data source when joining tag titles.
pub const TAG_SEPARATOR: char = ',';

/// Article as listed by the article data source.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: String,
    pub permalink: String,
    /// Comma-joined tag titles, e.g. `"Rust,Tokio"`.
    pub tags: String,
    /// Remaining stick rounds; the article is pinned while this is positive.
    pub stick_remains: i64,
    pub author_name: String,
    pub author_thumbnail_url: String,
    pub comment_count: i64,
    pub view_count: i64,
    pub created_at: NaiveDateTime,
    pub latest_comment_at: Option<NaiveDateTime>,
}

impl ArticleSummary {
    pub fn is_stick(&self) -> bool {
        self.stick_remains > 0
    }

    /// Tag field for compact list rows: only the first title is kept when
    /// several are present, otherwise the field is returned unchanged.
    pub fn display_tags(&self) -> &str {
        let mut titles = self.tags.split(TAG_SEPARATOR);
        let first = titles.next().unwrap_or_default();
        if titles.next().is_some() {
            first
        } else {
            &self.tags
        }
    }
}

/// Listing row handed to templates: the untouched article plus the derived
/// display fields.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ListedArticle {
    #[serde(flatten)]
    pub article: ArticleSummary,
    pub is_stick: bool,
    pub display_tags: String,
}

impl From<ArticleSummary> for ListedArticle {
    fn from(article: ArticleSummary) -> Self {
        let is_stick = article.is_stick();
        let display_tags = article.display_tags().to_string();
        Self {
            article,
            is_stick,
            display_tags,
        }
    }
}
