//! In-memory data source backed by a JSON seed file.
//!
//! Used by the server binary when no external query service is wired in and
//! by integration tests. The seed is read once at startup and never mutated,
//! so the repository can be shared between workers without locking.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::domain::article::ArticleSummary;
use crate::domain::comment::Comment;
use crate::domain::nav::NavDomain;
use crate::domain::tag::Tag;
use crate::domain::timeline::Timeline;
use crate::domain::types::{AvatarViewMode, Locale, UserName};
use crate::domain::user::User;
use crate::pagination::{Paginated, PaginationInfo, page_count};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    ArticleListQuery, ArticleReader, CommentReader, LangReader, NavReader, TagReader,
    TimelineReader, UserReader,
};

/// Article record as stored in the seed file.
#[derive(Clone, Debug, Deserialize)]
pub struct SeedArticle {
    #[serde(flatten)]
    pub summary: ArticleSummary,
    #[serde(default)]
    pub perfect: bool,
    /// Still rendition of the author's avatar, used in static view mode.
    #[serde(default)]
    pub author_static_thumbnail_url: Option<String>,
}

impl SeedArticle {
    fn render(&self, avatar_view_mode: AvatarViewMode) -> ArticleSummary {
        let mut summary = self.summary.clone();
        if let (AvatarViewMode::Static, Some(url)) =
            (avatar_view_mode, &self.author_static_thumbnail_url)
        {
            summary.author_thumbnail_url = url.clone();
        }
        summary
    }
}

/// Whole content of a seed file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ForumSeed {
    #[serde(default)]
    pub articles: Vec<SeedArticle>,
    #[serde(default)]
    pub timelines: Vec<Timeline>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub domains: Vec<NavDomain>,
    #[serde(default)]
    pub users: Vec<User>,
    /// Language tables keyed by locale tag, e.g. `en_US`.
    #[serde(default)]
    pub langs: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Clone, Debug)]
pub struct MemoryRepository {
    seed: Arc<ForumSeed>,
    window_size: usize,
    default_locale: Locale,
}

impl MemoryRepository {
    /// Builds the repository from an already parsed seed. Comment and
    /// timeline bodies are sanitized here once.
    pub fn new(mut seed: ForumSeed, window_size: usize, default_locale: Locale) -> Self {
        for comment in &mut seed.comments {
            comment.content = ammonia::clean(&comment.content);
        }
        for timeline in &mut seed.timelines {
            timeline.content = ammonia::clean(&timeline.content);
        }

        Self {
            seed: Arc::new(seed),
            window_size,
            default_locale,
        }
    }

    /// Reads and parses the JSON seed file at `path`.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        window_size: usize,
        default_locale: Locale,
    ) -> RepositoryResult<Self> {
        let raw = fs::read_to_string(path.as_ref()).map_err(|err| {
            log::error!(
                "Failed to read seed file {}: {err}",
                path.as_ref().display()
            );
            err
        })?;
        let seed: ForumSeed = serde_json::from_str(&raw)?;

        log::info!(
            "Loaded {} articles, {} comments and {} users from {}",
            seed.articles.len(),
            seed.comments.len(),
            seed.users.len(),
            path.as_ref().display()
        );

        Ok(Self::new(seed, window_size, default_locale))
    }

    fn paginate(
        &self,
        mut articles: Vec<&SeedArticle>,
        query: &ArticleListQuery,
    ) -> Paginated<ArticleSummary> {
        let total = articles.len();

        let (current_page, per_page) = match &query.pagination {
            Some(pagination) => (pagination.page.max(1), pagination.per_page),
            None => (1, total),
        };
        let pages = page_count(total, per_page);

        let offset = (current_page - 1).checked_mul(per_page).unwrap_or(usize::MAX);
        let items = if offset >= total {
            Vec::new()
        } else {
            articles
                .drain(offset..)
                .take(per_page)
                .map(|article| article.render(query.avatar_view_mode))
                .collect()
        };

        Paginated::new(
            items,
            PaginationInfo::new(current_page, pages, self.window_size),
        )
    }

    fn render_all<'a, I>(articles: I, avatar_view_mode: AvatarViewMode) -> Vec<ArticleSummary>
    where
        I: IntoIterator<Item = &'a SeedArticle>,
    {
        articles
            .into_iter()
            .map(|article| article.render(avatar_view_mode))
            .collect()
    }
}

impl ArticleReader for MemoryRepository {
    fn list_hot_articles(
        &self,
        avatar_view_mode: AvatarViewMode,
        limit: usize,
    ) -> RepositoryResult<Vec<ArticleSummary>> {
        let mut articles: Vec<&SeedArticle> = self.seed.articles.iter().collect();
        articles.sort_by(|a, b| {
            b.summary
                .comment_count
                .cmp(&a.summary.comment_count)
                .then(b.summary.view_count.cmp(&a.summary.view_count))
        });
        articles.truncate(limit);

        Ok(Self::render_all(articles, avatar_view_mode))
    }

    fn list_recent_articles(
        &self,
        query: ArticleListQuery,
    ) -> RepositoryResult<Paginated<ArticleSummary>> {
        let mut articles: Vec<&SeedArticle> = self.seed.articles.iter().collect();
        articles.sort_by(|a, b| {
            b.summary
                .is_stick()
                .cmp(&a.summary.is_stick())
                .then(b.summary.created_at.cmp(&a.summary.created_at))
        });

        Ok(self.paginate(articles, &query))
    }

    fn list_perfect_articles(
        &self,
        query: ArticleListQuery,
    ) -> RepositoryResult<Paginated<ArticleSummary>> {
        let mut articles: Vec<&SeedArticle> =
            self.seed.articles.iter().filter(|a| a.perfect).collect();
        articles.sort_by(|a, b| b.summary.created_at.cmp(&a.summary.created_at));

        Ok(self.paginate(articles, &query))
    }

    fn list_random_articles(
        &self,
        avatar_view_mode: AvatarViewMode,
        count: usize,
    ) -> RepositoryResult<Vec<ArticleSummary>> {
        let mut articles: Vec<&SeedArticle> = self.seed.articles.iter().collect();
        articles.shuffle(&mut rand::rng());
        articles.truncate(count);

        Ok(Self::render_all(articles, avatar_view_mode))
    }

    fn list_side_hot_articles(
        &self,
        avatar_view_mode: AvatarViewMode,
        count: usize,
    ) -> RepositoryResult<Vec<ArticleSummary>> {
        let mut articles: Vec<&SeedArticle> = self
            .seed
            .articles
            .iter()
            .filter(|a| a.summary.latest_comment_at.is_some())
            .collect();
        articles.sort_by(|a, b| b.summary.latest_comment_at.cmp(&a.summary.latest_comment_at));
        articles.truncate(count);

        Ok(Self::render_all(articles, avatar_view_mode))
    }
}

impl TimelineReader for MemoryRepository {
    fn list_timelines(&self) -> RepositoryResult<Vec<Timeline>> {
        let mut timelines = self.seed.timelines.clone();
        timelines.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(timelines)
    }
}

impl TagReader for MemoryRepository {
    fn list_side_tags(&self, count: usize) -> RepositoryResult<Vec<Tag>> {
        let mut tags = self.seed.tags.clone();
        tags.shuffle(&mut rand::rng());
        tags.truncate(count);
        Ok(tags)
    }

    fn list_index_tags(&self, count: usize) -> RepositoryResult<Vec<Tag>> {
        let mut tags = self.seed.tags.clone();
        tags.sort_by(|a, b| b.reference_count.cmp(&a.reference_count));
        tags.truncate(count);
        Ok(tags)
    }
}

impl CommentReader for MemoryRepository {
    fn list_latest_comments(&self, count: usize) -> RepositoryResult<Vec<Comment>> {
        let mut comments = self.seed.comments.clone();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        comments.truncate(count);
        Ok(comments)
    }
}

impl NavReader for MemoryRepository {
    fn list_nav_domains(&self) -> RepositoryResult<Vec<NavDomain>> {
        Ok(self.seed.domains.clone())
    }
}

impl UserReader for MemoryRepository {
    fn get_user_by_name(&self, name: &UserName) -> RepositoryResult<Option<User>> {
        Ok(self.seed.users.iter().find(|u| &u.name == name).cloned())
    }
}

impl LangReader for MemoryRepository {
    fn get_all_langs(&self, locale: &Locale) -> RepositoryResult<BTreeMap<String, String>> {
        let langs = &self.seed.langs;

        let table = langs
            .get(locale.as_str())
            .or_else(|| {
                langs.iter().find_map(|(tag, table)| {
                    Locale::new(tag)
                        .ok()
                        .filter(|candidate| candidate.language() == locale.language())
                        .map(|_| table)
                })
            })
            .or_else(|| langs.get(self.default_locale.as_str()));

        match table {
            Some(table) => Ok(table.clone()),
            None => {
                log::error!(
                    "No language table for {locale} nor default {}",
                    self.default_locale
                );
                Err(RepositoryError::NotFound)
            }
        }
    }
}
