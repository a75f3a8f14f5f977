use std::collections::BTreeMap;

use crate::{
    domain::{
        article::ArticleSummary,
        comment::Comment,
        nav::NavDomain,
        tag::Tag,
        timeline::Timeline,
        types::{AvatarViewMode, Locale, UserName},
        user::User,
    },
    pagination::Paginated,
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use memory::MemoryRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Query for one of the paginated article listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListQuery {
    pub avatar_view_mode: AvatarViewMode,
    /// `None` returns the whole listing as a single page.
    pub pagination: Option<Pagination>,
}

impl ArticleListQuery {
    pub fn new(avatar_view_mode: AvatarViewMode) -> Self {
        Self {
            avatar_view_mode,
            pagination: None,
        }
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait ArticleReader {
    /// Most discussed articles, at most `limit` of them.
    fn list_hot_articles(
        &self,
        avatar_view_mode: AvatarViewMode,
        limit: usize,
    ) -> RepositoryResult<Vec<ArticleSummary>>;
    /// Latest articles, stickied ones first.
    fn list_recent_articles(
        &self,
        query: ArticleListQuery,
    ) -> RepositoryResult<Paginated<ArticleSummary>>;
    /// Articles marked as perfect by the moderators.
    fn list_perfect_articles(
        &self,
        query: ArticleListQuery,
    ) -> RepositoryResult<Paginated<ArticleSummary>>;
    fn list_random_articles(
        &self,
        avatar_view_mode: AvatarViewMode,
        count: usize,
    ) -> RepositoryResult<Vec<ArticleSummary>>;
    fn list_side_hot_articles(
        &self,
        avatar_view_mode: AvatarViewMode,
        count: usize,
    ) -> RepositoryResult<Vec<ArticleSummary>>;
}

pub trait TimelineReader {
    fn list_timelines(&self) -> RepositoryResult<Vec<Timeline>>;
}

pub trait TagReader {
    fn list_side_tags(&self, count: usize) -> RepositoryResult<Vec<Tag>>;
    fn list_index_tags(&self, count: usize) -> RepositoryResult<Vec<Tag>>;
}

pub trait CommentReader {
    fn list_latest_comments(&self, count: usize) -> RepositoryResult<Vec<Comment>>;
}

pub trait NavReader {
    fn list_nav_domains(&self) -> RepositoryResult<Vec<NavDomain>>;
}

pub trait UserReader {
    fn get_user_by_name(&self, name: &UserName) -> RepositoryResult<Option<User>>;
}

pub trait LangReader {
    /// Every language string for `locale`, falling back to the default locale.
    fn get_all_langs(&self, locale: &Locale) -> RepositoryResult<BTreeMap<String, String>>;
}
