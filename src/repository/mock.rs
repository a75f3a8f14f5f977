//! Mock repository implementations for isolating services in tests.

use std::collections::BTreeMap;

use mockall::mock;

use crate::domain::article::ArticleSummary;
use crate::domain::comment::Comment;
use crate::domain::nav::NavDomain;
use crate::domain::tag::Tag;
use crate::domain::timeline::Timeline;
use crate::domain::types::{AvatarViewMode, Locale, UserName};
use crate::domain::user::User;
use crate::pagination::Paginated;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ArticleListQuery, ArticleReader, CommentReader, LangReader, NavReader, TagReader,
    TimelineReader, UserReader,
};

mock! {
    pub Repository {}

    impl ArticleReader for Repository {
        fn list_hot_articles(
            &self,
            avatar_view_mode: AvatarViewMode,
            limit: usize,
        ) -> RepositoryResult<Vec<ArticleSummary>>;
        fn list_recent_articles(
            &self,
            query: ArticleListQuery,
        ) -> RepositoryResult<Paginated<ArticleSummary>>;
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

    impl TimelineReader for Repository {
        fn list_timelines(&self) -> RepositoryResult<Vec<Timeline>>;
    }

    impl TagReader for Repository {
        fn list_side_tags(&self, count: usize) -> RepositoryResult<Vec<Tag>>;
        fn list_index_tags(&self, count: usize) -> RepositoryResult<Vec<Tag>>;
    }

    impl CommentReader for Repository {
        fn list_latest_comments(&self, count: usize) -> RepositoryResult<Vec<Comment>>;
    }

    impl NavReader for Repository {
        fn list_nav_domains(&self) -> RepositoryResult<Vec<NavDomain>>;
    }

    impl UserReader for Repository {
        fn get_user_by_name(&self, name: &UserName) -> RepositoryResult<Option<User>>;
    }

    impl LangReader for Repository {
        fn get_all_langs(&self, locale: &Locale) -> RepositoryResult<BTreeMap<String, String>>;
    }
}
