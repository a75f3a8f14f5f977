//! Assembly of the forum listing pages.
//!
//! Each [`PageKind`] has exactly one assembly function. Assembly either
//! returns a complete [`ViewModel`] or an error; the view model is never
//! handed out half filled.

use crate::domain::article::{ArticleSummary, ListedArticle};
use crate::domain::user::User;
use crate::dto::pages::{PageKind, PageQuery, PageRequest, RequestContext};
use crate::dto::view_model::{ViewModel, keys};
use crate::models::config::PageSettings;
use crate::pagination::PaginationInfo;
use crate::repository::{
    ArticleListQuery, ArticleReader, CommentReader, LangReader, NavReader, TagReader,
    TimelineReader,
};
use crate::services::ServiceResult;
use crate::services::filler::{self, SidePanels};
use crate::stopwatch::Stopwatch;

/// Every collaborator a listing page may call.
pub trait PageSources:
    ArticleReader + TimelineReader + TagReader + CommentReader + NavReader + LangReader
{
}

impl<T> PageSources for T where
    T: ArticleReader + TimelineReader + TagReader + CommentReader + NavReader + LangReader + ?Sized
{
}

/// Resolves the page number and page size of a listing request.
///
/// Anything but a non-empty run of ASCII digits selects page 1, as does `0`
/// and a number too large to represent. There is no upper bound; a page past
/// the end of the listing simply comes back empty. A member's positive
/// page-size preference is used as is, otherwise `default_page_size` applies.
pub fn resolve_page_request(
    raw_page: Option<&str>,
    current_user: Option<&User>,
    default_page_size: usize,
) -> PageRequest {
    let page_number = raw_page
        .filter(|raw| !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|raw| raw.parse::<usize>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1);

    let page_size = current_user
        .and_then(User::page_size_preference)
        .unwrap_or(default_page_size);

    PageRequest {
        page_number,
        page_size,
    }
}

/// Adds the stick flag and the compact tag field to every listed article.
pub fn normalize_articles(articles: Vec<ArticleSummary>) -> Vec<ListedArticle> {
    articles.into_iter().map(ListedArticle::from).collect()
}

/// Resolves the request parameters and assembles the page, timing the whole
/// assembly.
pub fn load_page<R>(
    repo: &R,
    settings: &PageSettings,
    kind: PageKind,
    query: &PageQuery,
    context: &RequestContext,
) -> ServiceResult<ViewModel>
where
    R: PageSources + ?Sized,
{
    let page_request = resolve_page_request(
        query.p.as_deref(),
        context.current_user.as_ref(),
        settings.default_page_size,
    );

    let _stopwatch = Stopwatch::start(format!("Assemble {}", kind.label()));
    assemble(repo, settings, kind, &page_request, context)
}

/// Builds the view model of `kind` for an already resolved request. Any
/// data-source failure aborts the whole page.
pub fn assemble<R>(
    repo: &R,
    settings: &PageSettings,
    kind: PageKind,
    page_request: &PageRequest,
    context: &RequestContext,
) -> ServiceResult<ViewModel>
where
    R: PageSources + ?Sized,
{
    let mut view_model = ViewModel::new();

    match kind {
        PageKind::Index => assemble_index(repo, settings, context, &mut view_model)?,
        PageKind::Recent => {
            assemble_recent(repo, settings, page_request, context, &mut view_model)?
        }
        PageKind::Hot => assemble_hot(repo, settings, page_request, context, &mut view_model)?,
        PageKind::Perfect => {
            assemble_perfect(repo, settings, page_request, context, &mut view_model)?
        }
        PageKind::About | PageKind::B3log => {
            assemble_side_only(repo, settings, context, &mut view_model)?
        }
        PageKind::KillBrowser => assemble_kill_browser(repo, settings, context, &mut view_model)?,
    }

    Ok(view_model)
}

/// Puts the page window and its boundaries into the view model. The
/// boundaries are left out entirely for an empty window.
pub fn fill_pagination(
    page_request: &PageRequest,
    pagination: &PaginationInfo,
    view_model: &mut ViewModel,
) -> ServiceResult<()> {
    let window = pagination.window();
    if let Some(first) = window.first {
        view_model.insert(keys::PAGINATION_FIRST_PAGE_NUM, &first)?;
    }
    if let Some(last) = window.last {
        view_model.insert(keys::PAGINATION_LAST_PAGE_NUM, &last)?;
    }

    view_model.insert(keys::PAGINATION_CURRENT_PAGE_NUM, &page_request.page_number)?;
    view_model.insert(keys::PAGINATION_PAGE_COUNT, &pagination.page_count)?;
    view_model.insert(keys::PAGINATION_PAGE_NUMS, &pagination.page_nums)?;
    Ok(())
}

fn assemble_index<R>(
    repo: &R,
    settings: &PageSettings,
    context: &RequestContext,
    view_model: &mut ViewModel,
) -> ServiceResult<()>
where
    R: PageSources + ?Sized,
{
    let hot_articles = repo
        .list_hot_articles(context.avatar_view_mode, settings.index_hot_articles_cnt)
        .map_err(|err| {
            log::error!("Failed to load index hot articles: {err}");
            err
        })?;
    view_model.insert(keys::HOT_ARTICLES, &hot_articles)?;

    let perfect_articles = repo
        .list_perfect_articles(
            ArticleListQuery::new(context.avatar_view_mode)
                .paginate(1, settings.index_perfect_articles_cnt),
        )
        .map_err(|err| {
            log::error!("Failed to load index perfect articles: {err}");
            err
        })?
        .items;
    view_model.insert(keys::PERFECT_ARTICLES, &perfect_articles)?;

    let timelines = repo.list_timelines().map_err(|err| {
        log::error!("Failed to load timelines: {err}");
        err
    })?;
    view_model.insert(keys::TIMELINES, &timelines)?;

    filler::fill_domain_nav(repo, view_model)?;
    filler::fill_header_and_footer(settings, context, view_model)?;
    filler::fill_index_tags(repo, settings, view_model)
}

fn assemble_recent<R>(
    repo: &R,
    settings: &PageSettings,
    page_request: &PageRequest,
    context: &RequestContext,
    view_model: &mut ViewModel,
) -> ServiceResult<()>
where
    R: PageSources + ?Sized,
{
    let page = repo
        .list_recent_articles(
            ArticleListQuery::new(context.avatar_view_mode)
                .paginate(page_request.page_number, page_request.page_size),
        )
        .map_err(|err| {
            log::error!("Failed to load recent articles: {err}");
            err
        })?;

    view_model.insert(keys::LATEST_ARTICLES, &normalize_articles(page.items))?;
    view_model.insert(keys::ARTICLE_STICK_CHECK, &true)?;
    fill_pagination(page_request, &page.pagination, view_model)?;

    filler::fill_domain_nav(repo, view_model)?;
    filler::fill_header_and_footer(settings, context, view_model)?;
    filler::fill_side_panels(
        repo,
        settings,
        context,
        SidePanels::SkipRandomOnMobile,
        view_model,
    )
}

fn assemble_hot<R>(
    repo: &R,
    settings: &PageSettings,
    page_request: &PageRequest,
    context: &RequestContext,
    view_model: &mut ViewModel,
) -> ServiceResult<()>
where
    R: PageSources + ?Sized,
{
    let articles = repo
        .list_hot_articles(context.avatar_view_mode, page_request.page_size)
        .map_err(|err| {
            log::error!("Failed to load hot articles: {err}");
            err
        })?;
    view_model.insert(keys::INDEX_ARTICLES, &articles)?;

    let _fills = Stopwatch::start("Fills");
    filler::fill_header_and_footer(settings, context, view_model)?;
    filler::fill_domain_nav(repo, view_model)?;
    filler::fill_side_panels(
        repo,
        settings,
        context,
        SidePanels::SkipRandomOnMobile,
        view_model,
    )
}

fn assemble_perfect<R>(
    repo: &R,
    settings: &PageSettings,
    page_request: &PageRequest,
    context: &RequestContext,
    view_model: &mut ViewModel,
) -> ServiceResult<()>
where
    R: PageSources + ?Sized,
{
    let page = repo
        .list_perfect_articles(
            ArticleListQuery::new(context.avatar_view_mode)
                .paginate(page_request.page_number, page_request.page_size),
        )
        .map_err(|err| {
            log::error!("Failed to load perfect articles: {err}");
            err
        })?;

    view_model.insert(keys::PERFECT_ARTICLES, &normalize_articles(page.items))?;
    view_model.insert(keys::ARTICLE_STICK_CHECK, &true)?;
    fill_pagination(page_request, &page.pagination, view_model)?;

    filler::fill_domain_nav(repo, view_model)?;
    filler::fill_header_and_footer(settings, context, view_model)?;
    filler::fill_side_panels(
        repo,
        settings,
        context,
        SidePanels::SkipRandomOnMobile,
        view_model,
    )
}

/// About and B3log carry no listing of their own.
fn assemble_side_only<R>(
    repo: &R,
    settings: &PageSettings,
    context: &RequestContext,
    view_model: &mut ViewModel,
) -> ServiceResult<()>
where
    R: PageSources + ?Sized,
{
    filler::fill_header_and_footer(settings, context, view_model)?;
    filler::fill_side_panels(repo, settings, context, SidePanels::All, view_model)
}

fn assemble_kill_browser<R>(
    repo: &R,
    settings: &PageSettings,
    context: &RequestContext,
    view_model: &mut ViewModel,
) -> ServiceResult<()>
where
    R: PageSources + ?Sized,
{
    let langs = repo.get_all_langs(&context.locale).map_err(|err| {
        log::error!("Failed to load language table for {}: {err}", context.locale);
        err
    })?;
    view_model.extend_strings(langs);

    filler::fill_runtime(settings, view_model)?;
    filler::fill_minified(settings, view_model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{AvatarViewMode, UserId, UserName};

    fn user(list_page_size: i64) -> User {
        User {
            id: UserId::new(1).expect("valid id"),
            name: UserName::new("alice").expect("valid name"),
            avatar_url: "/avatar/alice.png".to_string(),
            list_page_size,
            avatar_view_mode: AvatarViewMode::Original,
        }
    }

    #[test]
    fn non_numeric_page_defaults_to_first() {
        for raw in [None, Some(""), Some("abc"), Some("-2"), Some("1.5"), Some(" 3"), Some("3a")] {
            assert_eq!(resolve_page_request(raw, None, 20).page_number, 1, "{raw:?}");
        }
    }

    #[test]
    fn zero_and_overflowing_pages_default_to_first() {
        assert_eq!(resolve_page_request(Some("0"), None, 20).page_number, 1);
        assert_eq!(
            resolve_page_request(Some("99999999999999999999999999"), None, 20).page_number,
            1
        );
    }

    #[test]
    fn numeric_page_is_used_without_upper_bound() {
        assert_eq!(resolve_page_request(Some("7"), None, 20).page_number, 7);
        assert_eq!(resolve_page_request(Some("007"), None, 20).page_number, 7);
        assert_eq!(
            resolve_page_request(Some("100000"), None, 20).page_number,
            100_000
        );
    }

    #[test]
    fn anonymous_request_uses_default_page_size() {
        let request = resolve_page_request(Some("abc"), None, 20);
        assert_eq!(
            request,
            PageRequest {
                page_number: 1,
                page_size: 20
            }
        );
    }

    #[test]
    fn member_preference_overrides_page_size() {
        let member = user(10);
        let request = resolve_page_request(Some("3"), Some(&member), 20);
        assert_eq!(
            request,
            PageRequest {
                page_number: 3,
                page_size: 10
            }
        );

        let huge = user(5_000);
        assert_eq!(resolve_page_request(None, Some(&huge), 20).page_size, 5_000);
    }

    #[test]
    fn non_positive_preference_keeps_default() {
        assert_eq!(resolve_page_request(None, Some(&user(0)), 20).page_size, 20);
        assert_eq!(resolve_page_request(None, Some(&user(-1)), 20).page_size, 20);
    }

    #[test]
    fn pagination_boundaries_follow_the_window() {
        let mut view_model = ViewModel::new();
        let request = PageRequest {
            page_number: 6,
            page_size: 20,
        };
        let pagination = PaginationInfo {
            page_count: 9,
            page_nums: vec![5, 6, 7],
        };

        fill_pagination(&request, &pagination, &mut view_model).unwrap();

        assert_eq!(view_model.get(keys::PAGINATION_FIRST_PAGE_NUM), Some(&5.into()));
        assert_eq!(view_model.get(keys::PAGINATION_LAST_PAGE_NUM), Some(&7.into()));
        assert_eq!(view_model.get(keys::PAGINATION_CURRENT_PAGE_NUM), Some(&6.into()));
        assert_eq!(view_model.get(keys::PAGINATION_PAGE_COUNT), Some(&9.into()));
    }

    #[test]
    fn empty_window_leaves_boundaries_unset() {
        let mut view_model = ViewModel::new();
        let request = PageRequest {
            page_number: 1,
            page_size: 20,
        };

        fill_pagination(&request, &PaginationInfo::default(), &mut view_model).unwrap();

        assert!(!view_model.contains_key(keys::PAGINATION_FIRST_PAGE_NUM));
        assert!(!view_model.contains_key(keys::PAGINATION_LAST_PAGE_NUM));
        assert_eq!(view_model.get(keys::PAGINATION_PAGE_COUNT), Some(&0.into()));
        assert_eq!(
            view_model.get(keys::PAGINATION_PAGE_NUMS),
            Some(&serde_json::json!([]))
        );
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod assembly_tests {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::domain::tag::Tag;
    use crate::domain::types::{ArticleId, AvatarViewMode, Locale, UserId, UserName};
    use crate::models::config::RuntimeMode;
    use crate::pagination::Paginated;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    fn settings() -> PageSettings {
        PageSettings {
            default_page_size: 20,
            pagination_window_size: 15,
            index_hot_articles_cnt: 8,
            index_perfect_articles_cnt: 6,
            index_tags_cnt: 10,
            side_random_articles_cnt: 5,
            side_hot_articles_cnt: 4,
            side_tags_cnt: 12,
            side_latest_comments_cnt: 3,
            site_name: "Forum".to_string(),
            static_resource_version: "20160816".to_string(),
            runtime_mode: RuntimeMode::Production,
            minified: false,
        }
    }

    fn context(is_mobile: bool) -> RequestContext {
        RequestContext::new(None, is_mobile, Locale::new("en_US").expect("valid locale"))
    }

    fn article(id: i64, tags: &str, stick_remains: i64) -> ArticleSummary {
        ArticleSummary {
            id: ArticleId::new(id).expect("valid id"),
            title: format!("Article #{id}"),
            permalink: format!("/article/{id}"),
            tags: tags.to_string(),
            stick_remains,
            author_name: "alice".to_string(),
            author_thumbnail_url: "/avatar/alice.png".to_string(),
            comment_count: 1,
            view_count: 2,
            created_at: NaiveDate::from_ymd_opt(2016, 8, 16)
                .and_then(|d| d.and_hms_opt(12, 0, 0))
                .expect("valid date"),
            latest_comment_at: None,
        }
    }

    fn tag(title: &str) -> Tag {
        Tag {
            title: title.to_string(),
            uri: format!("/tag/{title}"),
            icon_path: None,
            reference_count: 1,
        }
    }

    /// Side panels and navigation answer with small fixed data sets.
    fn expect_frame(repo: &mut MockRepository, random_times: usize) {
        repo.expect_list_nav_domains().returning(|| Ok(Vec::new()));
        repo.expect_list_random_articles()
            .withf(|_, count| *count == 5)
            .times(random_times)
            .returning(|_, _| Ok(vec![article(90, "Rust", 0)]));
        repo.expect_list_side_hot_articles()
            .withf(|_, count| *count == 4)
            .returning(|_, _| Ok(vec![article(91, "Rust", 0)]));
        repo.expect_list_side_tags()
            .withf(|count| *count == 12)
            .returning(|_| Ok(vec![tag("Rust")]));
        repo.expect_list_latest_comments()
            .withf(|count| *count == 3)
            .returning(|_| Ok(Vec::new()));
    }

    fn side_panel_keys() -> [&'static str; 3] {
        [
            keys::SIDE_HOT_ARTICLES,
            keys::SIDE_TAGS,
            keys::LATEST_COMMENTS,
        ]
    }

    #[test]
    fn recent_page_normalizes_and_paginates() {
        let mut repo = MockRepository::new();
        repo.expect_list_recent_articles()
            .withf(|query| {
                query.pagination
                    == Some(crate::repository::Pagination {
                        page: 2,
                        per_page: 20,
                    })
            })
            .times(1)
            .returning(|_| {
                Ok(Paginated::new(
                    vec![article(1, "Rust,Tokio", 3), article(2, "Actix", 0)],
                    PaginationInfo {
                        page_count: 7,
                        page_nums: vec![1, 2, 3, 4, 5],
                    },
                ))
            });
        expect_frame(&mut repo, 1);

        let view_model = load_page(
            &repo,
            &settings(),
            PageKind::Recent,
            &PageQuery {
                p: Some("2".to_string()),
            },
            &context(false),
        )
        .expect("page assembled");

        let articles = view_model.get(keys::LATEST_ARTICLES).expect("articles");
        assert_eq!(articles[0]["is_stick"], json!(true));
        assert_eq!(articles[0]["display_tags"], json!("Rust"));
        assert_eq!(articles[0]["tags"], json!("Rust,Tokio"));
        assert_eq!(articles[0]["stick_remains"], json!(3));
        assert_eq!(articles[1]["is_stick"], json!(false));
        assert_eq!(articles[1]["display_tags"], json!("Actix"));

        assert_eq!(view_model.get(keys::ARTICLE_STICK_CHECK), Some(&json!(true)));
        assert_eq!(view_model.get(keys::PAGINATION_CURRENT_PAGE_NUM), Some(&json!(2)));
        assert_eq!(view_model.get(keys::PAGINATION_FIRST_PAGE_NUM), Some(&json!(1)));
        assert_eq!(view_model.get(keys::PAGINATION_LAST_PAGE_NUM), Some(&json!(5)));
        assert_eq!(view_model.get(keys::PAGINATION_PAGE_COUNT), Some(&json!(7)));
        assert!(view_model.contains_key(keys::RANDOM_ARTICLES));
        for key in side_panel_keys() {
            assert!(view_model.contains_key(key), "{key}");
        }
        assert_eq!(view_model.get(keys::MINI_POSTFIX), Some(&json!(".min")));
        assert_eq!(view_model.get(keys::IS_LOGGED_IN), Some(&json!(false)));
    }

    #[test]
    fn recent_page_without_articles_has_no_boundaries() {
        let mut repo = MockRepository::new();
        repo.expect_list_recent_articles()
            .returning(|_| Ok(Paginated::empty()));
        expect_frame(&mut repo, 1);

        let view_model = load_page(
            &repo,
            &settings(),
            PageKind::Recent,
            &PageQuery::default(),
            &context(false),
        )
        .expect("page assembled");

        assert_eq!(view_model.get(keys::LATEST_ARTICLES), Some(&json!([])));
        assert_eq!(view_model.get(keys::PAGINATION_PAGE_NUMS), Some(&json!([])));
        assert_eq!(view_model.get(keys::PAGINATION_PAGE_COUNT), Some(&json!(0)));
        assert!(!view_model.contains_key(keys::PAGINATION_FIRST_PAGE_NUM));
        assert!(!view_model.contains_key(keys::PAGINATION_LAST_PAGE_NUM));
    }

    #[test]
    fn mobile_recent_page_skips_random_articles() {
        let mut repo = MockRepository::new();
        repo.expect_list_recent_articles()
            .returning(|_| Ok(Paginated::empty()));
        expect_frame(&mut repo, 0);

        let view_model = load_page(
            &repo,
            &settings(),
            PageKind::Recent,
            &PageQuery::default(),
            &context(true),
        )
        .expect("page assembled");

        assert!(!view_model.contains_key(keys::RANDOM_ARTICLES));
        for key in side_panel_keys() {
            assert!(view_model.contains_key(key), "{key}");
        }
        assert_eq!(view_model.get(keys::IS_MOBILE), Some(&json!(true)));
    }

    #[test]
    fn mobile_hot_page_skips_random_articles() {
        let mut repo = MockRepository::new();
        repo.expect_list_hot_articles()
            .withf(|_, limit| *limit == 20)
            .times(1)
            .returning(|_, _| Ok(vec![article(1, "Rust,Tokio", 0)]));
        expect_frame(&mut repo, 0);

        let view_model = load_page(
            &repo,
            &settings(),
            PageKind::Hot,
            &PageQuery::default(),
            &context(true),
        )
        .expect("page assembled");

        assert!(!view_model.contains_key(keys::RANDOM_ARTICLES));
        for key in side_panel_keys() {
            assert!(view_model.contains_key(key), "{key}");
        }
        assert!(!view_model.contains_key(keys::PAGINATION_PAGE_NUMS));
        let articles = view_model.get(keys::INDEX_ARTICLES).expect("articles");
        assert_eq!(articles[0]["tags"], json!("Rust,Tokio"));
    }

    #[test]
    fn mobile_perfect_page_skips_random_articles() {
        let mut repo = MockRepository::new();
        repo.expect_list_perfect_articles()
            .times(1)
            .returning(|_| {
                Ok(Paginated::new(
                    vec![article(4, "Rust,Serde", 0)],
                    PaginationInfo {
                        page_count: 1,
                        page_nums: vec![1],
                    },
                ))
            });
        expect_frame(&mut repo, 0);

        let view_model = load_page(
            &repo,
            &settings(),
            PageKind::Perfect,
            &PageQuery::default(),
            &context(true),
        )
        .expect("page assembled");

        assert!(!view_model.contains_key(keys::RANDOM_ARTICLES));
        for key in side_panel_keys() {
            assert!(view_model.contains_key(key), "{key}");
        }
        assert_eq!(view_model.get(keys::PAGINATION_PAGE_NUMS), Some(&json!([1])));
    }

    #[test]
    fn hot_page_limit_follows_member_preference() {
        let mut repo = MockRepository::new();
        repo.expect_list_hot_articles()
            .withf(|mode, limit| *mode == AvatarViewMode::Static && *limit == 7)
            .times(1)
            .returning(|_, _| Ok(Vec::new()));
        expect_frame(&mut repo, 1);

        let member = User {
            id: UserId::new(3).expect("valid id"),
            name: UserName::new("carol").expect("valid name"),
            avatar_url: "/avatar/carol.png".to_string(),
            list_page_size: 7,
            avatar_view_mode: AvatarViewMode::Static,
        };
        let context =
            RequestContext::new(Some(member), false, Locale::new("en").expect("valid locale"));

        let view_model = load_page(
            &repo,
            &settings(),
            PageKind::Hot,
            &PageQuery::default(),
            &context,
        )
        .expect("page assembled");

        assert_eq!(view_model.get(keys::IS_LOGGED_IN), Some(&json!(true)));
        assert_eq!(view_model.get(keys::AVATAR_VIEW_MODE), Some(&json!("static")));
        assert_eq!(
            view_model.get(keys::CURRENT_USER).map(|u| &u["name"]),
            Some(&json!("carol"))
        );
    }

    #[test]
    fn perfect_page_normalizes_and_paginates() {
        let mut repo = MockRepository::new();
        repo.expect_list_perfect_articles()
            .withf(|query| query.pagination.as_ref().map(|p| p.page) == Some(3))
            .times(1)
            .returning(|_| {
                Ok(Paginated::new(
                    vec![article(4, "Rust,Serde", -1)],
                    PaginationInfo {
                        page_count: 3,
                        page_nums: vec![1, 2, 3],
                    },
                ))
            });
        expect_frame(&mut repo, 1);

        let view_model = load_page(
            &repo,
            &settings(),
            PageKind::Perfect,
            &PageQuery {
                p: Some("3".to_string()),
            },
            &context(false),
        )
        .expect("page assembled");

        let articles = view_model.get(keys::PERFECT_ARTICLES).expect("articles");
        assert_eq!(articles[0]["is_stick"], json!(false));
        assert_eq!(articles[0]["display_tags"], json!("Rust"));
        assert_eq!(view_model.get(keys::PAGINATION_LAST_PAGE_NUM), Some(&json!(3)));
    }

    #[test]
    fn index_page_merges_listings_without_pagination() {
        let mut repo = MockRepository::new();
        repo.expect_list_hot_articles()
            .withf(|_, limit| *limit == 8)
            .times(1)
            .returning(|_, _| Ok(vec![article(1, "Rust", 0)]));
        repo.expect_list_perfect_articles()
            .withf(|query| {
                query.pagination
                    == Some(crate::repository::Pagination {
                        page: 1,
                        per_page: 6,
                    })
            })
            .times(1)
            .returning(|_| {
                Ok(Paginated::new(
                    vec![article(2, "Rust", 0)],
                    PaginationInfo {
                        page_count: 1,
                        page_nums: vec![1],
                    },
                ))
            });
        repo.expect_list_timelines().times(1).returning(|| Ok(Vec::new()));
        repo.expect_list_nav_domains().returning(|| Ok(Vec::new()));
        repo.expect_list_index_tags()
            .withf(|count| *count == 10)
            .returning(|_| Ok(vec![tag("Rust")]));

        let view_model = load_page(
            &repo,
            &settings(),
            PageKind::Index,
            &PageQuery::default(),
            &context(false),
        )
        .expect("page assembled");

        for key in [
            keys::HOT_ARTICLES,
            keys::PERFECT_ARTICLES,
            keys::TIMELINES,
            keys::INDEX_TAGS,
            keys::DOMAINS,
        ] {
            assert!(view_model.contains_key(key), "{key}");
        }
        assert!(!view_model.contains_key(keys::PAGINATION_PAGE_COUNT));
        assert!(!view_model.contains_key(keys::RANDOM_ARTICLES));
    }

    #[test]
    fn about_page_shows_every_side_panel_even_on_mobile() {
        for kind in [PageKind::About, PageKind::B3log] {
            let mut repo = MockRepository::new();
            expect_frame(&mut repo, 1);
            repo.expect_list_recent_articles().times(0);
            repo.expect_list_hot_articles().times(0);

            let view_model = load_page(
                &repo,
                &settings(),
                kind,
                &PageQuery::default(),
                &context(true),
            )
            .expect("page assembled");

            assert!(view_model.contains_key(keys::RANDOM_ARTICLES));
            for key in side_panel_keys() {
                assert!(view_model.contains_key(key), "{key}");
            }
        }
    }

    #[test]
    fn kill_browser_page_carries_langs_and_runtime() {
        let mut repo = MockRepository::new();
        repo.expect_list_random_articles().times(0);
        repo.expect_get_all_langs()
            .withf(|locale| locale.as_str() == "en_US")
            .times(1)
            .returning(|_| {
                Ok(BTreeMap::from([(
                    "killBrowserLabel".to_string(),
                    "Please upgrade".to_string(),
                )]))
            });

        let view_model = load_page(
            &repo,
            &settings(),
            PageKind::KillBrowser,
            &PageQuery::default(),
            &context(false),
        )
        .expect("page assembled");

        assert_eq!(
            view_model.get("killBrowserLabel"),
            Some(&json!("Please upgrade"))
        );
        assert_eq!(view_model.get(keys::RUNTIME_MODE), Some(&json!("production")));
        assert_eq!(
            view_model.get(keys::RUNTIME_VERSION),
            Some(&json!(env!("CARGO_PKG_VERSION")))
        );
        assert!(!view_model.contains_key(keys::IS_LOGGED_IN));
        assert!(!view_model.contains_key(keys::LATEST_ARTICLES));
    }

    #[test]
    fn data_source_failure_aborts_assembly() {
        let mut repo = MockRepository::new();
        repo.expect_list_recent_articles()
            .returning(|_| Ok(Paginated::empty()));
        repo.expect_list_nav_domains().returning(|| Ok(Vec::new()));
        repo.expect_list_random_articles()
            .returning(|_, _| Ok(Vec::new()));
        repo.expect_list_side_hot_articles()
            .returning(|_, _| Err(RepositoryError::Unavailable("down".to_string())));
        repo.expect_list_side_tags().times(0);
        repo.expect_list_latest_comments().times(0);

        let result = load_page(
            &repo,
            &settings(),
            PageKind::Recent,
            &PageQuery::default(),
            &context(false),
        );

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::Unavailable(_)))
        ));
    }

    #[test]
    fn kill_browser_page_fails_without_language_table() {
        let mut repo = MockRepository::new();
        repo.expect_get_all_langs()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let result = load_page(
            &repo,
            &settings(),
            PageKind::KillBrowser,
            &PageQuery::default(),
            &context(false),
        );

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::NotFound))
        ));
    }
}
