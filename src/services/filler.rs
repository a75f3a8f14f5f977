//! Fills the shared parts of a page: header/footer data, navigation and the
//! side panels.

use crate::dto::pages::RequestContext;
use crate::dto::view_model::{ViewModel, keys};
use crate::models::config::{PageSettings, RuntimeMode};
use crate::repository::{ArticleReader, CommentReader, NavReader, TagReader};
use crate::services::ServiceResult;

/// Storage backend reported by the runtime metadata.
pub const RUNTIME_DATABASE: &str = "memory";

/// Which side panels a page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidePanels {
    All,
    /// Random articles are left out for mobile visitors.
    SkipRandomOnMobile,
}

pub fn fill_domain_nav<R>(repo: &R, view_model: &mut ViewModel) -> ServiceResult<()>
where
    R: NavReader + ?Sized,
{
    let domains = repo.list_nav_domains().map_err(|err| {
        log::error!("Failed to load domain navigation: {err}");
        err
    })?;
    view_model.insert(keys::DOMAINS, &domains)?;
    Ok(())
}

/// Login state, site metadata and asset settings used by the page frame.
pub fn fill_header_and_footer(
    settings: &PageSettings,
    context: &RequestContext,
    view_model: &mut ViewModel,
) -> ServiceResult<()> {
    view_model.insert(keys::IS_LOGGED_IN, &context.current_user.is_some())?;
    if let Some(user) = &context.current_user {
        view_model.insert(keys::CURRENT_USER, user)?;
    }
    view_model.insert(keys::IS_MOBILE, &context.is_mobile)?;
    view_model.insert(keys::AVATAR_VIEW_MODE, context.avatar_view_mode.as_str())?;
    view_model.insert(keys::SITE_NAME, &settings.site_name)?;
    view_model.insert(
        keys::STATIC_RESOURCE_VERSION,
        &settings.static_resource_version,
    )?;
    fill_minified(settings, view_model)
}

pub fn fill_minified(settings: &PageSettings, view_model: &mut ViewModel) -> ServiceResult<()> {
    let postfix = if settings.minified || settings.runtime_mode == RuntimeMode::Production {
        ".min"
    } else {
        ""
    };
    view_model.insert(keys::MINI_POSTFIX, postfix)?;
    Ok(())
}

pub fn fill_runtime(settings: &PageSettings, view_model: &mut ViewModel) -> ServiceResult<()> {
    view_model.insert(keys::RUNTIME_MODE, settings.runtime_mode.as_str())?;
    view_model.insert(keys::RUNTIME_VERSION, env!("CARGO_PKG_VERSION"))?;
    view_model.insert(keys::RUNTIME_DATABASE, RUNTIME_DATABASE)?;
    Ok(())
}

pub fn fill_index_tags<R>(
    repo: &R,
    settings: &PageSettings,
    view_model: &mut ViewModel,
) -> ServiceResult<()>
where
    R: TagReader + ?Sized,
{
    let tags = repo.list_index_tags(settings.index_tags_cnt).map_err(|err| {
        log::error!("Failed to load index tags: {err}");
        err
    })?;
    view_model.insert(keys::INDEX_TAGS, &tags)?;
    Ok(())
}

pub fn fill_random_articles<R>(
    repo: &R,
    settings: &PageSettings,
    context: &RequestContext,
    view_model: &mut ViewModel,
) -> ServiceResult<()>
where
    R: ArticleReader + ?Sized,
{
    let articles = repo
        .list_random_articles(context.avatar_view_mode, settings.side_random_articles_cnt)
        .map_err(|err| {
            log::error!("Failed to load random articles: {err}");
            err
        })?;
    view_model.insert(keys::RANDOM_ARTICLES, &articles)?;
    Ok(())
}

pub fn fill_side_hot_articles<R>(
    repo: &R,
    settings: &PageSettings,
    context: &RequestContext,
    view_model: &mut ViewModel,
) -> ServiceResult<()>
where
    R: ArticleReader + ?Sized,
{
    let articles = repo
        .list_side_hot_articles(context.avatar_view_mode, settings.side_hot_articles_cnt)
        .map_err(|err| {
            log::error!("Failed to load side hot articles: {err}");
            err
        })?;
    view_model.insert(keys::SIDE_HOT_ARTICLES, &articles)?;
    Ok(())
}

pub fn fill_side_tags<R>(
    repo: &R,
    settings: &PageSettings,
    view_model: &mut ViewModel,
) -> ServiceResult<()>
where
    R: TagReader + ?Sized,
{
    let tags = repo.list_side_tags(settings.side_tags_cnt).map_err(|err| {
        log::error!("Failed to load side tags: {err}");
        err
    })?;
    view_model.insert(keys::SIDE_TAGS, &tags)?;
    Ok(())
}

pub fn fill_latest_comments<R>(
    repo: &R,
    settings: &PageSettings,
    view_model: &mut ViewModel,
) -> ServiceResult<()>
where
    R: CommentReader + ?Sized,
{
    let comments = repo
        .list_latest_comments(settings.side_latest_comments_cnt)
        .map_err(|err| {
            log::error!("Failed to load latest comments: {err}");
            err
        })?;
    view_model.insert(keys::LATEST_COMMENTS, &comments)?;
    Ok(())
}

/// Random articles, side hot articles, side tags and latest comments.
pub fn fill_side_panels<R>(
    repo: &R,
    settings: &PageSettings,
    context: &RequestContext,
    panels: SidePanels,
    view_model: &mut ViewModel,
) -> ServiceResult<()>
where
    R: ArticleReader + TagReader + CommentReader + ?Sized,
{
    let skip_random = panels == SidePanels::SkipRandomOnMobile && context.is_mobile;
    if !skip_random {
        fill_random_articles(repo, settings, context, view_model)?;
    }
    fill_side_hot_articles(repo, settings, context, view_model)?;
    fill_side_tags(repo, settings, view_model)?;
    fill_latest_comments(repo, settings, view_model)
}
