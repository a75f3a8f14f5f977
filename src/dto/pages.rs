//! DTOs describing a listing page request.

use serde::Deserialize;

use crate::domain::types::{AvatarViewMode, Locale};
use crate::domain::user::User;

/// Listing views served by the forum front pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Index,
    Recent,
    Hot,
    Perfect,
    About,
    B3log,
    KillBrowser,
}

impl PageKind {
    pub fn label(&self) -> &'static str {
        match self {
            PageKind::Index => "index",
            PageKind::Recent => "recent",
            PageKind::Hot => "hot",
            PageKind::Perfect => "perfect",
            PageKind::About => "about",
            PageKind::B3log => "b3log",
            PageKind::KillBrowser => "kill-browser",
        }
    }

    /// Template rendering this page.
    pub fn template_name(&self) -> &'static str {
        match self {
            PageKind::Index => "main/index.html",
            PageKind::Recent => "main/recent.html",
            PageKind::Hot => "main/hot.html",
            PageKind::Perfect => "main/perfect.html",
            PageKind::About => "main/about.html",
            PageKind::B3log => "main/b3log.html",
            PageKind::KillBrowser => "main/kill-browser.html",
        }
    }
}

/// Query parameters accepted by the listing pages.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Requested page number as sent by the browser; may be anything.
    pub p: Option<String>,
}

/// Page of a listing to fetch, after defaulting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// Always at least 1.
    pub page_number: usize,
    /// Always at least 1 when the configured default is.
    pub page_size: usize,
}

/// Per-request facts resolved before assembly starts.
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub current_user: Option<User>,
    pub avatar_view_mode: AvatarViewMode,
    pub is_mobile: bool,
    pub locale: Locale,
}

impl RequestContext {
    /// Avatar view mode follows the member's preference, anonymous visitors
    /// get the default.
    pub fn new(current_user: Option<User>, is_mobile: bool, locale: Locale) -> Self {
        let avatar_view_mode = current_user
            .as_ref()
            .map(|user| user.avatar_view_mode)
            .unwrap_or_default();

        Self {
            current_user,
            avatar_view_mode,
            is_mobile,
            locale,
        }
    }
}
