//! Forum front pages.

use actix_identity::Identity;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use tera::Tera;

use crate::dto::pages::{PageKind, PageQuery, RequestContext};
use crate::models::config::ServerConfig;
use crate::repository::MemoryRepository;
use crate::routes::{is_mobile_request, render_template, request_locale};
use crate::services::{pages as pages_service, users as users_service};

/// Resolves the request, assembles the page and renders it.
fn show_page(
    kind: PageKind,
    req: &HttpRequest,
    identity: Option<Identity>,
    repo: &MemoryRepository,
    server_config: &ServerConfig,
    tera: &Tera,
) -> HttpResponse {
    // Malformed query strings fall back to the defaults instead of a 400.
    let query: PageQuery = serde_html_form::from_str(req.query_string()).unwrap_or_default();

    let identity = identity.and_then(|identity| identity.id().ok());
    let current_user = match users_service::current_user(repo, identity.as_deref()) {
        Ok(user) => user,
        Err(err) => {
            log::error!("Failed to resolve current user: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let context = RequestContext::new(
        current_user,
        is_mobile_request(req),
        request_locale(req, &server_config.default_locale),
    );

    match pages_service::load_page(repo, &server_config.pages, kind, &query, &context) {
        Ok(view_model) => render_template(tera, kind.template_name(), &view_model),
        Err(err) => {
            log::error!("Failed to assemble {} page: {err}", kind.label());
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/")]
pub async fn show_index(
    req: HttpRequest,
    identity: Option<Identity>,
    repo: web::Data<MemoryRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    show_page(PageKind::Index, &req, identity, &repo, &server_config, &tera)
}

#[get("/recent")]
pub async fn show_recent(
    req: HttpRequest,
    identity: Option<Identity>,
    repo: web::Data<MemoryRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    show_page(PageKind::Recent, &req, identity, &repo, &server_config, &tera)
}

#[get("/hot")]
pub async fn show_hot(
    req: HttpRequest,
    identity: Option<Identity>,
    repo: web::Data<MemoryRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    show_page(PageKind::Hot, &req, identity, &repo, &server_config, &tera)
}

#[get("/perfect")]
pub async fn show_perfect(
    req: HttpRequest,
    identity: Option<Identity>,
    repo: web::Data<MemoryRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    show_page(PageKind::Perfect, &req, identity, &repo, &server_config, &tera)
}

#[get("/about")]
pub async fn show_about(
    req: HttpRequest,
    identity: Option<Identity>,
    repo: web::Data<MemoryRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    show_page(PageKind::About, &req, identity, &repo, &server_config, &tera)
}

#[get("/b3log")]
pub async fn show_b3log(
    req: HttpRequest,
    identity: Option<Identity>,
    repo: web::Data<MemoryRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    show_page(PageKind::B3log, &req, identity, &repo, &server_config, &tera)
}

#[get("/kill-browser")]
pub async fn show_kill_browser(
    req: HttpRequest,
    identity: Option<Identity>,
    repo: web::Data<MemoryRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    show_page(
        PageKind::KillBrowser,
        &req,
        identity,
        &repo,
        &server_config,
        &tera,
    )
}
