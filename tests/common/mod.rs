#![allow(dead_code)]

use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use forum_views::domain::types::Locale;
use forum_views::models::config::{PageSettings, RuntimeMode, ServerConfig};
use forum_views::repository::MemoryRepository;
use tera::Tera;

pub const SEED_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/seed.json");
pub const TEMPLATES_GLOB: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*");

pub fn page_settings() -> PageSettings {
    PageSettings {
        default_page_size: 4,
        pagination_window_size: 3,
        index_hot_articles_cnt: 3,
        index_perfect_articles_cnt: 3,
        index_tags_cnt: 4,
        side_random_articles_cnt: 2,
        side_hot_articles_cnt: 2,
        side_tags_cnt: 3,
        side_latest_comments_cnt: 2,
        site_name: "Test Forum".to_string(),
        static_resource_version: "42".to_string(),
        runtime_mode: RuntimeMode::Development,
        minified: false,
    }
}

pub fn server_config() -> ServerConfig {
    ServerConfig {
        domain: "localhost".to_string(),
        address: "127.0.0.1".to_string(),
        port: 0,
        templates_dir: TEMPLATES_GLOB.to_string(),
        assets_dir: "./assets".to_string(),
        seed_path: SEED_PATH.to_string(),
        secret: "x".repeat(64),
        default_locale: Locale::new("en_US").expect("valid locale"),
        pages: page_settings(),
    }
}

pub fn repository() -> MemoryRepository {
    let config = server_config();
    MemoryRepository::from_path(
        &config.seed_path,
        config.pages.pagination_window_size,
        config.default_locale,
    )
    .expect("seed data loads")
}

pub fn templates() -> Tera {
    Tera::new(TEMPLATES_GLOB).expect("templates parse")
}

/// Stands in for the external auth service by storing a session identity.
pub async fn login(req: HttpRequest, name: web::Path<String>) -> HttpResponse {
    match Identity::login(&req.extensions(), name.into_inner()) {
        Ok(_) => HttpResponse::Ok().finish(),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

/// Initialises the forum pages behind the same middleware stack as the
/// server, plus a `/test-login/{name}` helper.
#[allow(unused_macros)]
macro_rules! test_app {
    () => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_identity::IdentityMiddleware::default())
                .wrap(actix_session::SessionMiddleware::new(
                    actix_session::storage::CookieSessionStore::default(),
                    actix_web::cookie::Key::from(&[7u8; 64]),
                ))
                .app_data(actix_web::web::Data::new(common::templates()))
                .app_data(actix_web::web::Data::new(common::repository()))
                .app_data(actix_web::web::Data::new(common::server_config()))
                .service(forum_views::routes::main::show_index)
                .service(forum_views::routes::main::show_recent)
                .service(forum_views::routes::main::show_hot)
                .service(forum_views::routes::main::show_perfect)
                .service(forum_views::routes::main::show_about)
                .service(forum_views::routes::main::show_b3log)
                .service(forum_views::routes::main::show_kill_browser)
                .route(
                    "/test-login/{name}",
                    actix_web::web::post().to(common::login),
                ),
        )
        .await
    };
}
