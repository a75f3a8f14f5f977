#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_identity::IdentityMiddleware;
#[cfg(feature = "server")]
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::MemoryRepository;
#[cfg(feature = "server")]
use crate::routes::main::{
    show_about, show_b3log, show_hot, show_index, show_kill_browser, show_perfect, show_recent,
};

pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod services;
pub mod stopwatch;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Data source shared read-only by every worker.
    let repo = MemoryRepository::from_path(
        &server_config.seed_path,
        server_config.pages.pagination_window_size,
        server_config.default_locale.clone(),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to load seed data: {e}")))?;

    // Key for the session cookie shared with the auth service.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting server on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", &server_config.assets_dir))
            .service(show_index)
            .service(show_recent)
            .service(show_hot)
            .service(show_perfect)
            .service(show_about)
            .service(show_b3log)
            .service(show_kill_browser)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
