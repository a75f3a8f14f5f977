//! HTTP handlers and the helpers they share.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use tera::{Context, Tera};

use crate::domain::types::Locale;
use crate::dto::view_model::ViewModel;

pub mod main;

/// User-Agent fragments identifying phones and tablets.
const MOBILE_AGENT_MARKERS: [&str; 4] = ["Mobi", "Android", "iPhone", "iPad"];

/// Renders `template` with the assembled view model.
pub fn render_template(tera: &Tera, template: &str, view_model: &ViewModel) -> HttpResponse {
    let context = match Context::from_serialize(view_model) {
        Ok(context) => context,
        Err(err) => {
            log::error!("Failed to build template context for '{template}': {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    match tera.render(template, &context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_AGENT_MARKERS
        .iter()
        .any(|marker| user_agent.contains(marker))
}

/// Mobile flag precomputed from the `User-Agent` header.
pub fn is_mobile_request(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(is_mobile_user_agent)
}

/// Locale from `Accept-Language`, or `default` when absent or unusable.
pub fn request_locale(req: &HttpRequest, default: &Locale) -> Locale {
    req.headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(Locale::from_accept_language)
        .unwrap_or_else(|| default.clone())
}
