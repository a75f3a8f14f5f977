//! Domain records exposed by the forum listing services.

pub mod article;
pub mod comment;
pub mod nav;
pub mod tag;
pub mod timeline;
pub mod types;
pub mod user;
