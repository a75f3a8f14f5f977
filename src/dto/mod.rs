//! DTO modules that bridge services with templates.

pub mod pages;
pub mod view_model;
