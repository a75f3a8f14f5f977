//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, non-empty
//! names, normalized locale tags) so that once a value reaches the domain layer
//! it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Locale tag is not of the `ll` or `ll_CC` form.
    #[error("invalid locale tag")]
    InvalidLocale,
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i64` backing this identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(ArticleId, "Unique identifier for an article.");
id_newtype!(CommentId, "Unique identifier for a comment.");
id_newtype!(TimelineId, "Unique identifier for a timeline event.");
id_newtype!(UserId, "Unique identifier for a forum member.");

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(trimmed))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(UserName, "Forum member login name.");

/// How member avatars are rendered in listings.
///
/// The core never inspects this value; it is forwarded to the article data
/// source and echoed to templates.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AvatarViewMode {
    /// Avatars are shown as uploaded, animations included.
    #[default]
    Original,
    /// A still rendition is preferred when one exists.
    Static,
}

impl AvatarViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvatarViewMode::Original => "original",
            AvatarViewMode::Static => "static",
        }
    }
}

/// Language tag in `ll` or `ll_CC` form, e.g. `en_US`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Normalizes `en-us`, `en_US` or `EN` into `en_US` / `en`.
    pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }

        let mut parts = trimmed.split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        let country = parts.next();
        if parts.next().is_some() {
            return Err(TypeConstraintError::InvalidLocale);
        }

        let is_alpha =
            |part: &str| (2..=3).contains(&part.len()) && part.chars().all(|c| c.is_ascii_alphabetic());

        if !is_alpha(language) {
            return Err(TypeConstraintError::InvalidLocale);
        }

        match country {
            None => Ok(Self(language.to_ascii_lowercase())),
            Some(country) if is_alpha(country) => Ok(Self(format!(
                "{}_{}",
                language.to_ascii_lowercase(),
                country.to_ascii_uppercase()
            ))),
            Some(_) => Err(TypeConstraintError::InvalidLocale),
        }
    }

    /// Picks the first usable tag of an `Accept-Language` header value.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        header
            .split(',')
            .map(|entry| entry.split(';').next().unwrap_or_default())
            .find_map(|tag| Self::new(tag).ok())
    }

    /// Language part without the country, e.g. `en` for `en_US`.
    pub fn language(&self) -> &str {
        self.0.split('_').next().unwrap_or(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Locale {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.0
    }
}

impl FromStr for Locale {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
