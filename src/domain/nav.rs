use serde::{Deserialize, Serialize};

use crate::domain::tag::Tag;

/// Top-level navigation domain grouping a set of tags.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavDomain {
    pub title: String,
    pub uri: String,
    pub tags: Vec<Tag>,
}
