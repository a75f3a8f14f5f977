use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub title: String,
    pub uri: String,
    pub icon_path: Option<String>,
    /// Number of articles referencing this tag.
    pub reference_count: i64,
}
