use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::TimelineId;

/// Community activity event displayed on the index page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Timeline {
    pub id: TimelineId,
    /// Sanitized HTML body.
    pub content: String,
    pub created_at: NaiveDateTime,
}
