use serde::{Deserialize, Serialize};

use crate::domain::types::{AvatarViewMode, UserId, UserName};

/// Forum member as seen by the listing pages.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub avatar_url: String,
    /// Preferred listing page size; only positive values override the
    /// configured default.
    pub list_page_size: i64,
    #[serde(default)]
    pub avatar_view_mode: AvatarViewMode,
}

impl User {
    /// The member's page-size preference, when it is usable.
    pub fn page_size_preference(&self) -> Option<usize> {
        usize::try_from(self.list_page_size)
            .ok()
            .filter(|size| *size > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(list_page_size: i64) -> User {
        User {
            id: UserId::new(1).expect("valid id"),
            name: UserName::new("alice").expect("valid name"),
            avatar_url: "/avatar/alice.png".to_string(),
            list_page_size,
            avatar_view_mode: AvatarViewMode::Original,
        }
    }

    #[test]
    fn only_positive_preferences_are_usable() {
        assert_eq!(user(10).page_size_preference(), Some(10));
        assert_eq!(user(0).page_size_preference(), None);
        assert_eq!(user(-4).page_size_preference(), None);
    }
}
