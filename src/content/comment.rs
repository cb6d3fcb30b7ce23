//! Comment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reader comment attached to a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,

    /// Owning post (not checked against the post collection)
    pub post_id: u64,

    /// Display name of the commenter
    pub author: String,

    pub email: String,

    pub content: String,

    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_new(id: u64, new: NewComment, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            post_id: new.post_id,
            author: new.author,
            email: new.email,
            content: new.content,
            created_at,
        }
    }

    /// Initials of the author, used as the avatar placeholder
    pub fn initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Input for creating a comment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub post_id: u64,
    pub author: String,
    pub email: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let comment = Comment::from_new(
            1,
            NewComment {
                post_id: 1,
                author: "sarah chen".to_string(),
                email: "sarah@example.com".to_string(),
                content: "Nice".to_string(),
            },
            Utc::now(),
        );
        assert_eq!(comment.initials(), "SC");
    }
}
