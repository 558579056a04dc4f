//! Short URL entity: an alias owned by a creator and pointing at a target URL.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored alias → target mapping.
///
/// `alias` is unique across the whole store and compared byte-for-byte:
/// `abc` and `ABC` are different records.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ShortUrl {
    pub id: Uuid,
    pub alias: String,
    #[sqlx(rename = "url")]
    pub target: String,
    pub creator: Uuid,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Returns true if `user_id` owns this record.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.creator == user_id
    }
}

/// Input data for saving a new short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub alias: String,
    pub target: String,
    pub creator: Uuid,
}

impl NewShortUrl {
    pub fn new(target: impl Into<String>, alias: impl Into<String>, creator: Uuid) -> Self {
        Self {
            alias: alias.into(),
            target: target.into(),
            creator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_short_url_keeps_alias_verbatim() {
        let creator = Uuid::new_v4();
        let new_url = NewShortUrl::new("https://example.com", " AbC ", creator);

        assert_eq!(new_url.alias, " AbC ");
        assert_eq!(new_url.target, "https://example.com");
        assert_eq!(new_url.creator, creator);
    }

    #[test]
    fn test_is_owned_by() {
        let owner = Uuid::new_v4();
        let url = ShortUrl {
            id: Uuid::new_v4(),
            alias: "abc123".to_string(),
            target: "https://example.com".to_string(),
            creator: owner,
            created_at: Utc::now(),
        };

        assert!(url.is_owned_by(owner));
        assert!(!url.is_owned_by(Uuid::new_v4()));
    }
}
