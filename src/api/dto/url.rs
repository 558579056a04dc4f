//! DTOs for saving and deleting short URLs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /url`.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveUrlRequest {
    /// Target to redirect to. Must be an absolute URL.
    #[validate(url)]
    pub url: String,

    /// Requested alias. Missing or empty means "generate one".
    #[serde(default)]
    #[validate(length(max = 64))]
    pub alias: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveUrlResponse {
    pub status: String,
    pub alias: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteUrlResponse {
    pub status: String,
    pub alias: String,
    pub info: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_is_optional() {
        let request: SaveUrlRequest =
            serde_json::from_str(r#"{"url":"https://example.com"}"#).unwrap();

        assert!(request.alias.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_url() {
        let request = SaveUrlRequest {
            url: "not a url".into(),
            alias: None,
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_rejects_overlong_alias() {
        let request = SaveUrlRequest {
            url: "https://example.com".into(),
            alias: Some("a".repeat(65)),
        };

        assert!(request.validate().is_err());
    }
}
