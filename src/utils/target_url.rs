//! Target URL validation.
//!
//! Targets are stored exactly as submitted. Validation only decides whether
//! the string is an absolute HTTP(S) URL that a redirect can point at.

use url::Url;

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL must not contain control characters")]
    ControlCharacter,
}

/// Checks that `input` is a well-formed absolute `http` or `https` URL.
///
/// Rejects relative references, schemes such as `javascript:`, `data:`
/// or `file:`, and control characters. `Url::parse` drops tabs and newlines
/// silently, but the stored target must be usable as a `Location` header.
///
/// # Errors
///
/// Returns [`TargetUrlError::InvalidFormat`] for strings that do not parse as
/// an absolute URL, [`TargetUrlError::UnsupportedProtocol`] for non-HTTP(S)
/// schemes, [`TargetUrlError::MissingHost`] when the host is empty and
/// [`TargetUrlError::ControlCharacter`] for tabs, newlines and other
/// control characters.
pub fn validate_target_url(input: &str) -> Result<(), TargetUrlError> {
    if input.chars().any(char::is_control) {
        return Err(TargetUrlError::ControlCharacter);
    }

    let url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(TargetUrlError::MissingHost),
    }
}
