//! Input validation for user-supplied video URLs.
//!
//! Only YouTube hosts are accepted, so the URL forwarded to the model can
//! never point at an internal endpoint.

use url::Url;

/// Maximum URL length to prevent DoS attacks.
pub const MAX_URL_LENGTH: usize = 2048;

/// Allowed video URL domains.
const ALLOWED_DOMAINS: &[&str] = &["youtube.com", "youtu.be", "youtube-nocookie.com"];

/// Result of URL validation.
#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationResult {
    /// URL is valid and allowed.
    Valid(String),
    /// URL is malformed or uses an unsupported protocol.
    Invalid(String),
    /// URL domain is not a YouTube domain.
    DomainNotAllowed(String),
    /// URL exceeds maximum length.
    TooLong,
}

impl UrlValidationResult {
    /// Convert to Result for easy error handling.
    pub fn into_result(self) -> Result<String, String> {
        match self {
            Self::Valid(url) => Ok(url),
            Self::Invalid(msg) => Err(msg),
            Self::DomainNotAllowed(domain) => Err(format!(
                "Domain '{}' is not allowed. Please enter a YouTube video URL.",
                domain
            )),
            Self::TooLong => Err(format!(
                "URL exceeds maximum length of {} characters",
                MAX_URL_LENGTH
            )),
        }
    }
}

/// Validate a video URL: length, http(s) scheme, YouTube host.
pub fn validate_video_url(url: &str) -> UrlValidationResult {
    if url.len() > MAX_URL_LENGTH {
        return UrlValidationResult::TooLong;
    }

    let url = url.trim();
    if url.is_empty() {
        return UrlValidationResult::Invalid("URL cannot be empty".to_string());
    }

    let parsed = match Url::parse(url) {
        Ok(u) => u,
        Err(e) => return UrlValidationResult::Invalid(format!("Invalid URL format: {}", e)),
    };

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return UrlValidationResult::Invalid(format!(
                "Invalid protocol '{}'. Only HTTP and HTTPS are allowed.",
                scheme
            ))
        }
    }

    let domain = match parsed.host_str() {
        Some(d) => d.to_lowercase(),
        None => return UrlValidationResult::Invalid("URL must have a valid domain".to_string()),
    };

    if !is_domain_allowed(&domain) {
        return UrlValidationResult::DomainNotAllowed(domain);
    }

    UrlValidationResult::Valid(url.to_string())
}

/// Allow an exact match or any subdomain of an allowed domain.
fn is_domain_allowed(domain: &str) -> bool {
    ALLOWED_DOMAINS.iter().any(|allowed| {
        domain == *allowed
            || domain
                .strip_suffix(allowed)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

/// Strip control characters and cap length before logging user input.
pub fn sanitize_for_log(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .take(MAX_URL_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_youtube_urls() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?v=dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "http://youtu.be/dQw4w9WgXcQ",
            "  https://youtu.be/dQw4w9WgXcQ  ",
        ] {
            assert!(
                matches!(validate_video_url(url), UrlValidationResult::Valid(_)),
                "{}",
                url
            );
        }
    }

    #[test]
    fn test_invalid_domains() {
        assert_eq!(
            validate_video_url("https://vimeo.com/123"),
            UrlValidationResult::DomainNotAllowed("vimeo.com".to_string())
        );
        assert!(matches!(
            validate_video_url("https://notyoutube.com/watch?v=dQw4w9WgXcQ"),
            UrlValidationResult::DomainNotAllowed(_)
        ));
        assert!(matches!(
            validate_video_url("http://169.254.169.254/latest/meta-data"),
            UrlValidationResult::DomainNotAllowed(_)
        ));
    }

    #[test]
    fn test_invalid_protocols_and_format() {
        assert!(matches!(
            validate_video_url("ftp://youtube.com/watch?v=dQw4w9WgXcQ"),
            UrlValidationResult::Invalid(_)
        ));
        assert!(matches!(
            validate_video_url("javascript:alert(1)"),
            UrlValidationResult::Invalid(_)
        ));
        assert!(matches!(validate_video_url("   "), UrlValidationResult::Invalid(_)));
        assert!(matches!(
            validate_video_url("youtube.com/watch?v=dQw4w9WgXcQ"),
            UrlValidationResult::Invalid(_)
        ));
    }

    #[test]
    fn test_too_long() {
        let url = format!("https://youtube.com/watch?v={}", "a".repeat(MAX_URL_LENGTH));
        assert_eq!(validate_video_url(&url), UrlValidationResult::TooLong);
    }

    #[test]
    fn test_sanitize_for_log() {
        assert_eq!(sanitize_for_log("https://youtu.be/x\n\rforged"), "https://youtu.be/xforged");
    }
}
