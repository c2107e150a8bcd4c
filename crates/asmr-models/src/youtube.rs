//! YouTube video identifiers and the player/watch URLs built from them.

use thiserror::Error;

/// Player host used for embeds; does not set cookies until playback starts.
pub const EMBED_BASE_URL: &str = "https://www.youtube-nocookie.com/embed/";

/// Canonical watch page.
pub const WATCH_BASE_URL: &str = "https://www.youtube.com/watch";

/// Length of every YouTube video ID.
const VIDEO_ID_LEN: usize = 11;

/// Markers that precede a video ID, in order of preference.
const ID_MARKERS: &[&str] = &["?v=", "&v=", "youtu.be/", "/embed/", "/v/", "/shorts/", "/live/"];

/// Errors that can occur during YouTube ID extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YoutubeIdError {
    #[error("URL is not a valid YouTube URL")]
    InvalidYoutubeUrl,

    #[error("Video ID has invalid format")]
    InvalidVideoId,

    #[error("Video ID not found in URL")]
    VideoIdNotFound,
}

/// Result type for YouTube ID extraction.
pub type YoutubeIdResult<T> = Result<T, YoutubeIdError>;

/// Extract the 11-character video ID from a YouTube URL.
///
/// Handles `watch?v=`, `youtu.be/`, `/embed/`, `/v/`, `/shorts/` and
/// `/live/` forms, with or without extra query parameters or fragments.
///
/// # Examples
/// ```
/// use asmr_models::youtube::extract_youtube_id;
/// assert_eq!(
///     extract_youtube_id("https://youtu.be/dQw4w9WgXcQ?t=30").unwrap(),
///     "dQw4w9WgXcQ"
/// );
/// ```
pub fn extract_youtube_id(url: &str) -> YoutubeIdResult<String> {
    let url = url.trim();

    let lower = url.to_ascii_lowercase();
    if !["youtube.com", "youtu.be", "youtube-nocookie.com"]
        .iter()
        .any(|host| lower.contains(host))
    {
        return Err(YoutubeIdError::InvalidYoutubeUrl);
    }

    let segment = ID_MARKERS
        .iter()
        .find_map(|marker| url.find(marker).map(|pos| &url[pos + marker.len()..]))
        .ok_or(YoutubeIdError::VideoIdNotFound)?;

    let end = segment
        .find(['&', '#', '?', '/'])
        .unwrap_or(segment.len());
    let id = segment[..end].trim();

    if id.is_empty() {
        return Err(YoutubeIdError::VideoIdNotFound);
    }
    if !is_valid_youtube_id(id) {
        return Err(YoutubeIdError::InvalidVideoId);
    }

    Ok(id.to_string())
}

/// Check the ID shape: 11 characters of `[A-Za-z0-9_-]`.
pub fn is_valid_youtube_id(id: &str) -> bool {
    id.len() == VIDEO_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Embeddable player address for a video.
pub fn embed_url(video_id: &str) -> String {
    format!("{}{}", EMBED_BASE_URL, video_id)
}

/// Watch page address for a video.
pub fn watch_url(video_id: &str) -> String {
    format!("{}?v={}", WATCH_BASE_URL, video_id)
}

/// Watch page address that starts playback at `seconds`.
pub fn deep_link(video_id: &str, seconds: i64) -> String {
    format!("{}?v={}&t={}s", WATCH_BASE_URL, video_id, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_youtube_id_success_cases() {
        let cases = [
            "https://youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://m.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?t=30",
            "https://youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ",
            "https://youtube.com/v/dQw4w9WgXcQ",
            "https://youtube.com/shorts/dQw4w9WgXcQ",
            "https://www.youtube.com/live/dQw4w9WgXcQ?si=abc",
            "https://youtube.com/watch?v=dQw4w9WgXcQ&list=PLrAXtmRdnEQy4qtr",
            "https://youtube.com/watch?v=dQw4w9WgXcQ#comments",
            "  https://youtu.be/dQw4w9WgXcQ  ",
        ];

        for url in cases {
            assert_eq!(extract_youtube_id(url).unwrap(), "dQw4w9WgXcQ", "{}", url);
        }
    }

    #[test]
    fn test_extract_youtube_id_error_cases() {
        assert_eq!(
            extract_youtube_id("https://example.com"),
            Err(YoutubeIdError::InvalidYoutubeUrl)
        );
        assert_eq!(
            extract_youtube_id("https://vimeo.com/123"),
            Err(YoutubeIdError::InvalidYoutubeUrl)
        );
        assert_eq!(
            extract_youtube_id("https://youtube.com/"),
            Err(YoutubeIdError::VideoIdNotFound)
        );
        assert_eq!(
            extract_youtube_id("https://youtube.com/watch?v="),
            Err(YoutubeIdError::VideoIdNotFound)
        );
        assert_eq!(
            extract_youtube_id("https://youtube.com/watch?v=short"),
            Err(YoutubeIdError::InvalidVideoId)
        );
        assert_eq!(
            extract_youtube_id("https://youtu.be/dQw4w9WgXc!"),
            Err(YoutubeIdError::InvalidVideoId)
        );
    }

    #[test]
    fn test_youtube_id_error_display() {
        assert_eq!(
            YoutubeIdError::InvalidYoutubeUrl.to_string(),
            "URL is not a valid YouTube URL"
        );
        assert_eq!(
            YoutubeIdError::VideoIdNotFound.to_string(),
            "Video ID not found in URL"
        );
    }

    #[test]
    fn test_player_urls() {
        assert_eq!(
            embed_url("dQw4w9WgXcQ"),
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(
            watch_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
        assert_eq!(
            deep_link("dQw4w9WgXcQ", 341),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=341s"
        );
    }
}
