//! Content references
//!
//! A card embeds one YouTube video, identified by its 11-character id. Users
//! may paste a bare id or a link in any of the usual shapes; [`ContentRef::parse`]
//! accepts those and rejects everything else before a card is created.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;
use crate::error::ContentError;

/// Length of a YouTube video id
pub const VIDEO_ID_LEN: usize = 11;

/// Path prefixes on youtube.com whose next segment is the id
const ID_PATH_PREFIXES: [&str; 4] = ["embed", "shorts", "live", "v"];

static FALLBACK_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"(?:youtu\.be/|youtube\.com/(?:embed/|shorts/|v/|watch\?v=|watch\?.+&v=))([^#&?]{11})").ok()
});

/// Validated, immutable reference to embeddable content
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRef(String);

impl ContentRef {
    /// Extract a video id from free-form user input
    pub fn parse(input: &str) -> Result<Self, ContentError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ContentError::Empty);
        }
        extract_video_id(trimmed)
            .map(ContentRef)
            .ok_or_else(|| ContentError::Unrecognized(trimmed.to_string()))
    }

    /// Accept an already-extracted id, as found in persisted state
    pub fn from_id(id: &str) -> Option<Self> {
        is_video_id(id).then(|| ContentRef(id.to_string()))
    }

    /// The bare video id
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch-page URL, used by the copy control
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }

    /// Embed URL for the player iframe
    pub fn embed_url(&self) -> String {
        format!(
            "https://www.youtube.com/embed/{}?autoplay=0&controls=1&modestbranding=1&rel=0&playsinline=1&enablejsapi=1",
            self.0
        )
    }
}

impl std::fmt::Display for ContentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check the fixed id alphabet and length
pub fn is_video_id(s: &str) -> bool {
    s.len() == VIDEO_ID_LEN
        && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Strict multi-pattern extraction
///
/// Tries, in order: a bare id, `youtu.be/<id>`, the `v` query parameter on
/// any `youtube.com` host, `/embed|shorts|live|v/<id>` paths, and finally the
/// single permissive pattern, whose capture must still pass [`is_video_id`].
fn extract_video_id(input: &str) -> Option<String> {
    if is_video_id(input) {
        return Some(input.to_string());
    }

    if let Some(id) = extract_from_url(input) {
        return Some(id);
    }

    let pattern = FALLBACK_PATTERN.as_ref()?;
    pattern
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|id| is_video_id(id))
        .map(str::to_string)
}

fn extract_from_url(input: &str) -> Option<String> {
    let lower = input.to_ascii_lowercase();
    let with_scheme = if lower.starts_with("http://") || lower.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };
    let url = Url::parse(&with_scheme).ok()?;

    let host = url.host_str()?.to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    if host == "youtu.be" {
        return segments
            .first()
            .filter(|id| is_video_id(id))
            .map(|id| id.to_string());
    }

    if host.ends_with("youtube.com") {
        let from_query = url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .filter(|id| is_video_id(id));
        if from_query.is_some() {
            return from_query;
        }

        if segments.len() >= 2 && ID_PATH_PREFIXES.contains(&segments[0]) {
            return Some(segments[1])
                .filter(|id| is_video_id(id))
                .map(str::to_string);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn test_bare_id() {
        assert_eq!(ContentRef::parse(ID).unwrap().as_str(), ID);
        assert_eq!(ContentRef::parse("  dQw4w9WgXcQ \n").unwrap().as_str(), ID);
    }

    #[test]
    fn test_recognized_url_shapes() {
        let inputs = [
            "https://youtu.be/dQw4w9WgXcQ",
            "youtu.be/dQw4w9WgXcQ?t=42",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "http://youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ&list=PL123",
            "www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "https://www.youtube.com/live/dQw4w9WgXcQ?si=abc",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "HTTPS://WWW.YOUTUBE.COM/watch?v=dQw4w9WgXcQ",
        ];
        for input in inputs {
            let parsed = ContentRef::parse(input);
            assert_eq!(parsed.as_ref().map(|c| c.as_str()), Ok(ID), "input: {}", input);
        }
    }

    #[test]
    fn test_rejections() {
        assert_eq!(ContentRef::parse(""), Err(ContentError::Empty));
        assert_eq!(ContentRef::parse("   "), Err(ContentError::Empty));

        let bad = [
            "dQw4w9WgXc",
            "dQw4w9WgXcQQ",
            "dQw4w9WgX!Q",
            "https://example.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/short",
            "https://www.youtube.com/watch?v=tooShort",
            "https://www.youtube.com/embed/dQw4w9WgX%3F",
            "not a url at all",
        ];
        for input in bad {
            assert!(
                matches!(ContentRef::parse(input), Err(ContentError::Unrecognized(_))),
                "input should be rejected: {}",
                input
            );
        }
    }

    #[test]
    fn test_from_id_is_strict() {
        assert!(ContentRef::from_id(ID).is_some());
        assert!(ContentRef::from_id("https://youtu.be/dQw4w9WgXcQ").is_none());
        assert!(ContentRef::from_id("").is_none());
    }

    #[test]
    fn test_urls() {
        let content = ContentRef::parse(ID).unwrap();
        assert_eq!(content.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert!(content.embed_url().starts_with("https://www.youtube.com/embed/dQw4w9WgXcQ?"));
        assert_eq!(content.to_string(), ID);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let content = ContentRef::parse(ID).unwrap();
        assert_eq!(serde_json::to_string(&content).unwrap(), "\"dQw4w9WgXcQ\"");
    }
}
