use serde::{Deserialize, Serialize};

/// Title reported for a query that was already a video link
pub const DIRECT_URL_TITLE: &str = "Direct YouTube URL";

/// Duration placeholder when no lookup was performed or the provider had none
pub const UNKNOWN_DURATION: &str = "Unknown";

/// Where a [`VideoResult`] came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VideoSource {
    /// The query itself was a video URL; nothing was looked up
    DirectUrl,
    /// First candidate returned by the search provider
    SearchResult,
}

/// Video metadata returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoResult {
    pub url: String,
    pub title: String,
    pub duration: String,
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    pub source: VideoSource,
}

impl VideoResult {
    /// Synthesizes a result for a query that is already a video link
    pub fn direct(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: DIRECT_URL_TITLE.to_string(),
            duration: UNKNOWN_DURATION.to_string(),
            thumbnail: String::new(),
            author: None,
            views: None,
            source: VideoSource::DirectUrl,
        }
    }
}

/// A video as ranked by the search provider
///
/// Providers coerce their raw payloads into this shape before handing
/// results back, so everything downstream works with typed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCandidate {
    pub video_id: String,
    pub url: String,
    pub title: String,
    pub duration: String,
    pub thumbnail: String,
    pub author: Option<String>,
    pub views: Option<u64>,
}

impl From<SearchCandidate> for VideoResult {
    fn from(candidate: SearchCandidate) -> Self {
        Self {
            url: candidate.url,
            title: candidate.title,
            duration: candidate.duration,
            thumbnail: candidate.thumbnail,
            author: candidate.author,
            views: candidate.views,
            source: VideoSource::SearchResult,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_result_serialization() {
        let result = VideoResult::direct("https://youtu.be/abc123");
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(
            value,
            json!({
                "url": "https://youtu.be/abc123",
                "title": "Direct YouTube URL",
                "duration": "Unknown",
                "thumbnail": "",
                "source": "direct_url"
            })
        );
    }

    #[test]
    fn test_candidate_to_search_result() {
        let candidate = SearchCandidate {
            video_id: "jfKfPfyJRdk".to_string(),
            url: "https://youtube.com/watch?v=jfKfPfyJRdk".to_string(),
            title: "Lofi Beats Mix".to_string(),
            duration: "1:02:03".to_string(),
            thumbnail: "https://i.ytimg.com/vi/jfKfPfyJRdk/hqdefault.jpg".to_string(),
            author: Some("Lofi Girl".to_string()),
            views: Some(1_234),
        };

        let result: VideoResult = candidate.into();
        assert_eq!(result.source, VideoSource::SearchResult);

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["source"], "search_result");
        assert_eq!(value["author"], "Lofi Girl");
        assert_eq!(value["views"], 1234);
        assert_eq!(value["duration"], "1:02:03");
    }

    #[test]
    fn test_missing_author_and_views_are_omitted() {
        let candidate = SearchCandidate {
            video_id: "x".to_string(),
            url: "https://youtube.com/watch?v=x".to_string(),
            title: "Untitled".to_string(),
            duration: UNKNOWN_DURATION.to_string(),
            thumbnail: String::new(),
            author: None,
            views: None,
        };

        let value = serde_json::to_value(VideoResult::from(candidate)).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("author"));
        assert!(!object.contains_key("views"));
    }

    #[test]
    fn test_video_source_serialization() {
        assert_eq!(
            serde_json::to_string(&VideoSource::DirectUrl).unwrap(),
            "\"direct_url\""
        );
        assert_eq!(
            serde_json::to_string(&VideoSource::SearchResult).unwrap(),
            "\"search_result\""
        );
    }
}
