use std::sync::LazyLock;

use regex::Regex;

static DIRECT_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?(youtube\.com|youtu\.be)/.+$").expect("valid direct URL pattern")
});

/// Whether the query is already a link to a hosted video
///
/// Matches http(s) links on `youtube.com` or `youtu.be`, with an optional
/// `www.` prefix, that carry a non-empty path.
pub fn is_direct_url(query: &str) -> bool {
    DIRECT_URL.is_match(query)
}
