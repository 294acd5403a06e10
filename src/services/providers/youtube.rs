/// YouTube search provider
///
/// Scrapes the public results page rather than the Data API, so no key is
/// needed. The page embeds its initial state as a `ytInitialData` JSON blob;
/// every `videoRenderer` in it is one ranked candidate.
///
/// Flow:
/// 1. GET /results?search_query={q}
/// 2. Slice the `ytInitialData` object out of the HTML
/// 3. Collect `videoRenderer` nodes in document order and coerce them
use std::sync::LazyLock;

use regex::Regex;
use reqwest::{header, Client as HttpClient};
use serde_json::Value;

use crate::{
    error::{ProviderError, ProviderResult},
    models::{SearchCandidate, UNKNOWN_DURATION},
    services::providers::SearchProvider,
};

const DEFAULT_BASE_URL: &str = "https://www.youtube.com";
const WATCH_URL: &str = "https://youtube.com/watch?v=";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

static INITIAL_DATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:var\s+ytInitialData|window\["ytInitialData"\])\s*=\s*"#)
        .expect("valid ytInitialData pattern")
});

#[derive(Clone)]
pub struct YouTubeSearchProvider {
    http_client: HttpClient,
    base_url: String,
}

impl YouTubeSearchProvider {
    /// Creates a provider that queries youtube.com
    pub fn new() -> ProviderResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a provider against another host serving the same pages
    pub fn with_base_url(base_url: impl Into<String>) -> ProviderResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT_LANGUAGE,
            header::HeaderValue::from_static("en"),
        );

        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait]
impl SearchProvider for YouTubeSearchProvider {
    async fn search(&self, query: &str) -> ProviderResult<Vec<SearchCandidate>> {
        let url = format!("{}/results", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("search_query", query), ("hl", "en")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let html = response.text().await?;
        let initial_data = extract_initial_data(&html)?;
        let candidates = parse_candidates(&initial_data);

        tracing::info!(
            query = %query,
            results = candidates.len(),
            provider = self.name(),
            "Video search completed"
        );

        Ok(candidates)
    }

    fn name(&self) -> &'static str {
        "youtube"
    }
}

/// Pulls the `ytInitialData` object out of a results page
fn extract_initial_data(html: &str) -> ProviderResult<Value> {
    let marker = INITIAL_DATA.find(html).ok_or_else(|| {
        ProviderError::MalformedResponse("ytInitialData not found in results page".to_string())
    })?;

    // The blob is followed by more script text; parse exactly one value.
    let mut stream = serde_json::Deserializer::from_str(&html[marker.end()..]).into_iter::<Value>();
    match stream.next() {
        Some(Ok(value)) if value.is_object() => Ok(value),
        Some(Ok(_)) => Err(ProviderError::MalformedResponse(
            "ytInitialData is not an object".to_string(),
        )),
        Some(Err(e)) => {
            tracing::error!(error = %e, "Failed to parse ytInitialData");
            Err(ProviderError::MalformedResponse(format!(
                "Failed to parse ytInitialData: {}",
                e
            )))
        }
        None => Err(ProviderError::MalformedResponse(
            "ytInitialData is empty".to_string(),
        )),
    }
}

/// Ranked candidates found in the initial data
fn parse_candidates(initial_data: &Value) -> Vec<SearchCandidate> {
    // Restrict to the main results column when present so sidebar
    // recommendations cannot outrank real results.
    let root = initial_data
        .pointer("/contents/twoColumnSearchResultsRenderer/primaryContents")
        .unwrap_or(initial_data);

    let mut renderers = Vec::new();
    collect_video_renderers(root, &mut renderers);

    renderers
        .into_iter()
        .filter_map(|renderer| {
            let candidate = candidate_from_renderer(renderer);
            if candidate.is_none() {
                tracing::debug!(renderer = %renderer, "Skipping incomplete videoRenderer");
            }
            candidate
        })
        .collect()
}

fn collect_video_renderers<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::Object(map) => {
            if let Some(renderer) = map.get("videoRenderer") {
                out.push(renderer);
            }
            for (key, child) in map {
                if key != "videoRenderer" {
                    collect_video_renderers(child, out);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_video_renderers(item, out);
            }
        }
        _ => {}
    }
}

/// Coerces one `videoRenderer` into a typed candidate
///
/// Returns `None` when the renderer lacks an id or a title.
fn candidate_from_renderer(renderer: &Value) -> Option<SearchCandidate> {
    let video_id = renderer
        .get("videoId")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())?
        .to_string();
    let title = renderer.get("title").and_then(text_of)?;

    let duration = renderer
        .get("lengthText")
        .and_then(text_of)
        .unwrap_or_else(|| UNKNOWN_DURATION.to_string());

    let author = renderer
        .get("ownerText")
        .or_else(|| renderer.get("longBylineText"))
        .and_then(|byline| byline.pointer("/runs/0/text"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let views = renderer
        .get("viewCountText")
        .and_then(text_of)
        .and_then(|text| parse_view_count(&text));

    Some(SearchCandidate {
        url: format!("{}{}", WATCH_URL, video_id),
        thumbnail: format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", video_id),
        video_id,
        title,
        duration,
        author,
        views,
    })
}

/// Reads a YouTube text node, either `simpleText` or concatenated `runs`
fn text_of(node: &Value) -> Option<String> {
    if let Some(text) = node.get("simpleText").and_then(Value::as_str) {
        return Some(text.to_string());
    }

    let runs = node.get("runs")?.as_array()?;
    let text: String = runs
        .iter()
        .filter_map(|run| run.get("text").and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Parses view counts like "1,234,567 views"
fn parse_view_count(text: &str) -> Option<u64> {
    if text.trim().eq_ignore_ascii_case("no views") {
        return Some(0);
    }

    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}
