use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::VideoResult,
    services::{classifier::is_direct_url, providers::SearchProvider},
};

/// Resolves a query to a single video
///
/// Direct links are echoed back without a lookup. Anything else goes to the
/// provider exactly once and the first candidate wins; ranking is the
/// provider's business.
///
/// The HTTP handler rejects empty queries before calling this; the check here
/// covers callers using the library directly.
pub async fn find_video(provider: Arc<dyn SearchProvider>, query: &str) -> AppResult<VideoResult> {
    if query.is_empty() {
        return Err(AppError::MissingQuery);
    }

    if is_direct_url(query) {
        tracing::info!(query = %query, "Query is a direct video URL");
        return Ok(VideoResult::direct(query));
    }

    tracing::info!(query = %query, provider = provider.name(), "Searching for video");

    let candidates = provider
        .search(query)
        .await
        .map_err(|e| AppError::provider(query, e))?;

    let video = candidates
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound {
            query: query.to_string(),
        })?;

    tracing::info!(query = %query, title = %video.title, "Found video");

    Ok(video.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::models::{SearchCandidate, VideoSource};
    use crate::services::providers::MockSearchProvider;
    use mockall::predicate::function;

    fn candidate(id: &str, title: &str) -> SearchCandidate {
        SearchCandidate {
            video_id: id.to_string(),
            url: format!("https://youtube.com/watch?v={}", id),
            title: title.to_string(),
            duration: "3:00".to_string(),
            thumbnail: format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", id),
            author: Some("Someone".to_string()),
            views: Some(42),
        }
    }

    fn mock_provider() -> MockSearchProvider {
        let mut provider = MockSearchProvider::new();
        provider.expect_name().return_const("mock");
        provider
    }

    #[tokio::test]
    async fn test_direct_url_skips_provider() {
        let mut provider = mock_provider();
        provider.expect_search().never();

        let result = find_video(Arc::new(provider), "https://youtu.be/abc123")
            .await
            .unwrap();

        assert_eq!(result, VideoResult::direct("https://youtu.be/abc123"));
        assert_eq!(result.source, VideoSource::DirectUrl);
    }

    #[tokio::test]
    async fn test_first_candidate_wins() {
        let mut provider = mock_provider();
        provider
            .expect_search()
            .with(function(|q: &str| q == "lofi beats"))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    candidate("first", "Lofi Beats Mix"),
                    candidate("second", "Better Lofi Beats"),
                ])
            });

        let result = find_video(Arc::new(provider), "lofi beats").await.unwrap();

        assert_eq!(result.title, "Lofi Beats Mix");
        assert_eq!(result.url, "https://youtube.com/watch?v=first");
        assert_eq!(result.source, VideoSource::SearchResult);
    }

    #[tokio::test]
    async fn test_no_candidates_is_not_found() {
        let mut provider = mock_provider();
        provider
            .expect_search()
            .times(1)
            .returning(|_| Ok(vec![]));

        let err = find_video(Arc::new(provider), "zzzzznonexistentqueryzzzzz")
            .await
            .unwrap_err();

        match err {
            AppError::NotFound { query } => assert_eq!(query, "zzzzznonexistentqueryzzzzz"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_provider_failure_is_reported() {
        let mut provider = mock_provider();
        provider.expect_search().times(1).returning(|_| {
            Err(ProviderError::MalformedResponse(
                "ytInitialData not found in results page".to_string(),
            ))
        });

        let err = find_video(Arc::new(provider), "lofi").await.unwrap_err();

        match err {
            AppError::Provider { query, message } => {
                assert_eq!(query, "lofi");
                assert!(message.contains("ytInitialData not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_query_is_rejected_without_search() {
        let mut provider = mock_provider();
        provider.expect_search().never();

        let err = find_video(Arc::new(provider), "").await.unwrap_err();
        assert!(matches!(err, AppError::MissingQuery));
    }
}
