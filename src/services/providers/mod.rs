/// Video search provider abstraction
///
/// The service never ranks or fetches videos itself. A provider turns free
/// text into an ordered list of candidates, and callers trust that order.
use crate::{error::ProviderResult, models::SearchCandidate};

pub mod youtube;

pub use youtube::YouTubeSearchProvider;

/// Trait for video search providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    /// Search for videos matching free text
    ///
    /// Returns candidates best match first. An empty list means the
    /// provider answered but found nothing.
    async fn search(&self, query: &str) -> ProviderResult<Vec<SearchCandidate>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
