pub mod classifier;
pub mod providers;
pub mod runtime;
pub mod video_search;

pub use classifier::is_direct_url;
pub use providers::{SearchProvider, YouTubeSearchProvider};
