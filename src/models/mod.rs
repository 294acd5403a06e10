use serde::{Deserialize, Serialize};

mod video;

pub use video::{SearchCandidate, VideoResult, VideoSource, DIRECT_URL_TITLE, UNKNOWN_DURATION};

/// Service name shown on the root document
pub const SERVICE_NAME: &str = "YouTube Search API";

/// Service identifier reported by the health check
pub const SERVICE_ID: &str = "youtube-search-api";

pub const ROOT_PATH: &str = "/";
pub const SEARCH_PATH: &str = "/api/ytsearch";
pub const HEALTH_PATH: &str = "/health";

/// Search endpoint as advertised to clients
pub const SEARCH_USAGE: &str = "/api/ytsearch?q=your-query";

/// Example shown when the query parameter is missing
pub const SEARCH_EXAMPLE: &str = "/api/ytsearch?q=your search term";

/// Crate version, reported by the root and health documents
pub fn service_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// ============================================================================
// Request Types
// ============================================================================

/// Query string of the search endpoint
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

impl SearchParams {
    /// The query, if present and non-empty
    pub fn query(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }
}

// ============================================================================
// Response Documents
// ============================================================================

/// Capability description served at the root
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: ServiceEndpoints,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServiceEndpoints {
    pub search: &'static str,
    pub health: &'static str,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: SERVICE_NAME,
            version: service_version(),
            endpoints: ServiceEndpoints {
                search: SEARCH_USAGE,
                health: HEALTH_PATH,
            },
            status: "running",
        }
    }
}

/// Liveness document served by the health check
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
    /// Whole seconds since the service started
    pub uptime: u64,
    pub memory: MemorySnapshot,
    pub version: &'static str,
}

/// Memory usage of the running process, in bytes
///
/// Fields are `null` where the platform does not expose them.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct MemorySnapshot {
    /// Resident set size
    pub rss: Option<u64>,
    /// Peak resident set size
    pub rss_peak: Option<u64>,
    /// Total virtual memory
    pub virtual_size: Option<u64>,
    /// Data segment size
    pub data: Option<u64>,
}

/// Known routes, listed by the fallback handler
#[derive(Debug, Serialize)]
pub struct AvailableEndpoints {
    pub root: &'static str,
    pub search: &'static str,
    pub health: &'static str,
}

impl Default for AvailableEndpoints {
    fn default() -> Self {
        Self {
            root: ROOT_PATH,
            search: SEARCH_USAGE,
            health: HEALTH_PATH,
        }
    }
}
