//! Reply formatting configuration.

/// Default hero image service. The station name is passed as `?text=`.
pub const DEFAULT_PLACEHOLDER_BASE: &str = "https://via.placeholder.com/300x150";

/// Default map search link. Coordinates are appended as `lat,lng`.
pub const DEFAULT_MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Configuration for composing replies.
#[derive(Debug, Clone)]
pub struct ReplyConfig {
    /// Base URL for card hero images.
    pub placeholder_base: String,

    /// Prefix for navigation links.
    pub maps_search_base: String,
}

impl ReplyConfig {
    /// Set a custom hero image base URL.
    pub fn with_placeholder_base(mut self, url: impl Into<String>) -> Self {
        self.placeholder_base = url.into();
        self
    }

    /// Set a custom navigation link prefix.
    pub fn with_maps_search_base(mut self, url: impl Into<String>) -> Self {
        self.maps_search_base = url.into();
        self
    }
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            placeholder_base: DEFAULT_PLACEHOLDER_BASE.to_string(),
            maps_search_base: DEFAULT_MAPS_SEARCH_BASE.to_string(),
        }
    }
}
