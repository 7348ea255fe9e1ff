//! Application state for the web layer.

use std::sync::Arc;

use crate::dataset::StationSource;
use crate::line::LineClient;
use crate::ranker::RankConfig;
use crate::reply::ReplyConfig;

/// Shared application state.
///
/// Everything is read-only after startup; events never share mutable
/// state.
#[derive(Clone)]
pub struct AppState {
    /// Secret used to verify webhook signatures
    pub channel_secret: Arc<str>,

    /// Messaging API client for replies
    pub line: Arc<LineClient>,

    /// Station dataset
    pub stations: Arc<StationSource>,

    /// Ranking configuration
    pub rank: Arc<RankConfig>,

    /// Reply formatting configuration
    pub reply: Arc<ReplyConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        channel_secret: impl Into<String>,
        line: LineClient,
        stations: StationSource,
        rank: RankConfig,
        reply: ReplyConfig,
    ) -> Self {
        Self {
            channel_secret: Arc::from(channel_secret.into()),
            line: Arc::new(line),
            stations: Arc::new(stations),
            rank: Arc::new(rank),
            reply: Arc::new(reply),
        }
    }
}
