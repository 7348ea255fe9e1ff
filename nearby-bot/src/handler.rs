//! Per-event processing.
//!
//! Each webhook event runs as its own task: classify it, build the reply
//! (fetching and ranking stations for shared locations) and send it. A
//! failing event is logged and counted but never affects its siblings.

use futures::future::join_all;
use tracing::{Instrument, debug, error, info, info_span};

use crate::dataset::DatasetError;
use crate::domain::GeoPoint;
use crate::line::{LineError, WebhookEvent};
use crate::ranker::rank;
use crate::reply::{Reply, compose};
use crate::web::AppState;

/// What to do with an event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventAction {
    /// Reply with the stations nearest to `origin`.
    FindNearby { reply_token: String, origin: GeoPoint },

    /// Reply with the instructional text.
    Instruct { reply_token: String },

    /// Nothing to reply to.
    Ignore,
}

/// Decide how to handle an event.
///
/// Any event with a reply token that is not a location message gets the
/// instructional text. Events without a reply token are ignored.
pub fn classify(event: &WebhookEvent) -> EventAction {
    let Some(reply_token) = event.reply_token.clone() else {
        return EventAction::Ignore;
    };

    match event.location() {
        Some(origin) => EventAction::FindNearby {
            reply_token,
            origin,
        },
        None => EventAction::Instruct { reply_token },
    }
}

/// Errors from handling a single event.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("station dataset: {0}")]
    Dataset(#[from] DatasetError),

    #[error("reply: {0}")]
    Reply(#[from] LineError),

    #[error("event task failed: {0}")]
    Task(String),
}

/// Result of handling one delivery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Events that were replied to or deliberately ignored.
    pub succeeded: usize,

    /// Events whose processing failed.
    pub failed: usize,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Fetch, rank and wrap the stations nearest to `origin`.
pub async fn find_nearby(state: &AppState, origin: GeoPoint) -> Result<Reply, DatasetError> {
    let stations = state
        .stations
        .stations(state.rank.missing_coordinates)
        .await?;

    let total = stations.len();
    let ranked = rank(origin, stations, state.rank.top_k);

    debug!(
        total,
        returned = ranked.len(),
        nearest_m = ranked.first().map(|r| r.distance_meters),
        "ranked stations"
    );

    Ok(Reply::Nearby(ranked))
}

/// Handle one event end to end.
pub async fn handle_event(state: &AppState, event: &WebhookEvent) -> Result<(), EventError> {
    let (reply_token, reply) = match classify(event) {
        EventAction::Ignore => {
            debug!("no reply token, ignoring");
            return Ok(());
        }
        EventAction::Instruct { reply_token } => (reply_token, Reply::Instructions),
        EventAction::FindNearby {
            reply_token,
            origin,
        } => (reply_token, find_nearby(state, origin).await?),
    };

    let message = compose(&reply, &state.reply);
    state.line.reply(&reply_token, &[message]).await?;

    info!("replied");
    Ok(())
}

/// Handle every event of a delivery concurrently.
///
/// Waits for all events to finish. Failures are logged individually.
pub async fn handle_events(state: &AppState, events: Vec<WebhookEvent>) -> BatchOutcome {
    let tasks = events.into_iter().map(|event| {
        let state = state.clone();
        let span = info_span!(
            "event",
            kind = event.kind_name(),
            user = event
                .source
                .as_ref()
                .and_then(|s| s.user_id.as_deref())
                .unwrap_or("-"),
        );

        tokio::spawn(
            async move {
                let result = handle_event(&state, &event).await;
                if let Err(e) = &result {
                    error!(error = %e, "event failed");
                }
                result
            }
            .instrument(span),
        )
    });

    let mut outcome = BatchOutcome::default();

    for joined in join_all(tasks).await {
        let result = joined.map_err(|e| EventError::Task(e.to_string())).and_then(|r| r);
        match result {
            Ok(()) => outcome.succeeded += 1,
            Err(EventError::Task(message)) => {
                error!(error = %message, "event task panicked");
                outcome.failed += 1;
            }
            Err(_) => outcome.failed += 1,
        }
    }

    outcome
}
