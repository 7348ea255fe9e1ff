//! Inbound webhook payload types.
//!
//! Only the parts of the LINE webhook schema the bot acts on are modelled.
//! Unknown event and message types deserialize into `Other` variants
//! rather than failing the whole delivery.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::GeoPoint;

/// Body of a webhook delivery.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookRequest {
    /// Bot user ID the events were sent to.
    pub destination: Option<String>,

    pub events: Vec<WebhookEvent>,
}

/// A single webhook event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    /// Single-use token for replying to this event. Absent on events that
    /// cannot be replied to (unfollow, leave).
    pub reply_token: Option<String>,

    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub timestamp: Option<DateTime<Utc>>,

    pub source: Option<EventSource>,

    #[serde(flatten)]
    pub kind: EventKind,
}

/// Who triggered an event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    /// `user`, `group` or `room`.
    #[serde(rename = "type")]
    pub kind: String,

    pub user_id: Option<String>,
}

/// Event discriminant and its payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventKind {
    Message { message: MessageContent },
    Follow,
    Unfollow,
    Postback,
    #[serde(other)]
    Other,
}

/// Message payload of a `message` event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MessageContent {
    Text {
        text: String,
    },
    Location {
        title: Option<String>,
        address: Option<String>,
        latitude: f64,
        longitude: f64,
    },
    #[serde(other)]
    Other,
}

impl WebhookEvent {
    /// Short name of the event kind, for logging.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            EventKind::Message { message } => match message {
                MessageContent::Text { .. } => "message/text",
                MessageContent::Location { .. } => "message/location",
                MessageContent::Other => "message/other",
            },
            EventKind::Follow => "follow",
            EventKind::Unfollow => "unfollow",
            EventKind::Postback => "postback",
            EventKind::Other => "other",
        }
    }

    /// The shared location, if this is a location message.
    pub fn location(&self) -> Option<GeoPoint> {
        match &self.kind {
            EventKind::Message {
                message:
                    MessageContent::Location {
                        latitude,
                        longitude,
                        ..
                    },
            } => Some(GeoPoint::new(*latitude, *longitude)),
            _ => None,
        }
    }
}
