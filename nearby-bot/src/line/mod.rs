//! LINE Messaging API integration.
//!
//! - [`signature`]: authenticates webhook deliveries
//! - [`event`]: typed inbound webhook events
//! - [`message`]: outbound text and Flex messages
//! - [`LineClient`]: sends replies

mod client;
mod error;
pub mod event;
pub mod message;
pub mod signature;

pub use client::{DEFAULT_API_BASE, LineClient, LineConfig, MAX_REPLY_MESSAGES};
pub use error::LineError;
pub use event::{EventKind, MessageContent, WebhookEvent, WebhookRequest};
pub use message::Message;
pub use signature::SignatureError;
