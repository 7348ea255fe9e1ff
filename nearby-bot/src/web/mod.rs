//! Web layer for the nearby-station bot.
//!
//! Provides the LINE webhook endpoint and a health check.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
