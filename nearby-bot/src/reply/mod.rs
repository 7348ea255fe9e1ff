//! Reply composition: ranked stations to LINE messages.

mod compose;
mod config;

pub use compose::{
    CAROUSEL_ALT_TEXT, INSTRUCTION_TEXT, NAVIGATE_LABEL, NO_STATIONS_TEXT, Reply, compose,
    compose_carousel, instruction_text, navigation_url, station_card,
};
pub use config::{DEFAULT_MAPS_SEARCH_BASE, DEFAULT_PLACEHOLDER_BASE, ReplyConfig};
