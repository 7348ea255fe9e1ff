//! Reply composition.

use reqwest::Url;
use tracing::warn;

use crate::domain::RankedStation;
use crate::line::message::{
    Action, AspectMode, Bubble, ButtonStyle, FlexComponent, FlexContainer, Message, TextWeight,
};
use crate::ranker::MAX_TOP_K;

use super::config::ReplyConfig;

/// Sent for any event that is not a shared location.
pub const INSTRUCTION_TEXT: &str = "請傳送你的「位置」訊息，BOT 才能找到附近車位喔～";

/// Sent when a location was shared but no stations are available.
pub const NO_STATIONS_TEXT: &str = "附近找不到車位資訊，請稍後再試";

/// Notification text for the carousel.
pub const CAROUSEL_ALT_TEXT: &str = "附近車位";

/// Label of the navigation button on each card.
pub const NAVIGATE_LABEL: &str = "一鍵導航";

/// What the bot is replying with.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Ask the user to share a location.
    Instructions,

    /// Stations near the shared location, nearest first.
    Nearby(Vec<RankedStation>),
}

/// Build the outbound message for a reply.
pub fn compose(reply: &Reply, config: &ReplyConfig) -> Message {
    match reply {
        Reply::Instructions => instruction_text(),
        Reply::Nearby(ranked) if ranked.is_empty() => Message::text(NO_STATIONS_TEXT),
        Reply::Nearby(ranked) => compose_carousel(ranked, config),
    }
}

/// The fixed instructional text message.
pub fn instruction_text() -> Message {
    Message::text(INSTRUCTION_TEXT)
}

/// A carousel with one card per station, in rank order.
///
/// At most [`MAX_TOP_K`] cards are produced.
pub fn compose_carousel(ranked: &[RankedStation], config: &ReplyConfig) -> Message {
    let bubbles = ranked
        .iter()
        .take(MAX_TOP_K)
        .map(|r| station_card(r, config))
        .collect();

    Message::Flex {
        alt_text: CAROUSEL_ALT_TEXT.to_string(),
        contents: FlexContainer::Carousel { contents: bubbles },
    }
}

/// One carousel card.
pub fn station_card(ranked: &RankedStation, config: &ReplyConfig) -> Bubble {
    let station = &ranked.station;

    let hero = hero_image_url(&station.name, config).map(|url| FlexComponent::Image {
        url,
        size: Some("full".to_string()),
        aspect_ratio: Some("20:13".to_string()),
        aspect_mode: Some(AspectMode::Cover),
    });

    let body = FlexComponent::vertical(vec![
        FlexComponent::Text {
            text: station.name.clone(),
            weight: Some(TextWeight::Bold),
            size: Some("md".to_string()),
        },
        FlexComponent::text(format!("距離: {} 公尺", ranked.rounded_distance()), "sm"),
        FlexComponent::text(format!("可停車位: {}", station.available_slots), "sm"),
    ]);

    let footer = FlexComponent::vertical(vec![FlexComponent::Button {
        style: Some(ButtonStyle::Primary),
        action: Action::Uri {
            label: NAVIGATE_LABEL.to_string(),
            uri: navigation_url(ranked, config),
        },
    }]);

    Bubble {
        hero,
        body: Some(body),
        footer: Some(footer),
    }
}

/// Map search link for a station's coordinates.
pub fn navigation_url(ranked: &RankedStation, config: &ReplyConfig) -> String {
    format!("{}{}", config.maps_search_base, ranked.station.position)
}

/// Placeholder image URL with the station name as `text`.
///
/// The name is percent-encoded, so spaces become `%20`.
fn hero_image_url(name: &str, config: &ReplyConfig) -> Option<String> {
    let base = &config.placeholder_base;
    let separator = if base.contains('?') { '&' } else { '?' };
    let url = format!("{base}{separator}text={}", urlencoding::encode(name));

    match Url::parse(&url) {
        Ok(_) => Some(url),
        Err(e) => {
            warn!(base = %config.placeholder_base, error = %e, "invalid placeholder base, omitting hero image");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::domain::{GeoPoint, StationRecord};
    use crate::reply::DEFAULT_PLACEHOLDER_BASE;

    fn ranked(name: &str, lat: f64, lng: f64, slots: u32, distance_meters: f64) -> RankedStation {
        RankedStation {
            station: StationRecord::new(name, GeoPoint::new(lat, lng), slots),
            distance_meters,
        }
    }

    fn bubbles(message: &Message) -> &[Bubble] {
        match message {
            Message::Flex {
                contents: FlexContainer::Carousel { contents },
                ..
            } => contents,
            other => panic!("expected carousel, got {other:?}"),
        }
    }

    fn body_texts(bubble: &Bubble) -> Vec<String> {
        match &bubble.body {
            Some(FlexComponent::Box { contents, .. }) => contents
                .iter()
                .filter_map(|c| match c {
                    FlexComponent::Text { text, .. } => Some(text.clone()),
                    _ => None,
                })
                .collect(),
            other => panic!("expected box body, got {other:?}"),
        }
    }

    #[test]
    fn instructions_ignore_stations() {
        let message = compose(&Reply::Instructions, &ReplyConfig::default());
        assert_eq!(message, Message::text(INSTRUCTION_TEXT));
    }

    #[test]
    fn empty_ranking_gives_no_stations_text() {
        let message = compose(&Reply::Nearby(vec![]), &ReplyConfig::default());
        assert_eq!(message, Message::text(NO_STATIONS_TEXT));
    }

    #[test]
    fn carousel_keeps_rank_order() {
        let ranked = vec![
            ranked("near", 25.0, 121.5, 1, 10.0),
            ranked("far", 25.1, 121.5, 2, 1000.0),
        ];

        let message = compose(&Reply::Nearby(ranked), &ReplyConfig::default());
        let bubbles = bubbles(&message);

        assert_eq!(bubbles.len(), 2);
        assert_eq!(body_texts(&bubbles[0])[0], "near");
        assert_eq!(body_texts(&bubbles[1])[0], "far");
    }

    #[test]
    fn card_texts() {
        let card = station_card(
            &ranked("捷運市政府站", 25.0408, 121.5679, 12, 1234.5),
            &ReplyConfig::default(),
        );

        assert_eq!(
            body_texts(&card),
            ["捷運市政府站", "距離: 1235 公尺", "可停車位: 12"]
        );
    }

    #[test]
    fn card_navigation_link() {
        let card = station_card(
            &ranked("A", 25.0408, 121.5679, 0, 1.0),
            &ReplyConfig::default(),
        );

        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(
            value["footer"]["contents"][0]["action"],
            serde_json::json!({
                "type": "uri",
                "label": "一鍵導航",
                "uri": "https://www.google.com/maps/search/?api=1&query=25.0408,121.5679"
            })
        );
    }

    #[test]
    fn hero_image_encodes_name() {
        let card = station_card(&ranked("A B&C", 0.0, 0.0, 0, 1.0), &ReplyConfig::default());

        let value = serde_json::to_value(&card).unwrap();
        let url = value["hero"]["url"].as_str().unwrap();
        let parsed = Url::parse(url).unwrap();

        assert!(url.starts_with(DEFAULT_PLACEHOLDER_BASE));
        assert_eq!(
            parsed.query_pairs().find(|(k, _)| k == "text").map(|(_, v)| v.into_owned()),
            Some("A B&C".to_string())
        );
    }

    #[test]
    fn hero_image_percent_encodes_spaces() {
        let card = station_card(&ranked("A B", 0.0, 0.0, 0, 1.0), &ReplyConfig::default());

        let value = serde_json::to_value(&card).unwrap();

        assert_eq!(
            value["hero"]["url"],
            format!("{DEFAULT_PLACEHOLDER_BASE}?text=A%20B")
        );
    }

    #[test]
    fn hero_image_appends_to_existing_query() {
        let config = ReplyConfig::default().with_placeholder_base("https://img.example/p?size=300");
        let card = station_card(&ranked("站", 0.0, 0.0, 0, 1.0), &config);

        let value = serde_json::to_value(&card).unwrap();

        assert_eq!(
            value["hero"]["url"],
            "https://img.example/p?size=300&text=%E7%AB%99"
        );
    }

    #[test]
    fn invalid_placeholder_base_omits_hero() {
        let config = ReplyConfig::default().with_placeholder_base("not a url");
        let card = station_card(&ranked("A", 0.0, 0.0, 0, 1.0), &config);

        assert!(card.hero.is_none());
        assert!(card.body.is_some());
    }

    #[test]
    fn carousel_capped_at_ten_cards() {
        let ranked: Vec<_> = (0..15)
            .map(|i| ranked(&format!("s{i}"), 25.0, 121.5, 0, i as f64))
            .collect();

        let message = compose_carousel(&ranked, &ReplyConfig::default());

        assert_eq!(bubbles(&message).len(), 10);
    }

    #[test]
    fn carousel_alt_text() {
        let message = compose_carousel(&[ranked("A", 0.0, 0.0, 0, 1.0)], &ReplyConfig::default());
        let value: Value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["altText"], CAROUSEL_ALT_TEXT);
        assert_eq!(value["contents"]["type"], "carousel");
    }
}
