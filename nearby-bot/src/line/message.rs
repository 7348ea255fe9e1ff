//! Outbound message types.
//!
//! A small subset of the Messaging API message objects: plain text and
//! Flex carousels of bubbles.

use serde::Serialize;

/// A message the bot can send.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Message {
    Text {
        text: String,
    },
    Flex {
        /// Shown in notifications and chat lists.
        alt_text: String,
        contents: FlexContainer,
    },
}

impl Message {
    /// A plain text message.
    pub fn text(text: impl Into<String>) -> Self {
        Message::Text { text: text.into() }
    }
}

/// Top-level Flex container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FlexContainer {
    Carousel { contents: Vec<Bubble> },
}

/// A single card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "bubble")]
pub struct Bubble {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<FlexComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<FlexComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FlexComponent>,
}

/// Box, text, image and button components.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum FlexComponent {
    Box {
        layout: BoxLayout,
        contents: Vec<FlexComponent>,
    },
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        weight: Option<TextWeight>,
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<String>,
    },
    Image {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        aspect_ratio: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        aspect_mode: Option<AspectMode>,
    },
    Button {
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<ButtonStyle>,
        action: Action,
    },
}

impl FlexComponent {
    /// A vertical box.
    pub fn vertical(contents: Vec<FlexComponent>) -> Self {
        FlexComponent::Box {
            layout: BoxLayout::Vertical,
            contents,
        }
    }

    /// A text component with the given size.
    pub fn text(text: impl Into<String>, size: &str) -> Self {
        FlexComponent::Text {
            text: text.into(),
            weight: None,
            size: Some(size.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxLayout {
    Vertical,
    Horizontal,
    Baseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectMode {
    Cover,
    Fit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Link,
}

/// Action triggered by tapping a component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    Uri { label: String, uri: String },
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn text_message_json() {
        let value = serde_json::to_value(Message::text("hi")).unwrap();
        assert_eq!(value, json!({"type": "text", "text": "hi"}));
    }

    #[test]
    fn carousel_json() {
        let bubble = Bubble {
            hero: Some(FlexComponent::Image {
                url: "https://example.com/a.png".into(),
                size: Some("full".into()),
                aspect_ratio: Some("20:13".into()),
                aspect_mode: Some(AspectMode::Cover),
            }),
            body: Some(FlexComponent::vertical(vec![FlexComponent::Text {
                text: "name".into(),
                weight: Some(TextWeight::Bold),
                size: Some("md".into()),
            }])),
            footer: Some(FlexComponent::vertical(vec![FlexComponent::Button {
                style: Some(ButtonStyle::Primary),
                action: Action::Uri {
                    label: "go".into(),
                    uri: "https://example.com".into(),
                },
            }])),
        };

        let message = Message::Flex {
            alt_text: "alt".into(),
            contents: FlexContainer::Carousel {
                contents: vec![bubble],
            },
        };

        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "flex",
                "altText": "alt",
                "contents": {
                    "type": "carousel",
                    "contents": [{
                        "type": "bubble",
                        "hero": {
                            "type": "image",
                            "url": "https://example.com/a.png",
                            "size": "full",
                            "aspectRatio": "20:13",
                            "aspectMode": "cover"
                        },
                        "body": {
                            "type": "box",
                            "layout": "vertical",
                            "contents": [
                                {"type": "text", "text": "name", "weight": "bold", "size": "md"}
                            ]
                        },
                        "footer": {
                            "type": "box",
                            "layout": "vertical",
                            "contents": [{
                                "type": "button",
                                "style": "primary",
                                "action": {"type": "uri", "label": "go", "uri": "https://example.com"}
                            }]
                        }
                    }]
                }
            })
        );
    }

    #[test]
    fn empty_bubble_sections_are_omitted() {
        let bubble = Bubble {
            hero: None,
            body: Some(FlexComponent::vertical(vec![])),
            footer: None,
        };

        let value = serde_json::to_value(&bubble).unwrap();

        assert_eq!(
            value,
            json!({"type": "bubble", "body": {"type": "box", "layout": "vertical", "contents": []}})
        );
    }
}
