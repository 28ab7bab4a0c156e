//! MS Teams message carrying an Adaptive Card

use serde::Serialize;

const MESSAGE_TYPE: &str = "message";
const ADAPTIVE_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";
const ADAPTIVE_CARD_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";
const ADAPTIVE_CARD_VERSION: &str = "1.4";

/// Heading shown at the top of every notification card
pub const CARD_TITLE: &str = "New TILs";

#[derive(Debug, Clone, Serialize)]
pub struct TeamsMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub content_type: String,
    /// Always serialized, as `null` when absent
    pub content_url: Option<String>,
    pub content: AdaptiveCard,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdaptiveCard {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub version: String,
    pub body: Vec<TextBlock>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
}

impl TextBlock {
    fn new(text: impl Into<String>) -> Self {
        Self {
            block_type: "TextBlock".to_string(),
            text: text.into(),
            weight: None,
            size: None,
            wrap: None,
        }
    }

    fn heading(text: impl Into<String>) -> Self {
        Self {
            weight: Some("Bolder".to_string()),
            size: Some("Large".to_string()),
            ..Self::new(text)
        }
    }

    fn wrapping(text: impl Into<String>) -> Self {
        Self {
            wrap: Some(true),
            ..Self::new(text)
        }
    }
}

/// Build the webhook payload for a markdown list of new notes
pub fn prepare_payload(files_markdown: &str) -> TeamsMessage {
    TeamsMessage {
        message_type: MESSAGE_TYPE.to_string(),
        attachments: vec![Attachment {
            content_type: ADAPTIVE_CARD_CONTENT_TYPE.to_string(),
            content_url: None,
            content: AdaptiveCard {
                schema: ADAPTIVE_CARD_SCHEMA.to_string(),
                card_type: "AdaptiveCard".to_string(),
                version: ADAPTIVE_CARD_VERSION.to_string(),
                body: vec![
                    TextBlock::heading(CARD_TITLE),
                    TextBlock::wrapping(files_markdown),
                ],
            },
        }],
    }
}
