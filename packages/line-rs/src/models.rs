use serde::{Deserialize, Serialize};

/// Webhook request body.
/// See: https://developers.line.biz/en/reference/messaging-api/#request-body
#[derive(Debug, Deserialize)]
pub struct WebhookRequest {
    #[serde(default)]
    pub destination: Option<String>,
    pub events: Vec<Event>,
}

/// Webhook event. Types this client does not model land in `Unknown`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    Message(MessageEvent),
    Follow(ReplyableEvent),
    Unfollow(SourceEvent),
    Join(ReplyableEvent),
    Leave(SourceEvent),
    Postback(PostbackEvent),
    #[serde(other)]
    Unknown,
}

impl Event {
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Message(_) => "message",
            Event::Follow(_) => "follow",
            Event::Unfollow(_) => "unfollow",
            Event::Join(_) => "join",
            Event::Leave(_) => "leave",
            Event::Postback(_) => "postback",
            Event::Unknown => "unknown",
        }
    }
}

/// Events delivered in standby mode carry no reply token.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    #[serde(default)]
    pub reply_token: Option<String>,
    pub message: MessageContent,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub source: Option<Source>,
    #[serde(default)]
    pub timestamp: i64,
}

impl MessageEvent {
    /// Reply token, if this event can be replied to.
    pub fn reply_token(&self) -> Option<&str> {
        self.reply_token.as_deref().filter(|token| !token.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyableEvent {
    #[serde(default)]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub source: Option<Source>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceEvent {
    #[serde(default)]
    pub source: Option<Source>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostbackEvent {
    #[serde(default)]
    pub reply_token: Option<String>,
    pub postback: Postback,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Postback {
    pub data: String,
}

/// Where an event came from.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Source {
    #[serde(rename_all = "camelCase")]
    User { user_id: String },
    #[serde(rename_all = "camelCase")]
    Group {
        group_id: String,
        #[serde(default)]
        user_id: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Room {
        room_id: String,
        #[serde(default)]
        user_id: Option<String>,
    },
}

impl Source {
    /// Chat identifier (user, group or room id).
    pub fn chat_id(&self) -> &str {
        match self {
            Source::User { user_id } => user_id,
            Source::Group { group_id, .. } => group_id,
            Source::Room { room_id, .. } => room_id,
        }
    }
}

/// Message payload of a message event.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageContent {
    Text(TextMessage),
    Image(MediaMessage),
    Video(MediaMessage),
    Audio(MediaMessage),
    File(MediaMessage),
    Location(LocationMessage),
    Sticker(StickerMessage),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextMessage {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaMessage {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationMessage {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerMessage {
    pub id: String,
    pub package_id: String,
    pub sticker_id: String,
}

/// Outgoing message for reply/push calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SendMessage {
    Text {
        text: String,
    },
    Image {
        #[serde(rename = "originalContentUrl")]
        original_content_url: String,
        #[serde(rename = "previewImageUrl")]
        preview_image_url: String,
    },
    Video {
        #[serde(rename = "originalContentUrl")]
        original_content_url: String,
        #[serde(rename = "previewImageUrl")]
        preview_image_url: String,
    },
}

impl SendMessage {
    pub fn text(text: impl Into<String>) -> Self {
        SendMessage::Text { text: text.into() }
    }

    pub fn image(original_url: impl Into<String>, preview_url: impl Into<String>) -> Self {
        SendMessage::Image {
            original_content_url: original_url.into(),
            preview_image_url: preview_url.into(),
        }
    }

    pub fn video(video_url: impl Into<String>, preview_url: impl Into<String>) -> Self {
        SendMessage::Video {
            original_content_url: video_url.into(),
            preview_image_url: preview_url.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReplyRequest<'a> {
    pub reply_token: &'a str,
    pub messages: &'a [SendMessage],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_message_event() {
        let body = r#"{
            "destination": "Uxxxxxxxx",
            "events": [{
                "type": "message",
                "mode": "active",
                "timestamp": 1462629479859,
                "source": {"type": "user", "userId": "U4af4980629"},
                "webhookEventId": "01FZ74A0TDDPYRVKNK77XKC3ZR",
                "deliveryContext": {"isRedelivery": false},
                "replyToken": "nHuyWiB7yP5Zw52FIkcQobQuGDXCTA",
                "message": {"id": "444573844083572737", "type": "text", "text": "hello"}
            }]
        }"#;

        let request: WebhookRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.events.len(), 1);

        match &request.events[0] {
            Event::Message(event) => {
                assert_eq!(event.reply_token(), Some("nHuyWiB7yP5Zw52FIkcQobQuGDXCTA"));
                assert_eq!(event.mode.as_deref(), Some("active"));
                assert_eq!(event.source.as_ref().unwrap().chat_id(), "U4af4980629");
                match &event.message {
                    MessageContent::Text(text) => assert_eq!(text.text, "hello"),
                    other => panic!("expected text, got {:?}", other),
                }
            }
            other => panic!("expected message event, got {:?}", other),
        }
    }

    #[test]
    fn test_unmodelled_types_are_unknown() {
        let body = r#"{"events": [
            {"type": "beacon", "replyToken": "r", "beacon": {"hwid": "d41d8cd98f", "type": "enter"}},
            {"type": "message", "replyToken": "r2", "message": {"id": "1", "type": "imagemap"}}
        ]}"#;

        let request: WebhookRequest = serde_json::from_str(body).unwrap();
        assert!(matches!(request.events[0], Event::Unknown));
        match &request.events[1] {
            Event::Message(event) => assert!(matches!(event.message, MessageContent::Unknown)),
            other => panic!("expected message event, got {:?}", other),
        }
    }

    #[test]
    fn test_standby_events_have_no_reply_token() {
        let body = r#"{"events": [
            {"type": "message", "mode": "standby", "timestamp": 1, "source": {"type": "user", "userId": "U1"},
             "message": {"id": "1", "type": "text", "text": "hello"}},
            {"type": "follow", "mode": "standby", "source": {"type": "user", "userId": "U1"}},
            {"type": "message", "replyToken": "", "message": {"id": "2", "type": "text", "text": "hi"}}
        ]}"#;

        let request: WebhookRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.events.len(), 3);
        match &request.events[0] {
            Event::Message(event) => {
                assert_eq!(event.reply_token(), None);
                assert_eq!(event.mode.as_deref(), Some("standby"));
            }
            other => panic!("expected message event, got {:?}", other),
        }
        match &request.events[1] {
            Event::Follow(event) => assert!(event.reply_token.is_none()),
            other => panic!("expected follow event, got {:?}", other),
        }
        match &request.events[2] {
            Event::Message(event) => assert_eq!(event.reply_token(), None),
            other => panic!("expected message event, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_sticker_and_group_source() {
        let body = r#"{"events": [{
            "type": "message",
            "replyToken": "r",
            "source": {"type": "group", "groupId": "Ca56f94637c", "userId": "U4af4980629"},
            "message": {"id": "1", "type": "sticker", "packageId": "1", "stickerId": "1"}
        }]}"#;

        let request: WebhookRequest = serde_json::from_str(body).unwrap();
        match &request.events[0] {
            Event::Message(event) => {
                assert_eq!(event.source.as_ref().unwrap().chat_id(), "Ca56f94637c");
                assert!(matches!(event.message, MessageContent::Sticker(_)));
            }
            other => panic!("expected message event, got {:?}", other),
        }
    }

    #[test]
    fn test_send_message_wire_format() {
        let image = serde_json::to_value(SendMessage::image("https://a/full.jpg", "https://a/full.jpg")).unwrap();
        assert_eq!(
            image,
            serde_json::json!({
                "type": "image",
                "originalContentUrl": "https://a/full.jpg",
                "previewImageUrl": "https://a/full.jpg"
            })
        );

        let video = serde_json::to_value(SendMessage::video("https://a/v.mp4", "https://a/t.jpg")).unwrap();
        assert_eq!(video["type"], "video");
        assert_eq!(video["originalContentUrl"], "https://a/v.mp4");
        assert_eq!(video["previewImageUrl"], "https://a/t.jpg");
    }

    #[test]
    fn test_reply_request_wire_format() {
        let messages = vec![SendMessage::text("hi")];
        let request = ReplyRequest {
            reply_token: "token",
            messages: &messages,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["replyToken"], "token");
        assert_eq!(value["messages"][0]["text"], "hi");
    }
}
