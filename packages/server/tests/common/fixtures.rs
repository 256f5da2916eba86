//! Webhook body fixtures.

use serde_json::{json, Value};

/// A text message event as LINE delivers it.
pub fn text_message_event(reply_token: &str, text: &str) -> Value {
    json!({
        "type": "message",
        "mode": "active",
        "timestamp": 1462629479859u64,
        "source": {"type": "user", "userId": "U4af4980629"},
        "webhookEventId": "01FZ74A0TDDPYRVKNK77XKC3ZR",
        "deliveryContext": {"isRedelivery": false},
        "replyToken": reply_token,
        "message": {"id": "444573844083572737", "type": "text", "text": text}
    })
}

/// A text message event received in standby mode, which has no reply token.
pub fn standby_text_message_event(text: &str) -> Value {
    json!({
        "type": "message",
        "mode": "standby",
        "timestamp": 1462629479859u64,
        "source": {"type": "user", "userId": "U4af4980629"},
        "webhookEventId": "01FZ74A0TDDPYRVKNK77XKC3ZS",
        "deliveryContext": {"isRedelivery": false},
        "message": {"id": "444573844083572738", "type": "text", "text": text}
    })
}

/// Serialized webhook body wrapping `events`.
pub fn webhook_body(events: Vec<Value>) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "destination": "Uxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx",
        "events": events
    }))
    .expect("fixture serializes")
}
