//! Per-event handling: find a post link, extract its media, reply.

use line::{Event, MessageContent, MessageEvent, SendMessage};

use crate::kernel::ServerDeps;

use super::link::find_post_link;
use super::replies::build_replies;

/// What the user sees when a linked post yields no media.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the failure and send nothing
    SilentDrop,
    /// Reply with a short text notice
    Notify,
}

/// Failures stay out of the chat so unrecognised links don't draw bot noise.
pub const FAILURE_POLICY: FailurePolicy = FailurePolicy::SilentDrop;

const FAILURE_NOTICE: &str = "Sorry, no photos or video could be found in that post.";

/// How a single webhook event was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Not a text message event
    Ignored,
    /// Text message without a post link
    NoLink,
    /// Message that cannot be replied to (standby mode)
    NoReplyToken,
    /// Media found and sent
    Replied { messages: usize },
    /// Extraction succeeded but there was nothing to send
    NothingToSend,
    /// Extraction failed; tag from `ExtractionError::kind_label`
    ExtractionFailed { kind: &'static str },
    /// The reply call itself failed
    ReplyFailed,
}

/// Handle one event with the default failure policy.
pub async fn handle_event(deps: &ServerDeps, event: &Event) -> EventOutcome {
    handle_event_with_policy(deps, event, FAILURE_POLICY).await
}

pub async fn handle_event_with_policy(
    deps: &ServerDeps,
    event: &Event,
    policy: FailurePolicy,
) -> EventOutcome {
    match event {
        Event::Message(message_event) => handle_message(deps, message_event, policy).await,
        Event::Follow(_)
        | Event::Unfollow(_)
        | Event::Join(_)
        | Event::Leave(_)
        | Event::Postback(_)
        | Event::Unknown => {
            tracing::debug!(event_type = event.kind(), "Ignoring non-message event");
            EventOutcome::Ignored
        }
    }
}

async fn handle_message(
    deps: &ServerDeps,
    event: &MessageEvent,
    policy: FailurePolicy,
) -> EventOutcome {
    let text = match &event.message {
        MessageContent::Text(text) => &text.text,
        MessageContent::Image(_)
        | MessageContent::Video(_)
        | MessageContent::Audio(_)
        | MessageContent::File(_)
        | MessageContent::Location(_)
        | MessageContent::Sticker(_)
        | MessageContent::Unknown => return EventOutcome::Ignored,
    };

    let Some(url) = find_post_link(text) else {
        return EventOutcome::NoLink;
    };

    let Some(reply_token) = event.reply_token() else {
        tracing::debug!(
            url = %url,
            mode = event.mode.as_deref().unwrap_or("unknown"),
            "Skipping post link without reply token"
        );
        return EventOutcome::NoReplyToken;
    };

    let chat_id = event.source.as_ref().map(|s| s.chat_id()).unwrap_or("unknown");
    tracing::info!(chat_id = %chat_id, url = %url, "Post link received");

    let result = match deps.extractor.extract(&url).await {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(
                url = %url,
                error_kind = e.kind_label(),
                error = %e,
                "Media extraction failed"
            );

            if policy == FailurePolicy::Notify {
                send(deps, reply_token, vec![SendMessage::text(FAILURE_NOTICE)]).await;
            }
            return EventOutcome::ExtractionFailed {
                kind: e.kind_label(),
            };
        }
    };

    let messages = build_replies(&result);
    if messages.is_empty() {
        tracing::info!(url = %url, kind = %result.kind(), "No media to send");
        return EventOutcome::NothingToSend;
    }

    let count = messages.len();
    if send(deps, reply_token, messages).await {
        tracing::info!(url = %url, kind = %result.kind(), messages = count, "Replied with media");
        EventOutcome::Replied { messages: count }
    } else {
        EventOutcome::ReplyFailed
    }
}

async fn send(deps: &ServerDeps, reply_token: &str, messages: Vec<SendMessage>) -> bool {
    match deps.messenger.reply(reply_token, messages).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(error = %e, "Failed to send reply");
            false
        }
    }
}
