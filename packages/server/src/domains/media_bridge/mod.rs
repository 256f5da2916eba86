//! Media bridge domain.
//!
//! Turns chat messages that link to a post into image or video replies.

pub mod handler;
pub mod link;
pub mod replies;
pub mod webhook;

pub use handler::{
    handle_event, handle_event_with_policy, EventOutcome, FailurePolicy, FAILURE_POLICY,
};
pub use link::find_post_link;
pub use replies::{build_replies, GALLERY_REPLY_LIMIT};
pub use webhook::{router, WebhookState};
