// https://developers.line.biz/en/reference/messaging-api/

use std::time::Duration;

pub mod error;
pub mod models;
pub mod signature;

use reqwest::Client;

pub use crate::error::LineError;
pub use crate::models::{Event, MessageContent, MessageEvent, SendMessage, Source, WebhookRequest};
use crate::models::ReplyRequest;
pub use crate::signature::{sign, verify_signature, SIGNATURE_HEADER};

/// Most messages LINE accepts in a single reply call.
pub const MAX_REPLY_MESSAGES: usize = 5;

const DEFAULT_API_BASE: &str = "https://api.line.me";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct LineOptions {
    pub channel_secret: String,
    pub channel_access_token: String,
}

impl LineOptions {
    pub fn validate(&self) -> Result<(), LineError> {
        if self.channel_secret.trim().is_empty() {
            return Err(LineError::InvalidConfig("channel secret is empty"));
        }
        if self.channel_access_token.trim().is_empty() {
            return Err(LineError::InvalidConfig("channel access token is empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LineService {
    options: LineOptions,
    client: Client,
    api_base: String,
}

impl LineService {
    pub fn new(options: LineOptions) -> Result<Self, LineError> {
        options.validate()?;

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            options,
            client,
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }

    /// Point API calls at another host (e.g. a local stub).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Verify the signature of a webhook body and decode its events.
    ///
    /// A missing header counts as an invalid signature.
    pub fn parse_request(
        &self,
        signature: Option<&str>,
        body: &[u8],
    ) -> Result<Vec<Event>, LineError> {
        let signature = signature.ok_or(LineError::InvalidSignature)?;
        if !verify_signature(&self.options.channel_secret, body, signature) {
            return Err(LineError::InvalidSignature);
        }

        let request: WebhookRequest = serde_json::from_slice(body)?;
        Ok(request.events)
    }

    /// Reply to an event with up to [`MAX_REPLY_MESSAGES`] messages.
    pub async fn reply_message(
        &self,
        reply_token: &str,
        messages: &[SendMessage],
    ) -> Result<(), LineError> {
        if messages.is_empty() {
            return Err(LineError::InvalidReply("no messages to send".to_string()));
        }
        if messages.len() > MAX_REPLY_MESSAGES {
            return Err(LineError::InvalidReply(format!(
                "{} messages exceeds the limit of {}",
                messages.len(),
                MAX_REPLY_MESSAGES
            )));
        }

        let url = format!("{}/v2/bot/message/reply", self.api_base);
        let body = ReplyRequest {
            reply_token,
            messages,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.options.channel_access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %error_body, "LINE reply rejected");
            return Err(LineError::Api {
                status: status.as_u16(),
                body: error_body,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> LineService {
        LineService::new(LineOptions {
            channel_secret: "secret".to_string(),
            channel_access_token: "token".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let result = LineService::new(LineOptions {
            channel_secret: "".to_string(),
            channel_access_token: "token".to_string(),
        });
        assert!(matches!(result, Err(LineError::InvalidConfig(_))));

        let result = LineService::new(LineOptions {
            channel_secret: "secret".to_string(),
            channel_access_token: "  ".to_string(),
        });
        assert!(matches!(result, Err(LineError::InvalidConfig(_))));
    }

    #[test]
    fn test_parse_request_checks_signature_first() {
        let line = service();
        let body = b"not json";

        assert!(matches!(
            line.parse_request(None, body),
            Err(LineError::InvalidSignature)
        ));
        assert!(matches!(
            line.parse_request(Some("bogus"), body),
            Err(LineError::InvalidSignature)
        ));

        let signature = sign("secret", body);
        assert!(matches!(
            line.parse_request(Some(&signature), body),
            Err(LineError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_request_returns_events() {
        let line = service();
        let body = br#"{"destination":"U1","events":[{"type":"follow","replyToken":"r"}]}"#;
        let signature = sign("secret", body);

        let events = line.parse_request(Some(&signature), body).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind(), "follow");
    }

    #[tokio::test]
    async fn test_reply_limits_checked_before_sending() {
        // Unroutable base: any network attempt would surface as LineError::Http
        let line = service().with_api_base("http://127.0.0.1:9");

        let result = line.reply_message("r", &[]).await;
        assert!(matches!(result, Err(LineError::InvalidReply(_))));

        let too_many = vec![SendMessage::text("x"); MAX_REPLY_MESSAGES + 1];
        let result = line.reply_message("r", &too_many).await;
        assert!(matches!(result, Err(LineError::InvalidReply(_))));
    }
}
