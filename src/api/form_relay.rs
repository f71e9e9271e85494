use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::ContactConfig;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Body posted to the relay: the visitor's fields plus the site's access key.
#[derive(Debug, Serialize)]
struct RelayPayload<'a> {
    access_key: &'a str,
    #[serde(flatten)]
    fields: &'a ContactMessage,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RelayReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl RelayReply {
    pub fn into_result(self) -> Result<(), RelayError> {
        if self.success {
            Ok(())
        } else {
            Err(RelayError::Rejected(
                self.message
                    .unwrap_or_else(|| "relay reported failure".to_string()),
            ))
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("could not encode the submission: {0}")]
    Encode(String),
    #[error("could not reach the form relay: {0}")]
    Transport(String),
    #[error("form relay rejected the submission: {0}")]
    Rejected(String),
}

impl RelayError {
    /// Body serialization surfaces as a builder error from `send`; everything
    /// else happened on the wire.
    fn from_request(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Encode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Forwards contact form submissions to a third-party form relay.
pub struct FormRelayClient {
    pub contact: ContactConfig,
}

impl FormRelayClient {
    pub fn new(contact: ContactConfig) -> Self {
        Self { contact }
    }

    fn payload<'a>(&'a self, message: &'a ContactMessage) -> RelayPayload<'a> {
        RelayPayload {
            access_key: &self.contact.access_key,
            fields: message,
        }
    }

    pub async fn submit(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let response = HTTP_CLIENT
            .post(&self.contact.endpoint)
            .header("Accept", "application/json")
            .json(&self.payload(message))
            .send()
            .await
            .map_err(RelayError::from_request)?;
        let reply: RelayReply = response
            .json()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;
        reply.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> FormRelayClient {
        FormRelayClient::new(ContactConfig {
            access_key: "key-123".to_string(),
            ..ContactConfig::default()
        })
    }

    #[test]
    fn payload_carries_fields_and_access_key() {
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        };

        let client = client();
        let payload = serde_json::to_value(client.payload(&message)).unwrap();

        assert_eq!(
            payload,
            serde_json::json!({
                "access_key": "key-123",
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello there",
            })
        );
    }

    #[test]
    fn successful_reply_is_ok() {
        let reply: RelayReply =
            serde_json::from_str(r#"{ "success": true, "message": "Email sent successfully!" }"#)
                .unwrap();
        assert_eq!(reply.into_result(), Ok(()));
    }

    #[test]
    fn failed_reply_carries_relay_message() {
        let reply: RelayReply =
            serde_json::from_str(r#"{ "success": false, "message": "Invalid access key" }"#)
                .unwrap();
        assert_eq!(
            reply.into_result(),
            Err(RelayError::Rejected("Invalid access key".to_string()))
        );
    }

    #[test]
    fn encode_and_transport_failures_read_differently() {
        let encode = RelayError::Encode("key must be a string".to_string());
        let transport = RelayError::Transport("connection refused".to_string());
        assert_eq!(
            encode.to_string(),
            "could not encode the submission: key must be a string"
        );
        assert_eq!(
            transport.to_string(),
            "could not reach the form relay: connection refused"
        );
    }

    #[test]
    fn reply_without_success_flag_is_a_failure() {
        let reply: RelayReply = serde_json::from_str("{}").unwrap();
        assert!(matches!(reply.into_result(), Err(RelayError::Rejected(_))));
    }
}
