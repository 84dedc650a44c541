//! Outbound request bodies for the two webhook protocols.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde::Serialize;

use crate::config::{PayloadProtocol, WebhookConfig};
use crate::net::SendError;
use crate::session::SessionId;

/// JSON body posted to the webhook. Serializes as one of the two observed
/// wire shapes depending on the configured protocol.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutboundPayload {
    Simple(SimplePayload),
    Session(SessionPayload),
}

/// Plain `{route, message}` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimplePayload {
    pub route: String,
    pub message: String,
}

/// n8n-style `sendMessage` body carrying the session id.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    pub action: String,
    pub session_id: String,
    pub route: String,
    pub chat_input: String,
    pub metadata: PayloadMetadata,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadMetadata {
    pub user_id: String,
}

impl OutboundPayload {
    /// Build the request body for one user message.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::MissingSession`] when the session protocol is
    /// configured but no session id was generated.
    pub fn build(
        webhook: &WebhookConfig,
        session: Option<&SessionId>,
        text: &str,
    ) -> Result<Self, SendError> {
        match webhook.protocol {
            PayloadProtocol::Simple => Ok(Self::Simple(SimplePayload {
                route: webhook.route.clone(),
                message: text.to_owned(),
            })),
            PayloadProtocol::Session => {
                let session = session.ok_or(SendError::MissingSession)?;
                Ok(Self::Session(SessionPayload {
                    action: "sendMessage".to_owned(),
                    session_id: session.as_str().to_owned(),
                    route: webhook.route.clone(),
                    chat_input: text.to_owned(),
                    metadata: PayloadMetadata { user_id: String::new() },
                }))
            }
        }
    }
}
