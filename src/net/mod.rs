//! Webhook message client: outbound payload shapes, reply parsing, and the
//! HTTP call itself.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode is captured as a [`SendError`] at this boundary. The
//! state layer maps any error to the fixed fallback bot message; nothing
//! propagates to the host page. Errors are logged before being swallowed.

pub mod client;
pub mod payload;
pub mod reply;

/// Everything that can go wrong while sending a message to the webhook.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// Transport-level failure (DNS, refused connection, aborted fetch).
    #[error("network error: {0}")]
    Network(String),
    /// The webhook answered with a non-success HTTP status.
    #[error("webhook returned status {0}")]
    Status(u16),
    /// The response body was not JSON or carried no recognizable reply.
    #[error("unrecognized reply shape")]
    MalformedReply,
    /// Session protocol selected but no session id is available. The send
    /// is aborted before any request is made.
    #[error("no active session")]
    MissingSession,
}
