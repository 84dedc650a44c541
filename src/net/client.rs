//! The webhook HTTP call.
//!
//! Client-side (csr): a real fetch via `gloo-net`. Off-browser: a stub
//! returning a network error, since the webhook is only reachable from the
//! page the widget is embedded in.

#![allow(clippy::unused_async)]

use crate::net::payload::OutboundPayload;
use crate::net::reply;
use crate::net::SendError;

/// POST one user message to the webhook and extract the bot reply.
///
/// Single attempt: no retry, no timeout, no backoff. The caller decides how
/// to surface failures.
///
/// # Errors
///
/// [`SendError::Network`] for transport failures, [`SendError::Status`] for
/// non-2xx answers, and [`SendError::MalformedReply`] when the body is not
/// JSON or carries no recognizable reply text.
pub async fn post_message(url: &str, payload: &OutboundPayload) -> Result<String, SendError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::post(url)
            .json(payload)
            .map_err(|e| SendError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(SendError::Status(response.status()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|_| SendError::MalformedReply)?;

        reply::extract_reply(&body).ok_or(SendError::MalformedReply)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, payload);
        Err(SendError::Network("not available outside the browser".to_owned()))
    }
}
