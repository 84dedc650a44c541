//! Reply extraction from webhook response bodies.
//!
//! Deployed webhooks answer with several shapes: `{reply}`, `{response}`,
//! `{output}`, or a single-element list `[{output}]`. Extraction probes
//! those fields in a fixed order instead of ad hoc per call site.

#[cfg(test)]
#[path = "reply_test.rs"]
mod reply_test;

use serde_json::Value;

/// Bot message shown when a reply cannot be obtained or parsed.
pub const FALLBACK_REPLY: &str =
    "Sorry, there was an error processing your message. Please try again.";

/// Pull the bot reply text out of a webhook response body.
///
/// Probe order: `reply`, then `response`, then `[0].output` for list
/// bodies, then `output`. A missing or blank candidate counts as no reply.
pub fn extract_reply(body: &Value) -> Option<String> {
    let candidate = body
        .get("reply")
        .and_then(Value::as_str)
        .or_else(|| body.get("response").and_then(Value::as_str))
        .or_else(|| {
            body.as_array()
                .and_then(|items| items.first())
                .and_then(|first| first.get("output"))
                .and_then(Value::as_str)
        })
        .or_else(|| body.get("output").and_then(Value::as_str))?;

    if candidate.trim().is_empty() {
        return None;
    }
    Some(candidate.to_owned())
}
