//! Per-conversation session identifiers for the session-aware webhook
//! protocol.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Opaque identifier correlating the turns of one conversation. Generated
/// once per widget lifetime and attached to every session-protocol request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh random session id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
