#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use crate::net::reply::FALLBACK_REPLY;
use crate::net::SendError;

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageAuthor {
    User,
    Bot,
}

/// A single chat message. The list is append-only; insertion order is
/// display order.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub author: MessageAuthor,
    pub content: String,
    pub timestamp: f64,
}

/// State for one widget instance: open/closed, in-flight flag, and the
/// conversation so far.
#[derive(Clone, Debug, Default)]
pub struct WidgetState {
    pub is_open: bool,
    pub is_loading: bool,
    pub messages: Vec<ChatMessage>,
}

impl WidgetState {
    /// Open or close the panel. The first open of an empty conversation
    /// seeds a single bot welcome message; later opens never duplicate it.
    pub fn toggle_open(&mut self, welcome_text: &str) {
        self.is_open = !self.is_open;
        if self.is_open && self.messages.is_empty() {
            self.push_bot(welcome_text);
        }
    }

    /// Force the panel closed.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Start sending a user message.
    ///
    /// Returns the trimmed text to put on the wire, or `None` (with no state
    /// change) for blank input or while a send is already in flight. On
    /// success the user message is appended and the loading flag is set.
    pub fn begin_send(&mut self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.is_loading {
            return None;
        }

        self.messages.push(ChatMessage {
            author: MessageAuthor::User,
            content: trimmed.to_owned(),
            timestamp: now_ms(),
        });
        self.is_loading = true;
        Some(trimmed.to_owned())
    }

    /// Record the outcome of a send: the bot reply on success, the fixed
    /// fallback message on failure. Always clears the loading flag.
    pub fn finish_send(&mut self, outcome: Result<String, SendError>) {
        let content = outcome.unwrap_or_else(|_| FALLBACK_REPLY.to_owned());
        self.push_bot(&content);
        self.is_loading = false;
    }

    fn push_bot(&mut self, content: &str) {
        self.messages.push(ChatMessage {
            author: MessageAuthor::Bot,
            content: content.to_owned(),
            timestamp: now_ms(),
        });
    }
}

/// Milliseconds since the epoch, or 0.0 outside a browser.
fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}
