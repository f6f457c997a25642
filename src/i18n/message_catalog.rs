use std::collections::HashMap;

/// Message ids and their default text
pub mod ids {
    pub const SCROLL_TO_LATEST: (&str, &str) =
        ("postlist.toast.scrollToLatest", "Jump to new messages");
    pub const NEW_REPLIES: (&str, &str) = ("rhs_thread.toast.newReplies", "New Replies");
    pub const GO_BACK: (&str, &str) = ("rhs_header.back.icon", "Go back");
    pub const EXPAND_SIDEBAR: (&str, &str) = ("rhs_header.expandSidebar.icon", "Expand sidebar");
    pub const COLLAPSE_SIDEBAR: (&str, &str) =
        ("rhs_header.collapseSidebar.icon", "Collapse sidebar");
    pub const CLOSE_SIDEBAR: (&str, &str) = ("rhs_header.closeSidebar.icon", "Close");
}

#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    overrides: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Text for `id`, falling back to `default_message`
    ///
    /// Blank overrides are ignored.
    pub fn format_message(&self, id: &str, default_message: &str) -> String {
        match self.overrides.get(id) {
            Some(text) if !text.trim().is_empty() => text.clone(),
            _ => default_message.to_string(),
        }
    }

    /// Shorthand for the `(id, default)` pairs in [`ids`]
    pub fn text(&self, message: (&str, &str)) -> String {
        self.format_message(message.0, message.1)
    }
}
