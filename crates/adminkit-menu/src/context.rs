//! Per-request rendering inputs.

/// Flash message severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    /// Informational notice.
    Notice,
    /// Non-fatal warning.
    Alert,
    /// Failure reported to the user.
    Error,
}

impl FlashKind {
    /// Suffix used in the rendered `flash_{kind}` class.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Notice => "notice",
            Self::Alert => "alert",
            Self::Error => "error",
        }
    }
}

/// A flash message carried across a redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    /// Message severity.
    pub kind: FlashKind,
    /// Message text.
    pub text: String,
}

impl FlashMessage {
    /// Create a flash message.
    #[must_use]
    pub fn new(kind: FlashKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Read-only per-request values consumed by rendering.
///
/// Populated by the surrounding request-handling layer before the chrome
/// build runs; rendering never mutates it.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    /// Controller handling the request (e.g., "admin/users").
    pub controller: String,
    /// Action name (e.g., "index", "show").
    pub action: String,
    /// Namespace name (e.g., "admin").
    pub namespace: String,
    /// Display name of the signed-in user, if any.
    pub current_user: Option<String>,
    /// Request user agent string.
    pub user_agent: String,
    /// Id of the navigation entry for the currently displayed section.
    pub active_tab: Option<String>,
    /// Flash messages to display on this page.
    pub flash: Vec<FlashMessage>,
    /// Request-scoped flag suppressing the sidebar.
    pub skip_sidebar: bool,
}
