//! Menu item with static or computed label, URL, and visibility.

use std::fmt;
use std::sync::Arc;

use crate::context::RequestContext;

/// Default priority for items that don't set one.
const DEFAULT_PRIORITY: i32 = 10;

type Predicate = Arc<dyn Fn(&RequestContext) -> bool + Send + Sync>;

/// Item label: a fixed string or a value computed per request.
#[derive(Clone)]
pub enum Label {
    /// Fixed display text.
    Static(String),
    /// Computed from the request context (e.g., the current user's name).
    Dynamic(Arc<dyn Fn(&RequestContext) -> String + Send + Sync>),
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(s) => f.debug_tuple("Static").field(s).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Link target: a fixed URL or one resolved per request.
///
/// A dynamic source may resolve to `None`, in which case the item renders
/// as a plain label instead of a hyperlink.
#[derive(Clone)]
pub enum UrlSource {
    /// Fixed URL.
    Static(String),
    /// Resolved from the request context.
    Dynamic(Arc<dyn Fn(&RequestContext) -> Option<String> + Send + Sync>),
}

impl fmt::Debug for UrlSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(s) => f.debug_tuple("Static").field(s).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// A single navigation entry.
#[derive(Clone)]
pub struct MenuItem {
    /// Stable identifier, also used as the rendered element id and matched
    /// against the active-tab indicator.
    pub id: String,
    label: Label,
    url: Option<UrlSource>,
    /// Sort priority; lower renders first, insertion order breaks ties.
    pub priority: i32,
    /// Icon class rendered inside the item link, if any.
    pub icon: Option<String>,
    display_if: Option<Predicate>,
}

impl MenuItem {
    /// Create an item with a static label.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: Label::Static(label.into()),
            url: None,
            priority: DEFAULT_PRIORITY,
            icon: None,
            display_if: None,
        }
    }

    /// Create an item whose label is computed per request.
    #[must_use]
    pub fn with_label(
        id: impl Into<String>,
        label: impl Fn(&RequestContext) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: Label::Dynamic(Arc::new(label)),
            url: None,
            priority: DEFAULT_PRIORITY,
            icon: None,
            display_if: None,
        }
    }

    /// Set a fixed URL.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(UrlSource::Static(url.into()));
        self
    }

    /// Set a URL resolved per request. Returning `None` renders the item as
    /// a plain label.
    #[must_use]
    pub fn url_with(
        mut self,
        url: impl Fn(&RequestContext) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.url = Some(UrlSource::Dynamic(Arc::new(url)));
        self
    }

    /// Set the sort priority (default 10, lower first).
    #[must_use]
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the icon class.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Restrict display to requests where the predicate holds.
    #[must_use]
    pub fn display_if(
        mut self,
        predicate: impl Fn(&RequestContext) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.display_if = Some(Arc::new(predicate));
        self
    }

    /// Resolve the display label for this request.
    #[must_use]
    pub fn label(&self, ctx: &RequestContext) -> String {
        match &self.label {
            Label::Static(s) => s.clone(),
            Label::Dynamic(f) => f(ctx),
        }
    }

    /// Resolve the link URL for this request, if any.
    #[must_use]
    pub fn resolved_url(&self, ctx: &RequestContext) -> Option<String> {
        match self.url.as_ref()? {
            UrlSource::Static(s) => Some(s.clone()),
            UrlSource::Dynamic(f) => f(ctx),
        }
    }

    /// True when the item should be displayed for this request.
    #[must_use]
    pub fn visible(&self, ctx: &RequestContext) -> bool {
        self.display_if.as_ref().is_none_or(|p| p(ctx))
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("priority", &self.priority)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_label_resolves_unchanged() {
        let item = MenuItem::new("dashboard", "Dashboard");
        assert_eq!(item.label(&RequestContext::default()), "Dashboard");
    }

    #[test]
    fn test_dynamic_label_reads_context() {
        let item = MenuItem::with_label("user", |ctx| {
            ctx.current_user.clone().unwrap_or_else(|| "Guest".to_owned())
        });
        let ctx = RequestContext {
            current_user: Some("admin@example.com".to_owned()),
            ..Default::default()
        };
        assert_eq!(item.label(&ctx), "admin@example.com");
        assert_eq!(item.label(&RequestContext::default()), "Guest");
    }

    #[test]
    fn test_no_url_resolves_none() {
        let item = MenuItem::new("group", "Group");
        assert_eq!(item.resolved_url(&RequestContext::default()), None);
    }

    #[test]
    fn test_static_url_resolves() {
        let item = MenuItem::new("users", "Users").url("/admin/users");
        assert_eq!(
            item.resolved_url(&RequestContext::default()),
            Some("/admin/users".to_owned())
        );
    }

    #[test]
    fn test_dynamic_url_may_resolve_to_none() {
        let item = MenuItem::new("profile", "Profile")
            .url_with(|ctx| ctx.current_user.as_ref().map(|u| format!("/admin/users/{u}")));
        assert_eq!(item.resolved_url(&RequestContext::default()), None);

        let ctx = RequestContext {
            current_user: Some("42".to_owned()),
            ..Default::default()
        };
        assert_eq!(item.resolved_url(&ctx), Some("/admin/users/42".to_owned()));
    }

    #[test]
    fn test_visible_defaults_to_true() {
        assert!(MenuItem::new("x", "X").visible(&RequestContext::default()));
    }

    #[test]
    fn test_display_if_controls_visibility() {
        let item = MenuItem::new("secret", "Secret").display_if(|ctx| ctx.current_user.is_some());
        assert!(!item.visible(&RequestContext::default()));

        let ctx = RequestContext {
            current_user: Some("admin".to_owned()),
            ..Default::default()
        };
        assert!(item.visible(&ctx));
    }

    #[test]
    fn test_default_priority() {
        assert_eq!(MenuItem::new("x", "X").priority, 10);
        assert_eq!(MenuItem::new("x", "X").priority(1).priority, 1);
    }
}
