//! Namespace: the programmatic side of the chrome.
//!
//! Configuration files carry static data (titles, asset lists); the
//! namespace carries what needs code — menus, the breadcrumb source, and
//! the per-action sidebar and action-item providers. One namespace is built
//! at startup and shared immutably across request handlers.

use std::fmt;
use std::sync::Arc;

use adminkit_menu::{Menu, RequestContext};
use serde::Serialize;

/// A navigational link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Link text.
    pub title: String,
    /// Link target.
    pub url: String,
}

impl Link {
    /// Creates a link.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// A contextual action button shown in the title bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionItem {
    /// Button label.
    pub label: String,
    /// Button target.
    pub url: String,
}

impl ActionItem {
    /// Creates an action item.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// A sidebar panel: a heading plus pre-rendered body markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarSection {
    /// Panel heading.
    pub title: String,
    /// Panel body, inserted verbatim.
    pub body: String,
}

impl SidebarSection {
    /// Creates a sidebar section.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

type BreadcrumbFn = dyn Fn(&RequestContext) -> Vec<Link> + Send + Sync;
type SectionsFn = dyn Fn(&RequestContext) -> Vec<SidebarSection> + Send + Sync;
type ActionItemsFn = dyn Fn(&RequestContext) -> Vec<ActionItem> + Send + Sync;

/// Where the breadcrumb trail comes from.
#[derive(Clone, Default)]
pub enum BreadcrumbSource {
    /// No trail is rendered.
    #[default]
    None,
    /// A fixed trail; an empty list behaves like `None`.
    Static(Vec<Link>),
    /// Trail computed per request.
    Computed(Arc<BreadcrumbFn>),
}

impl fmt::Debug for BreadcrumbSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Static(links) => f.debug_tuple("Static").field(links).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Programmatic providers for one admin namespace.
#[derive(Clone, Default)]
pub struct Namespace {
    global_menu: Arc<Menu>,
    utility_menu: Arc<Menu>,
    breadcrumbs: BreadcrumbSource,
    sidebar_sections: Option<Arc<SectionsFn>>,
    action_items: Option<Arc<ActionItemsFn>>,
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Namespace")
            .field("global_menu", &self.global_menu)
            .field("utility_menu", &self.utility_menu)
            .field("breadcrumbs", &self.breadcrumbs)
            .finish_non_exhaustive()
    }
}

impl Namespace {
    /// Creates a namespace with empty menus and no providers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the global navigation menu.
    #[must_use]
    pub fn global_menu(mut self, menu: Menu) -> Self {
        self.global_menu = Arc::new(menu);
        self
    }

    /// Sets the utility (user) navigation menu.
    #[must_use]
    pub fn utility_menu(mut self, menu: Menu) -> Self {
        self.utility_menu = Arc::new(menu);
        self
    }

    /// Sets the breadcrumb source.
    #[must_use]
    pub fn breadcrumbs(mut self, source: BreadcrumbSource) -> Self {
        self.breadcrumbs = source;
        self
    }

    /// Sets the sidebar section provider.
    #[must_use]
    pub fn sidebar_sections(
        mut self,
        provider: impl Fn(&RequestContext) -> Vec<SidebarSection> + Send + Sync + 'static,
    ) -> Self {
        self.sidebar_sections = Some(Arc::new(provider));
        self
    }

    /// Sets the action item provider.
    #[must_use]
    pub fn action_items(
        mut self,
        provider: impl Fn(&RequestContext) -> Vec<ActionItem> + Send + Sync + 'static,
    ) -> Self {
        self.action_items = Some(Arc::new(provider));
        self
    }

    /// The global navigation menu.
    #[must_use]
    pub fn global(&self) -> &Menu {
        &self.global_menu
    }

    /// The utility navigation menu.
    #[must_use]
    pub fn utility(&self) -> &Menu {
        &self.utility_menu
    }

    /// Resolves the breadcrumb trail for a request.
    ///
    /// A computed source is evaluated against the context; a static source
    /// is used when non-empty; otherwise `None` (the region is omitted).
    #[must_use]
    pub fn resolve_breadcrumbs(&self, ctx: &RequestContext) -> Option<Vec<Link>> {
        match &self.breadcrumbs {
            BreadcrumbSource::None => None,
            BreadcrumbSource::Static(links) => {
                if links.is_empty() {
                    None
                } else {
                    Some(links.clone())
                }
            }
            BreadcrumbSource::Computed(f) => {
                let links = f(ctx);
                if links.is_empty() { None } else { Some(links) }
            }
        }
    }

    /// Sidebar sections that apply to the current request.
    #[must_use]
    pub fn sections_for(&self, ctx: &RequestContext) -> Vec<SidebarSection> {
        self.sidebar_sections
            .as_ref()
            .map_or_else(Vec::new, |f| f(ctx))
    }

    /// Action items that apply to the current request.
    #[must_use]
    pub fn action_items_for(&self, ctx: &RequestContext) -> Vec<ActionItem> {
        self.action_items.as_ref().map_or_else(Vec::new, |f| f(ctx))
    }
}
