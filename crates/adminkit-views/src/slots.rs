//! Named layout slots.
//!
//! Each chrome region is rendered once during the page build and registered
//! here under a symbolic name, so an outer template can splice the same
//! fragment without re-rendering it. A slot is populated once and consumed
//! once; `take` removes the content so double consumption is visible.

use std::collections::HashMap;

/// Symbolic name of a layout region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Document title text.
    Title,
    /// Stylesheet link tags.
    Stylesheets,
    /// Favicon link tag.
    Favicon,
    /// Meta tags.
    Meta,
    /// Entire head contents.
    Head,
    /// Space-joined body class list.
    BodyClasses,
    /// Site title block in the header.
    SiteTitle,
    /// Global navigation tabs.
    GlobalNavigation,
    /// Utility (user) navigation tabs.
    UtilityNavigation,
    /// Main content region.
    MainContent,
    /// Trailing script tags.
    Javascript,
}

impl Slot {
    /// Region name used in log output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Stylesheets => "stylesheets",
            Self::Favicon => "favicon",
            Self::Meta => "meta",
            Self::Head => "head",
            Self::BodyClasses => "body_classes",
            Self::SiteTitle => "site_title",
            Self::GlobalNavigation => "global_navigation",
            Self::UtilityNavigation => "utility_navigation",
            Self::MainContent => "main_content",
            Self::Javascript => "javascript",
        }
    }
}

/// Slot assignments populated during a page build.
#[derive(Debug, Default)]
pub struct Slots {
    contents: HashMap<Slot, String>,
}

impl Slots {
    /// Creates an empty slot map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers rendered markup under a slot name.
    ///
    /// Assigning to an occupied slot replaces the previous content and logs
    /// a warning, since each region is expected to be built exactly once.
    pub fn assign(&mut self, slot: Slot, content: impl Into<String>) {
        if let Some(previous) = self.contents.insert(slot, content.into()) {
            tracing::warn!(
                slot = slot.name(),
                previous_len = previous.len(),
                "Slot assigned more than once, replacing previous content"
            );
        }
    }

    /// Returns the content of a slot without consuming it.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.contents.get(&slot).map(String::as_str)
    }

    /// Consumes and returns the content of a slot.
    pub fn take(&mut self, slot: Slot) -> Option<String> {
        self.contents.remove(&slot)
    }

    /// True when no slot has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}
