//! Tabbed navigation renderer.
//!
//! Walks a menu recursively and emits nested list markup, one list item per
//! visible entry. The item matching the request's active tab (or any
//! ancestor of it) is marked with the `active` class.

use adminkit_html::tags::{a, i, li, span, ul};
use adminkit_html::{Element, Node};
use adminkit_menu::{Menu, MenuItem, RequestContext};

/// Rendering options for a navigation list.
#[derive(Clone, Debug)]
pub struct NavOptions {
    /// Id of the top-level `ul`.
    pub id: String,
    /// Classes applied to the top-level `ul`.
    pub classes: Vec<String>,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            id: "tabs".to_owned(),
            classes: Vec::new(),
        }
    }
}

impl NavOptions {
    /// Options with the given top-level id.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            classes: Vec::new(),
        }
    }

    /// Adds a class to the top-level `ul`.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }
}

/// Recursive menu renderer.
#[derive(Debug)]
pub struct TabbedNavigation<'a> {
    menu: &'a Menu,
    ctx: &'a RequestContext,
}

impl<'a> TabbedNavigation<'a> {
    /// Creates a renderer for a menu and request context.
    #[must_use]
    pub fn new(menu: &'a Menu, ctx: &'a RequestContext) -> Self {
        Self { menu, ctx }
    }

    /// Renders the menu as a navigation list.
    ///
    /// A menu with no visible items still renders its (empty) `ul`, so the
    /// region and its slot are present either way.
    #[must_use]
    pub fn render(&self, options: &NavOptions) -> Element {
        let mut list = ul().id(options.id.clone());
        for class in &options.classes {
            list.add_class(class);
        }
        for item in self.menu.items(self.ctx) {
            list = list.child(self.render_item(item));
        }
        list
    }

    fn render_item(&self, item: &MenuItem) -> Element {
        let mut entry = li().id(item.id.clone());
        if self.menu.is_current(&item.id, self.ctx.active_tab.as_deref()) {
            entry.add_class("active");
        }
        entry = entry.child(self.render_label(item));

        let children = self.menu.children_of(&item.id, self.ctx);
        if !children.is_empty() {
            let mut nested = ul().class("nav-children").class("collapse");
            for child in children {
                nested = nested.child(self.render_item(child));
            }
            entry = entry.child(nested);
        }
        entry
    }

    /// The clickable part of an item: a link when a URL resolves, a plain
    /// label span otherwise.
    fn render_label(&self, item: &MenuItem) -> Node {
        let label = item.label(self.ctx);
        match item.resolved_url(self.ctx) {
            Some(url) => {
                let mut link = a().attr("href", url);
                if let Some(icon) = &item.icon {
                    link = link.child(i().class(icon.clone()));
                }
                link = link
                    .child(span().class("nav-label").text(label))
                    .child(span().class("arrow"));
                link.into()
            }
            None => span().class("nav-label").text(label).into(),
        }
    }
}
