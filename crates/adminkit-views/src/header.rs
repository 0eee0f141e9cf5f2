//! Page header: site title, global navigation, utility navigation.
//!
//! Each block is built into its own fragment, rendered once, and then both
//! spliced into the header inline and registered under its slot, so the
//! outer template can reference the same markup a second time.

use adminkit_html::tags::{a, div, h1, span};
use adminkit_html::{Element, Fragment};
use adminkit_menu::RequestContext;

use crate::namespace::Namespace;
use crate::nav::{NavOptions, TabbedNavigation};
use crate::slots::{Slot, Slots};

/// Header renderer.
#[derive(Debug)]
pub struct Header<'a> {
    site_title: &'a str,
    ctx: &'a RequestContext,
    namespace: &'a Namespace,
}

impl<'a> Header<'a> {
    /// Creates a header for a site title, request context, and namespace.
    #[must_use]
    pub fn new(site_title: &'a str, ctx: &'a RequestContext, namespace: &'a Namespace) -> Self {
        Self {
            site_title,
            ctx,
            namespace,
        }
    }

    /// Renders the header, registering each block into its slot.
    ///
    /// All three slots are registered even when a menu is empty, so an
    /// outer template pass can rely on them existing.
    pub fn render(&self, slots: &mut Slots) -> Element {
        let global = TabbedNavigation::new(self.namespace.global(), self.ctx).render(
            &NavOptions::default()
                .class("header-item")
                .class("tabs")
                .class("nav"),
        );
        let utility = TabbedNavigation::new(self.namespace.utility(), self.ctx).render(
            &NavOptions::with_id("utility_nav")
                .class("header-item")
                .class("tabs"),
        );

        div()
            .id("header")
            .raw(build_block(slots, Slot::SiteTitle, self.render_site_title()))
            .raw(build_block(slots, Slot::GlobalNavigation, global))
            .raw(build_block(slots, Slot::UtilityNavigation, utility))
    }

    fn render_site_title(&self) -> Element {
        h1().id("site_title").child(
            a().attr("href", "/")
                .child(span().class("site-title-text").text(self.site_title)),
        )
    }
}

/// Renders a block once, registers it, and returns the markup for inline
/// splicing.
fn build_block(slots: &mut Slots, slot: Slot, element: Element) -> String {
    let mut fragment = Fragment::new();
    fragment.push(element);
    let markup = fragment.render();
    slots.assign(slot, markup.clone());
    markup
}

#[cfg(test)]
mod tests {
    use adminkit_menu::{MenuBuilder, MenuItem};

    use super::*;

    fn namespace_with_menus() -> Namespace {
        let mut global = MenuBuilder::new();
        global.add_item(MenuItem::new("posts", "Posts").url("/admin/posts"), None);
        let mut utility = MenuBuilder::new();
        utility.add_item(MenuItem::new("logout", "Logout").url("/admin/logout"), None);
        Namespace::new()
            .global_menu(global.build())
            .utility_menu(utility.build())
    }

    #[test]
    fn test_header_contains_all_three_blocks() {
        let ns = namespace_with_menus();
        let ctx = RequestContext::default();
        let mut slots = Slots::new();
        let html = Header::new("Acme", &ctx, &ns).render(&mut slots).render();
        assert!(html.starts_with("<div id=\"header\">"));
        assert!(html.contains("<h1 id=\"site_title\">"));
        assert!(html.contains("class=\"header-item tabs nav\""));
        assert!(html.contains("id=\"utility_nav\""));
    }

    #[test]
    fn test_blocks_are_registered_in_slots() {
        let ns = namespace_with_menus();
        let ctx = RequestContext::default();
        let mut slots = Slots::new();
        let html = Header::new("Acme", &ctx, &ns).render(&mut slots).render();

        let site_title = slots.take(Slot::SiteTitle).unwrap();
        assert!(html.contains(&site_title));
        let global = slots.take(Slot::GlobalNavigation).unwrap();
        assert!(html.contains(&global));
        let utility = slots.take(Slot::UtilityNavigation).unwrap();
        assert!(html.contains(&utility));
    }

    #[test]
    fn test_empty_menus_still_register_nav_slots() {
        let ns = Namespace::new();
        let ctx = RequestContext::default();
        let mut slots = Slots::new();
        Header::new("Acme", &ctx, &ns).render(&mut slots);
        assert!(slots.get(Slot::SiteTitle).is_some());
        assert_eq!(
            slots.get(Slot::GlobalNavigation),
            Some("<ul id=\"tabs\" class=\"header-item tabs nav\"></ul>")
        );
        assert_eq!(
            slots.get(Slot::UtilityNavigation),
            Some("<ul id=\"utility_nav\" class=\"header-item tabs\"></ul>")
        );
    }
}
