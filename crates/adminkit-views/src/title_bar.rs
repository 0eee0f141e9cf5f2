//! Title bar renderer.
//!
//! Two-column layout below the header: the left column holds the page title
//! heading and an optional breadcrumb trail, the right column holds the
//! contextual action buttons for the current page.

use adminkit_html::tags::{a, div, h2, li, ol, span};
use adminkit_html::Element;
use adminkit_menu::RequestContext;

use crate::namespace::{ActionItem, Link, Namespace};

/// Title bar renderer.
#[derive(Debug)]
pub struct TitleBar<'a> {
    title: &'a str,
    ctx: &'a RequestContext,
    namespace: &'a Namespace,
}

impl<'a> TitleBar<'a> {
    /// Creates a title bar for a page title, request context, and namespace.
    #[must_use]
    pub fn new(title: &'a str, ctx: &'a RequestContext, namespace: &'a Namespace) -> Self {
        Self {
            title,
            ctx,
            namespace,
        }
    }

    /// Renders the title bar.
    #[must_use]
    pub fn render(&self) -> Element {
        div()
            .id("title_bar")
            .child(
                div()
                    .class("row")
                    .child(self.render_left_column())
                    .child(self.render_right_column()),
            )
    }

    /// Title heading first, breadcrumb trail after it.
    fn render_left_column(&self) -> Element {
        let mut column = div()
            .class("col-lg-9")
            .class("titlebar-left")
            .child(h2().id("page_title").text(self.title));
        if let Some(trail) = self.namespace.resolve_breadcrumbs(self.ctx) {
            column = column.child(render_breadcrumb(&trail));
        }
        column
    }

    fn render_right_column(&self) -> Element {
        let mut column = div().class("col-lg-3").class("titlebar-right");
        let items = self.namespace.action_items_for(self.ctx);
        if !items.is_empty() {
            let mut actions = div().class("action_items");
            for item in items {
                actions = actions.child(render_action_item(&item));
            }
            column = column.child(actions);
        }
        column
    }
}

/// One `li` per trail entry; no separator glyph between entries.
fn render_breadcrumb(trail: &[Link]) -> Element {
    let mut list = ol().class("breadcrumb");
    for link in trail {
        list = list.child(
            li().child(a().attr("href", link.url.clone()).text(link.title.clone())),
        );
    }
    list
}

fn render_action_item(item: &ActionItem) -> Element {
    span().class("action_item").child(
        a().class("btn")
            .class("btn-default")
            .attr("href", item.url.clone())
            .text(item.label.clone()),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::namespace::BreadcrumbSource;

    use super::*;

    fn ctx() -> RequestContext {
        RequestContext {
            controller: "admin/posts".to_owned(),
            action: "show".to_owned(),
            ..RequestContext::default()
        }
    }

    #[test]
    fn test_title_heading_is_rendered() {
        let ns = Namespace::new();
        let html = TitleBar::new("Edit Post", &ctx(), &ns).render().render();
        assert!(html.contains("<h2 id=\"page_title\">Edit Post</h2>"));
    }

    #[test]
    fn test_title_is_escaped() {
        let ns = Namespace::new();
        let html = TitleBar::new("Tom & Jerry", &ctx(), &ns).render().render();
        assert!(html.contains("Tom &amp; Jerry"));
    }

    #[test]
    fn test_no_breadcrumb_without_source() {
        let ns = Namespace::new();
        let html = TitleBar::new("Posts", &ctx(), &ns).render().render();
        assert!(!html.contains("breadcrumb"));
    }

    #[test]
    fn test_static_breadcrumb_renders_trail() {
        let ns = Namespace::new().breadcrumbs(BreadcrumbSource::Static(vec![
            Link::new("Home", "/admin"),
            Link::new("Posts", "/admin/posts"),
        ]));
        let html = TitleBar::new("Edit", &ctx(), &ns).render().render();
        assert!(html.contains(
            "<ol class=\"breadcrumb\"><li><a href=\"/admin\">Home</a></li>\
             <li><a href=\"/admin/posts\">Posts</a></li></ol>"
        ));
    }

    #[test]
    fn test_title_heading_precedes_breadcrumb() {
        let ns = Namespace::new()
            .breadcrumbs(BreadcrumbSource::Static(vec![Link::new("Home", "/admin")]));
        let html = TitleBar::new("Edit", &ctx(), &ns).render().render();
        let heading = html.find("<h2 id=\"page_title\">").unwrap();
        let breadcrumb = html.find("<ol class=\"breadcrumb\">").unwrap();
        assert!(heading < breadcrumb);
    }

    #[test]
    fn test_computed_breadcrumb_matches_callback_output() {
        let ns = Namespace::new().breadcrumbs(BreadcrumbSource::Computed(Arc::new(|ctx| {
            vec![Link::new(format!("{} root", ctx.controller), "/root")]
        })));
        let html = TitleBar::new("Edit", &ctx(), &ns).render().render();
        assert!(html.contains("<a href=\"/root\">admin/posts root</a>"));
    }

    #[test]
    fn test_action_items_render_as_buttons() {
        let ns = Namespace::new().action_items(|_| {
            vec![
                ActionItem::new("New Post", "/admin/posts/new"),
                ActionItem::new("Delete", "/admin/posts/1/delete"),
            ]
        });
        let html = TitleBar::new("Posts", &ctx(), &ns).render().render();
        assert_eq!(html.matches("class=\"action_item\"").count(), 2);
        assert!(html.contains(
            "<a class=\"btn btn-default\" href=\"/admin/posts/new\">New Post</a>"
        ));
    }

    #[test]
    fn test_no_action_items_container_when_empty() {
        let ns = Namespace::new();
        let html = TitleBar::new("Posts", &ctx(), &ns).render().render();
        assert!(!html.contains("action_items"));
    }
}
