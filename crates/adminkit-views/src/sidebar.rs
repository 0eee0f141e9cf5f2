//! Sidebar renderer.

use adminkit_html::tags::{div, h3};
use adminkit_html::Element;

use crate::namespace::SidebarSection;

/// Renders the sidebar as one panel per section.
///
/// Callers decide whether the sidebar applies at all; this only shapes the
/// sections it is given. Section bodies are pre-rendered markup and are
/// inserted verbatim.
#[must_use]
pub fn render_sidebar(sections: &[SidebarSection]) -> Element {
    let mut sidebar = div().id("sidebar").class("col-lg-3");
    for section in sections {
        sidebar = sidebar.child(
            div()
                .class("sidebar_section")
                .class("panel")
                .child(h3().text(section.title.clone()))
                .child(div().class("panel_contents").raw(section.body.clone())),
        );
    }
    sidebar
}
