//! Page footer.

use adminkit_html::tags::{div, p};
use adminkit_html::Element;

/// Renders the footer region.
///
/// The container is always present so the layout height stays stable; the
/// paragraph is only emitted when footer text is configured.
#[must_use]
pub fn render_footer(text: Option<&str>) -> Element {
    let mut footer = div().id("footer");
    if let Some(text) = text {
        footer = footer.child(p().text(text));
    }
    footer
}
