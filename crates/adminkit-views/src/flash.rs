//! Flash message rendering.

use adminkit_html::tags::div;
use adminkit_html::Element;
use adminkit_menu::FlashMessage;

/// Renders flash messages as one `div.flash.flash_{kind}` per message,
/// wrapped in a `div.flashes` container. The container is emitted even when
/// there are no messages, keeping the region stable for styling.
#[must_use]
pub fn render_flashes(messages: &[FlashMessage]) -> Element {
    let mut container = div().class("flashes");
    for message in messages {
        container = container.child(
            div()
                .class("flash")
                .class(format!("flash_{}", message.kind.as_str()))
                .text(message.text.clone()),
        );
    }
    container
}
