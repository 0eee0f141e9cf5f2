//! Shorthand constructors for common tags.
//!
//! Keeps view code close to the markup it produces:
//!
//! ```
//! use adminkit_html::tags::{li, span};
//!
//! let item = li().child(span().class("nav-label").text("Dashboard"));
//! assert_eq!(
//!     item.render(),
//!     r#"<li><span class="nav-label">Dashboard</span></li>"#
//! );
//! ```

use crate::Element;

macro_rules! tag_fns {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("`<", stringify!($name), ">` element.")]
            #[must_use]
            pub fn $name() -> Element {
                Element::new(stringify!($name))
            }
        )*
    };
}

tag_fns!(a, div, h1, h2, h3, i, li, link, meta, ol, p, script, span, title, ul);
