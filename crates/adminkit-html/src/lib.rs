//! HTML element tree and declarative markup builder for adminkit.
//!
//! Views compose nested [`Element`]s with consuming builder methods, collect
//! them into isolated [`Fragment`]s, and render the whole tree to a markup
//! string in a single recursive pass.
//!
//! # Example
//!
//! ```
//! use adminkit_html::tags::{div, span};
//!
//! let markup = div()
//!     .id("wrapper")
//!     .class("panel")
//!     .child(span().text("Hello & welcome"))
//!     .render();
//! assert_eq!(
//!     markup,
//!     r#"<div id="wrapper" class="panel"><span>Hello &amp; welcome</span></div>"#
//! );
//! ```

mod element;
mod fragment;
mod render;

pub mod tags;

pub use element::{Element, Node};
pub use fragment::Fragment;
pub use render::escape_html;
