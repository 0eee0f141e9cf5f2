//! Navigation menu model and request context for adminkit.
//!
//! A [`Menu`] is a tree of [`MenuItem`]s stored in a flat vector with
//! parent/children index links, built once at application setup and shared
//! immutably across request handlers. Labels, URLs, and visibility can be
//! static or computed against the per-request [`RequestContext`].
//!
//! # Example
//!
//! ```
//! use adminkit_menu::{MenuBuilder, MenuItem, RequestContext};
//!
//! let mut builder = MenuBuilder::new();
//! let reports = builder.add_item(MenuItem::new("reports", "Reports"), None);
//! builder.add_item(MenuItem::new("sales", "Sales").url("/admin/sales"), Some(reports));
//! let menu = builder.build();
//!
//! let ctx = RequestContext::default();
//! assert_eq!(menu.items(&ctx).len(), 1);
//! assert_eq!(menu.children_of("reports", &ctx)[0].label(&ctx), "Sales");
//! ```

mod context;
mod item;
mod menu;

pub use context::{FlashKind, FlashMessage, RequestContext};
pub use item::{Label, MenuItem, UrlSource};
pub use menu::{Menu, MenuBuilder};
