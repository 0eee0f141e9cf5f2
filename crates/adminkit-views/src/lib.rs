//! Dashboard chrome composition: page assembler, navigation, title bar.
//!
//! Ties the other crates together: configuration and a [`Namespace`] are
//! built once at startup, then [`PageAssembler::build`] runs once per
//! request, producing the full document markup plus a [`Slots`] map of
//! named regions for an outer template pass.
//!
//! ```
//! use adminkit_config::Config;
//! use adminkit_menu::{MenuBuilder, MenuItem, RequestContext};
//! use adminkit_views::{Namespace, Page, PageAssembler};
//!
//! let config = Config::default();
//! let mut menu = MenuBuilder::new();
//! menu.add_item(MenuItem::new("dashboard", "Dashboard").url("/admin"), None);
//! let namespace = Namespace::new().global_menu(menu.build());
//!
//! let ctx = RequestContext::default();
//! let page = Page::new("Dashboard").content("<p>Welcome.</p>");
//! let rendered = PageAssembler::new(&config, &namespace).build(&page, &ctx);
//! assert!(rendered.html.contains("<p>Welcome.</p>"));
//! ```

mod flash;
mod footer;
mod header;
mod namespace;
mod nav;
mod page;
mod sidebar;
mod slots;
mod title_bar;

pub use adminkit_menu::{FlashKind, FlashMessage, RequestContext};

pub use crate::flash::render_flashes;
pub use crate::footer::render_footer;
pub use crate::header::Header;
pub use crate::namespace::{ActionItem, BreadcrumbSource, Link, Namespace, SidebarSection};
pub use crate::nav::{NavOptions, TabbedNavigation};
pub use crate::page::{Page, PageAssembler, RenderedPage};
pub use crate::sidebar::render_sidebar;
pub use crate::slots::{Slot, Slots};
pub use crate::title_bar::TitleBar;
