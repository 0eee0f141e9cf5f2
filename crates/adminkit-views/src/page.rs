//! Page assembler.
//!
//! Runs once per request, synchronously, and builds the full document in
//! fixed order: head, body classes, then the body regions (browser notice,
//! header, title bar, flashes, main content with optional sidebar, footer,
//! trailing scripts). Each region is rendered into a fragment and both
//! spliced into the document and registered under its slot, so the same
//! markup can be consumed again by an outer template pass.

use std::fmt::Write as _;

use adminkit_config::Config;
use adminkit_html::tags::{div, h1, link, meta, p, script, title};
use adminkit_html::{Element, Fragment, escape_html};
use adminkit_menu::RequestContext;

use crate::flash::render_flashes;
use crate::footer::render_footer;
use crate::header::Header;
use crate::namespace::Namespace;
use crate::sidebar::render_sidebar;
use crate::slots::{Slot, Slots};
use crate::title_bar::TitleBar;

/// Input to one page build: the page title and the pre-rendered main
/// content markup.
#[derive(Clone, Debug, Default)]
pub struct Page {
    /// Page title, combined with the site title in the document head.
    pub title: String,
    /// Main content markup, inserted verbatim.
    pub content: String,
}

impl Page {
    /// Creates a page with a title and no content.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: String::new(),
        }
    }

    /// Sets the main content markup.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

/// A completed build: the document markup and the populated slot map.
#[derive(Debug)]
pub struct RenderedPage {
    /// Full document markup.
    pub html: String,
    /// Slot assignments for the outer template pass.
    pub slots: Slots,
}

/// Builds the dashboard chrome around a page's main content.
#[derive(Debug)]
pub struct PageAssembler<'a> {
    config: &'a Config,
    namespace: &'a Namespace,
}

impl<'a> PageAssembler<'a> {
    /// Creates an assembler over shared configuration and namespace.
    #[must_use]
    pub fn new(config: &'a Config, namespace: &'a Namespace) -> Self {
        Self { config, namespace }
    }

    /// Builds the document for one request.
    #[must_use]
    pub fn build(&self, page: &Page, ctx: &RequestContext) -> RenderedPage {
        let mut slots = Slots::new();

        let head = self.build_head(page, &mut slots);
        let body_classes = body_classes(ctx);
        slots.assign(Slot::BodyClasses, body_classes.clone());
        let wrapper = self.build_wrapper(page, ctx, &mut slots);
        let scripts = self.build_scripts(&mut slots);

        let mut html = String::from("<!DOCTYPE html>\n<html>");
        let _ = write!(
            html,
            "<head>{head}</head><body class=\"{}\">{}{scripts}</body></html>",
            escape_html(&body_classes),
            wrapper.render(),
        );
        RenderedPage { html, slots }
    }

    /// Document head: title, stylesheets, favicon, meta tags.
    fn build_head(&self, page: &Page, slots: &mut Slots) -> String {
        // Empty sides drop out of the joined title, no dangling separator.
        let title_text = [page.title.as_str(), self.config.site.title.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" | ");
        slots.assign(Slot::Title, title_text.clone());

        let mut stylesheets = Fragment::new();
        for stylesheet in &self.config.assets.stylesheets {
            let mut tag = link()
                .attr("rel", "stylesheet")
                .attr("href", stylesheet.href.clone());
            if let Some(media) = &stylesheet.media {
                tag = tag.attr("media", media.clone());
            }
            stylesheets.push(tag);
        }
        slots.assign(Slot::Stylesheets, stylesheets.render());

        let mut favicon = Fragment::new();
        if let Some(href) = &self.config.site.favicon {
            favicon.push(link().attr("rel", "shortcut icon").attr("href", href.clone()));
        }
        slots.assign(Slot::Favicon, favicon.render());

        let mut meta_tags = Fragment::new();
        for tag in &self.config.meta_tags {
            meta_tags.push(
                meta()
                    .attr("name", tag.name.clone())
                    .attr("content", tag.content.clone()),
            );
        }
        slots.assign(Slot::Meta, meta_tags.render());

        let mut head = Fragment::new();
        head.push(title().text(title_text));
        let mut markup = head.render();
        markup.push_str(slots.get(Slot::Stylesheets).unwrap_or_default());
        markup.push_str(slots.get(Slot::Favicon).unwrap_or_default());
        markup.push_str(slots.get(Slot::Meta).unwrap_or_default());
        slots.assign(Slot::Head, markup.clone());
        markup
    }

    /// `div#wrapper`: the visible chrome around the main content.
    fn build_wrapper(&self, page: &Page, ctx: &RequestContext, slots: &mut Slots) -> Element {
        let mut wrapper = div().id("wrapper");

        if self.config.browser_resolved.is_unsupported(&ctx.user_agent) {
            wrapper = wrapper.child(render_unsupported_browser());
        }

        wrapper = wrapper.child(Header::new(&self.config.site.title, ctx, self.namespace).render(slots));
        wrapper = wrapper.child(TitleBar::new(&page.title, ctx, self.namespace).render());
        wrapper = wrapper.child(render_flashes(&ctx.flash));
        wrapper = wrapper.child(self.build_main_content(page, ctx, slots));
        wrapper.child(render_footer(self.config.site.footer.as_deref()))
    }

    /// Main content region with the conditional sidebar.
    fn build_main_content(&self, page: &Page, ctx: &RequestContext, slots: &mut Slots) -> Element {
        let sections = if ctx.skip_sidebar {
            tracing::debug!("Sidebar suppressed for this request");
            Vec::new()
        } else {
            self.namespace.sections_for(ctx)
        };
        let has_sidebar = !sections.is_empty();

        // Slot content and inline splice share the same boundary: the
        // wrapper div, not just the inner content div.
        let mut main_fragment = Fragment::new();
        main_fragment.push(
            div()
                .id("main_content_wrapper")
                .class(if has_sidebar { "col-lg-9" } else { "col-lg-12" })
                .child(div().id("main_content").raw(page.content.clone())),
        );
        let main_markup = main_fragment.render();
        slots.assign(Slot::MainContent, main_markup.clone());

        let mut row = div().class("row").raw(main_markup);
        if has_sidebar {
            row = row.child(render_sidebar(&sections));
        }

        div()
            .id("adminkit_content")
            .class(if has_sidebar { "with_sidebar" } else { "without_sidebar" })
            .child(row)
    }

    /// Trailing script tags, registered and returned for inline splicing.
    fn build_scripts(&self, slots: &mut Slots) -> String {
        let mut scripts = Fragment::new();
        for src in &self.config.assets.javascripts {
            scripts.push(script().attr("src", src.clone()));
        }
        let markup = scripts.render();
        slots.assign(Slot::Javascript, markup.clone());
        markup
    }
}

/// Body class list derived from the request: action, controller with path
/// separators flattened, framework marker, login state, namespace.
fn body_classes(ctx: &RequestContext) -> String {
    let mut classes = vec![
        ctx.action.clone(),
        ctx.controller.replace('/', "_"),
        "adminkit".to_owned(),
    ];
    if ctx.current_user.is_some() {
        classes.push("logged_in".to_owned());
    }
    if !ctx.namespace.is_empty() {
        classes.push(format!("{}_namespace", ctx.namespace));
    }
    classes.join(" ")
}

fn render_unsupported_browser() -> Element {
    div()
        .class("unsupported_browser")
        .child(h1().text("Your browser is not supported."))
        .child(p().text("Please upgrade to a modern browser to use this interface."))
}
