//! Menu storage and traversal.
//!
//! # Architecture
//!
//! Items are stored in a flat `Vec<MenuItem>` with parent/children
//! relationships tracked by indices. This provides:
//! - O(1) id lookups via the `id_index` `HashMap`
//! - cheap ordered traversal without chasing pointers
//!
//! The menu is immutable once built; construct it with [`MenuBuilder`].

use std::collections::HashMap;

use crate::context::RequestContext;
use crate::item::MenuItem;

/// An ordered, hierarchical navigation menu.
#[derive(Clone, Debug, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
    id_index: HashMap<String, usize>,
}

impl Menu {
    /// Get an item by id.
    ///
    /// With duplicate ids the index points at the most recently added item.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.id_index.get(id).map(|&i| &self.items[i])
    }

    /// True when the menu holds no items at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Visible top-level items in display order.
    ///
    /// Ordered by priority (lower first); insertion order breaks ties, so a
    /// menu built without explicit priorities traverses in source order.
    #[must_use]
    pub fn items(&self, ctx: &RequestContext) -> Vec<&MenuItem> {
        self.ordered_visible(&self.roots, ctx)
    }

    /// Visible children of the item with the given id, in display order.
    #[must_use]
    pub fn children_of(&self, id: &str, ctx: &RequestContext) -> Vec<&MenuItem> {
        match self.id_index.get(id) {
            Some(&idx) => self.ordered_visible(&self.children[idx], ctx),
            None => Vec::new(),
        }
    }

    /// True when the item matches the active-tab indicator, directly or
    /// through a descendant (open sections highlight their parent tab).
    #[must_use]
    pub fn is_current(&self, id: &str, active_tab: Option<&str>) -> bool {
        let Some(tab) = active_tab else {
            return false;
        };
        if id == tab {
            return true;
        }
        let Some(&idx) = self.id_index.get(id) else {
            return false;
        };
        self.subtree_contains(idx, tab)
    }

    fn subtree_contains(&self, idx: usize, tab: &str) -> bool {
        self.children[idx]
            .iter()
            .any(|&child| self.items[child].id == tab || self.subtree_contains(child, tab))
    }

    fn ordered_visible(&self, indices: &[usize], ctx: &RequestContext) -> Vec<&MenuItem> {
        let mut visible: Vec<&MenuItem> = indices
            .iter()
            .map(|&i| &self.items[i])
            .filter(|item| item.visible(ctx))
            .collect();
        // Stable sort keeps insertion order among equal priorities.
        visible.sort_by_key(|item| item.priority);
        visible
    }
}

/// Builder for constructing [`Menu`] instances.
#[derive(Debug, Default)]
pub struct MenuBuilder {
    items: Vec<MenuItem>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
    id_index: HashMap<String, usize>,
}

impl MenuBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, optionally under a parent returned by a previous call.
    ///
    /// # Returns
    ///
    /// Index of the added item, used as the `parent` for its children.
    pub fn add_item(&mut self, item: MenuItem, parent: Option<usize>) -> usize {
        let idx = self.items.len();

        if self.id_index.insert(item.id.clone(), idx).is_some() {
            tracing::warn!(id = %item.id, "Duplicate menu item id; lookups now resolve to the newest item");
        }

        self.items.push(item);
        self.children.push(Vec::new());

        if let Some(parent_idx) = parent {
            self.children[parent_idx].push(idx);
        } else {
            self.roots.push(idx);
        }

        idx
    }

    /// Build the immutable [`Menu`].
    #[must_use]
    pub fn build(self) -> Menu {
        Menu {
            items: self.items,
            children: self.children,
            roots: self.roots,
            id_index: self.id_index,
        }
    }
}
