//! Route-driven selection and expansion state.
//!
//! [`SelectionSync`] owns the three key lists a menu keeps between renders:
//!
//! - `selected_keys`: the active leaf (zero or one key in practice)
//! - `open_keys`: the expanded submenus
//! - `cached_open_keys`: expansion remembered while the menu is collapsed
//!   or laid out horizontally
//!
//! Mutators that can change `open_keys` return the new list when it changed,
//! so the owner can notify observers.

use navmenu_core::logging::targets;
use navmenu_core::Property;

use crate::route::{RouteChain, RouteId, RouteRecord, RouteTable};
use crate::theme::MenuMode;

/// The key a route selects: its own path, or if it is invisible, the path of
/// the nearest visible ancestor. When no ancestor is visible the topmost
/// record's path is used.
pub fn selected_key(table: &RouteTable, route: RouteId) -> Option<String> {
    let mut record = table.get(route)?;
    while record.meta().invisible {
        match record.parent().and_then(|parent| table.get(parent)) {
            Some(parent) => record = parent,
            None => break,
        }
    }
    Some(record.path().to_string())
}

/// Selection state of one menu.
#[derive(Debug)]
pub struct SelectionSync {
    selected_keys: Property<Vec<String>>,
    open_keys: Property<Vec<String>>,
    cached_open_keys: Property<Vec<String>>,
    collapsed: Property<bool>,
    mode: Property<MenuMode>,
}

impl SelectionSync {
    /// Create empty state.
    pub fn new(mode: MenuMode, collapsed: bool) -> Self {
        Self {
            selected_keys: Property::default(),
            open_keys: Property::default(),
            cached_open_keys: Property::default(),
            collapsed: Property::new(collapsed),
            mode: Property::new(mode),
        }
    }

    pub fn selected_keys(&self) -> Vec<String> {
        self.selected_keys.get()
    }

    pub fn open_keys(&self) -> Vec<String> {
        self.open_keys.get()
    }

    pub fn cached_open_keys(&self) -> Vec<String> {
        self.cached_open_keys.get()
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed.get()
    }

    pub fn mode(&self) -> MenuMode {
        self.mode.get()
    }

    pub fn set_mode(&self, mode: MenuMode) {
        self.mode.set(mode);
    }

    /// Recompute keys for a newly matched route chain.
    ///
    /// Records with an empty path are ignored. The selection is only
    /// re-derived when nothing is selected yet or the active route is
    /// invisible. Navigating between two visible routes keeps the previous
    /// selection, which the view's select event normally updated already.
    ///
    /// Returns the new open keys if they were applied to `open_keys`.
    pub fn sync_route(&self, chain: &RouteChain<'_>) -> Option<Vec<String>> {
        let mut ids: Vec<RouteId> = chain
            .ids()
            .iter()
            .copied()
            .filter(|&id| chain.table().get(id).is_some_and(|r| !r.path().is_empty()))
            .collect();

        let Some(active) = ids.pop() else {
            tracing::debug!(target: targets::SELECTION, "empty route chain, keeping menu state");
            return None;
        };
        let table = chain.table();
        let active_invisible = table.get(active).is_some_and(|r| r.meta().invisible);

        if self.selected_keys.with(Vec::is_empty) || active_invisible {
            if let Some(key) = selected_key(table, active) {
                tracing::debug!(target: targets::SELECTION, %key, "selected key derived from route");
                self.selected_keys.set(vec![key]);
            }
        }

        let new_open_keys: Vec<String> = ids
            .iter()
            .filter_map(|&id| table.get(id))
            .map(RouteRecord::path)
            .map(str::to_string)
            .collect();

        if self.open_keys.with(|current| *current == new_open_keys) {
            return None;
        }

        if self.is_collapsed() || self.mode().is_horizontal() {
            tracing::debug!(target: targets::SELECTION, ?new_open_keys, "caching open keys");
            self.cached_open_keys.set(new_open_keys);
            None
        } else {
            tracing::debug!(target: targets::SELECTION, ?new_open_keys, "applying open keys");
            self.set_open_keys(new_open_keys)
        }
    }

    /// Collapse or expand the menu.
    ///
    /// Collapsing moves the open keys into the cache and clears them;
    /// expanding restores the cache. Setting the current value again does
    /// nothing. Returns the new open keys if they changed.
    pub fn set_collapsed(&self, collapsed: bool) -> Option<Vec<String>> {
        if !self.collapsed.set(collapsed) {
            return None;
        }
        tracing::debug!(target: targets::SELECTION, collapsed, "collapse toggled");
        if collapsed {
            self.cached_open_keys.set(self.open_keys.get());
            self.set_open_keys(Vec::new())
        } else {
            self.set_open_keys(self.cached_open_keys.get())
        }
    }

    /// Replace the selection, as reported by the view after a click.
    pub fn select(&self, keys: Vec<String>) -> bool {
        self.selected_keys.set(keys)
    }

    /// Replace the open keys. Returns them if they changed.
    pub fn set_open_keys(&self, keys: Vec<String>) -> Option<Vec<String>> {
        self.open_keys.set(keys.clone()).then_some(keys)
    }
}

impl Default for SelectionSync {
    fn default() -> Self {
        Self::new(MenuMode::default(), false)
    }
}
