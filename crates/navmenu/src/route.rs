//! Minimal route records and matched route chains.
//!
//! The menu does not route anything itself. It only needs what a router
//! hands out after matching a location: the chain of matched records from
//! the root to the active one, each with a path, an `invisible` flag and a
//! link to its parent record. [`RouteTable`] stores those records in an
//! arena so parent links are plain ids.
//!
//! # Example
//!
//! ```
//! use navmenu::route::{RouteMeta, RouteTable};
//!
//! let mut routes = RouteTable::new();
//! let root = routes.add_route(None, "/", RouteMeta::default());
//! let system = routes.add_route(Some(root), "system", RouteMeta::default());
//! let users = routes.add_route(Some(system), "users", RouteMeta::default());
//!
//! let chain = routes.matched(users);
//! let paths: Vec<&str> = chain.iter().map(|r| r.path()).collect();
//! assert_eq!(paths, vec!["", "/system", "/system/users"]);
//! ```

use slotmap::{new_key_type, SlotMap};

use navmenu_core::logging::targets;

use crate::path::{is_absolute, PATH_SEPARATOR};
use crate::tree::{MenuTree, NodeId};

new_key_type! {
    /// Identifier of a route record inside a [`RouteTable`].
    pub struct RouteId;
}

/// Route metadata the menu cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Hidden routes never become the selected key themselves.
    pub invisible: bool,
}

impl RouteMeta {
    pub fn invisible() -> Self {
        Self { invisible: true }
    }
}

/// A matched route record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    path: String,
    meta: RouteMeta,
    parent: Option<RouteId>,
}

impl RouteRecord {
    /// Normalized absolute path. Empty for a root mounted at `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn meta(&self) -> &RouteMeta {
        &self.meta
    }

    pub fn parent(&self) -> Option<RouteId> {
        self.parent
    }
}

/// Normalize a route path the way routers store it.
///
/// A trailing separator is dropped, absolute paths are kept, relative paths
/// are joined to the parent and doubled separators are collapsed.
pub fn normalize_route_path(path: &str, parent: Option<&str>) -> String {
    let path = path.strip_suffix(PATH_SEPARATOR).unwrap_or(path);
    if is_absolute(path) {
        return path.to_string();
    }
    match parent {
        None => path.to_string(),
        Some(parent) => clean_path(&format!("{parent}{PATH_SEPARATOR}{path}")),
    }
}

fn clean_path(path: &str) -> String {
    let mut cleaned = String::with_capacity(path.len());
    let mut previous_separator = false;
    for ch in path.chars() {
        let is_separator = ch == PATH_SEPARATOR;
        if !(is_separator && previous_separator) {
            cleaned.push(ch);
        }
        previous_separator = is_separator;
    }
    cleaned
}

/// Arena of route records.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    records: SlotMap<RouteId, RouteRecord>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route under `parent`, normalizing its path.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a record of this table.
    pub fn add_route(&mut self, parent: Option<RouteId>, path: &str, meta: RouteMeta) -> RouteId {
        let parent_path = parent.map(|id| self.records[id].path.as_str());
        let path = normalize_route_path(path, parent_path);
        tracing::trace!(target: targets::ROUTE, %path, "registering route");
        self.records.insert(RouteRecord { path, meta, parent })
    }

    /// Mirror a menu tree into routes mounted under a root at `/`.
    ///
    /// Returns the table and the root record id. Route paths line up with
    /// the menu's full paths, so [`find_by_path`](Self::find_by_path) can be
    /// used with menu keys.
    pub fn from_menu(tree: &MenuTree) -> (Self, RouteId) {
        let mut table = Self::new();
        let root = table.add_route(None, "/", RouteMeta::default());
        for &id in tree.roots() {
            table.mirror(tree, id, root);
        }
        (table, root)
    }

    fn mirror(&mut self, tree: &MenuTree, id: NodeId, parent: RouteId) {
        let entry = tree.entry(id);
        let meta = RouteMeta {
            invisible: entry.is_invisible(),
        };
        let route = self.add_route(Some(parent), entry.full_path(), meta);
        for &child in entry.children() {
            self.mirror(tree, child, route);
        }
    }

    pub fn get(&self, id: RouteId) -> Option<&RouteRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by its normalized path.
    pub fn find_by_path(&self, path: &str) -> Option<RouteId> {
        self.records
            .iter()
            .find(|(_, record)| record.path == path)
            .map(|(id, _)| id)
    }

    /// The matched chain for `leaf`, root first. Empty for unknown ids.
    pub fn matched(&self, leaf: RouteId) -> RouteChain<'_> {
        let mut ids = Vec::new();
        let mut next = self.records.get(leaf).map(|_| leaf);
        while let Some(id) = next {
            ids.push(id);
            next = self.records[id].parent;
        }
        ids.reverse();
        RouteChain { table: self, ids }
    }

    /// A chain from explicit ids, for routers that compute their own match.
    /// Unknown ids are dropped.
    pub fn chain(&self, ids: impl IntoIterator<Item = RouteId>) -> RouteChain<'_> {
        RouteChain {
            table: self,
            ids: ids
                .into_iter()
                .filter(|id| self.records.contains_key(*id))
                .collect(),
        }
    }
}

/// The matched records for the current location, root first.
#[derive(Debug, Clone)]
pub struct RouteChain<'a> {
    table: &'a RouteTable,
    ids: Vec<RouteId>,
}

impl<'a> RouteChain<'a> {
    pub fn table(&self) -> &'a RouteTable {
        self.table
    }

    pub fn ids(&self) -> &[RouteId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Records in chain order.
    pub fn iter(&self) -> impl Iterator<Item = &'a RouteRecord> + '_ {
        let table = self.table;
        self.ids.iter().map(move |&id| &table.records[id])
    }
}
