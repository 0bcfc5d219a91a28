//! Arena-backed annotated menu tree.
//!
//! [`MenuTree`] is an immutable copy of the caller's [`MenuNode`]s with every
//! full path resolved. Entries live in a flat vector and refer to each other
//! by [`NodeId`], so walking up to ancestors is as cheap as walking down.
//! The caller's input is never touched.

use crate::node::{MenuNode, NodeMeta};
use crate::path;

/// Index of an entry inside a [`MenuTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One annotated node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    name: String,
    path: String,
    full_path: String,
    meta: NodeMeta,
    /// `false` for leaves whose descriptor had no `children` at all.
    has_children_list: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl MenuEntry {
    /// Display identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Route segment as written in the descriptor.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Resolved absolute path. Also the entry's view key.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn is_invisible(&self) -> bool {
        self.meta.invisible
    }

    /// Whether the descriptor declared a `children` list, even an empty one.
    pub fn has_children(&self) -> bool {
        self.has_children_list
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// An annotated, immutable menu tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTree {
    entries: Vec<MenuEntry>,
    roots: Vec<NodeId>,
}

impl MenuTree {
    /// Annotate `options` with full paths.
    ///
    /// Running this on the output of [`to_options`](Self::to_options) yields
    /// the same tree.
    pub fn from_options(options: &[MenuNode]) -> Self {
        path::annotate(options)
    }

    pub(crate) fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, node: &MenuNode, full_path: String, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.entries.len());
        self.entries.push(MenuEntry {
            name: node.name.clone(),
            path: node.path.clone(),
            full_path,
            meta: node.meta.clone(),
            has_children_list: node.children.is_some(),
            parent,
            children: Vec::new(),
        });
        match parent {
            Some(parent) => self.entries[parent.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Number of entries, visible or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level entries in declaration order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Get an entry by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` comes from a different tree and is out of range.
    pub fn entry(&self, id: NodeId) -> &MenuEntry {
        &self.entries[id.0]
    }

    /// Get an entry by id, or `None` if out of range.
    pub fn get(&self, id: NodeId) -> Option<&MenuEntry> {
        self.entries.get(id.0)
    }

    /// Find the first entry (in pre-order) with the given full path.
    pub fn find_by_path(&self, full_path: &str) -> Option<NodeId> {
        self.iter()
            .find(|(_, entry)| entry.full_path == full_path)
            .map(|(id, _)| id)
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.entry(id).parent,
        }
    }

    /// Pre-order traversal over all entries.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            tree: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// Export the tree as annotated descriptors with `full_path` set on
    /// every node.
    pub fn to_options(&self) -> Vec<MenuNode> {
        self.roots.iter().map(|&id| self.export(id)).collect()
    }

    fn export(&self, id: NodeId) -> MenuNode {
        let entry = self.entry(id);
        MenuNode {
            name: entry.name.clone(),
            path: entry.path.clone(),
            full_path: Some(entry.full_path.clone()),
            meta: entry.meta.clone(),
            children: entry
                .has_children_list
                .then(|| entry.children.iter().map(|&child| self.export(child)).collect()),
        }
    }
}

/// Iterator over the ancestors of an entry.
pub struct Ancestors<'a> {
    tree: &'a MenuTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (NodeId, &'a MenuEntry);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let entry = self.tree.entry(id);
        self.next = entry.parent;
        Some((id, entry))
    }
}

/// Pre-order iterator over a [`MenuTree`].
pub struct PreOrder<'a> {
    tree: &'a MenuTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (NodeId, &'a MenuEntry);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let entry = self.tree.entry(id);
        self.stack.extend(entry.children.iter().rev().copied());
        Some((id, entry))
    }
}
