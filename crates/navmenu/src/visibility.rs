//! Per-node render form decisions.

use crate::tree::{MenuTree, NodeId};

/// How a node appears in the rendered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderForm {
    /// Not rendered at all.
    Hidden,
    /// A collapsible group of its visible children.
    SubMenu,
    /// A clickable link row.
    Item,
}

/// Decide how `id` renders.
///
/// An invisible node is hidden. A node renders as a submenu only when at
/// least one of its direct children is visible; the check does not look
/// past the first level. Otherwise, even with a children list, the node
/// falls back to a plain item pointing at its own full path.
pub fn render_form(tree: &MenuTree, id: NodeId) -> RenderForm {
    let entry = tree.entry(id);
    if entry.is_invisible() {
        RenderForm::Hidden
    } else if entry.has_children() && has_visible_children(tree, id) {
        RenderForm::SubMenu
    } else {
        RenderForm::Item
    }
}

/// Whether any direct child of `id` is not marked invisible.
pub fn has_visible_children(tree: &MenuTree, id: NodeId) -> bool {
    tree.entry(id)
        .children()
        .iter()
        .any(|&child| !tree.entry(child).is_invisible())
}
