//! Full-path annotation of menu trees.
//!
//! Every node gets an absolute `full_path`, used both as its link target and
//! as its key in the rendered view. A relative segment is appended to the
//! parent's full path; an absolute segment replaces it, which lets a node
//! link outside its parent's namespace.

use navmenu_core::logging::targets;

use crate::node::MenuNode;
use crate::tree::{MenuTree, NodeId};

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '/';

/// Whether `path` starts with the separator.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(PATH_SEPARATOR)
}

/// Resolve a node's full path from its parent's full path.
///
/// ```
/// use navmenu::path::resolve_full_path;
///
/// assert_eq!(resolve_full_path("", "dashboard"), "/dashboard");
/// assert_eq!(resolve_full_path("/system", "users"), "/system/users");
/// assert_eq!(resolve_full_path("/system", "/audit"), "/audit");
/// ```
pub fn resolve_full_path(parent_path: &str, path: &str) -> String {
    if is_absolute(path) {
        path.to_string()
    } else {
        format!("{parent_path}{PATH_SEPARATOR}{path}")
    }
}

/// Build an annotated tree from `options`.
///
/// If the first root already carries a `full_path`, the input is treated as
/// annotated and existing values are kept. Nodes that still lack one are
/// resolved against their parent.
pub(crate) fn annotate(options: &[MenuNode]) -> MenuTree {
    let trust_existing = options.first().is_some_and(|node| node.full_path.is_some());
    if trust_existing {
        tracing::debug!(target: targets::PATH, "options already annotated, keeping full paths");
    }

    let mut tree = MenuTree::empty();
    annotate_level(&mut tree, options, None, "", trust_existing);
    tracing::debug!(target: targets::PATH, nodes = tree.len(), "annotated menu tree");
    tree
}

fn annotate_level(
    tree: &mut MenuTree,
    nodes: &[MenuNode],
    parent: Option<NodeId>,
    parent_path: &str,
    trust_existing: bool,
) {
    for node in nodes {
        let full_path = match (&node.full_path, trust_existing) {
            (Some(existing), true) => existing.clone(),
            _ => resolve_full_path(parent_path, &node.path),
        };
        let id = tree.push(node, full_path.clone(), parent);
        if let Some(children) = &node.children {
            annotate_level(tree, children, Some(id), &full_path, trust_existing);
        }
    }
}
