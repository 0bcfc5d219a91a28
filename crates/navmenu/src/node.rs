//! Menu node descriptors.
//!
//! A [`MenuNode`] is the user-facing description of one menu entry. Trees of
//! nodes are usually deserialized from the same JSON or TOML that configures
//! the router:
//!
//! ```
//! use navmenu::MenuNode;
//!
//! let nodes: Vec<MenuNode> = serde_json::from_str(r#"[
//!     { "name": "Dashboard", "path": "dashboard", "meta": { "icon": "home" } },
//!     { "name": "System", "path": "system", "children": [
//!         { "name": "Users", "path": "users" },
//!         { "name": "Audit", "path": "audit", "meta": { "invisible": true } }
//!     ] }
//! ]"#).unwrap();
//!
//! assert_eq!(nodes[1].children().len(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Icon identifier that means "no icon".
pub const NO_ICON: &str = "none";

/// Optional per-node metadata. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeMeta {
    /// Icon identifier, `"none"` or absent for no icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Hidden nodes are still path-resolved but never rendered.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub invisible: bool,
}

impl NodeMeta {
    /// The icon to draw, if any.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref().filter(|icon| *icon != NO_ICON)
    }
}

/// One entry of a menu tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    /// Display identifier.
    pub name: String,
    /// Route segment. Absolute when it starts with `/`.
    pub path: String,
    /// Resolved absolute path. Filled in by path annotation.
    #[serde(default, alias = "fullPath", skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,
    #[serde(default)]
    pub meta: NodeMeta,
    /// Child entries. `None` marks a leaf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuNode>>,
}

impl MenuNode {
    /// Create a leaf node.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    /// Set the icon using builder pattern.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.meta.icon = Some(icon.into());
        self
    }

    /// Mark the node invisible using builder pattern.
    pub fn invisible(mut self) -> Self {
        self.meta.invisible = true;
        self
    }

    /// Set the children using builder pattern.
    pub fn with_children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = Some(children);
        self
    }

    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[MenuNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Whether this node is hidden from rendering.
    pub fn is_invisible(&self) -> bool {
        self.meta.invisible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_meta_defaults() {
        let node: MenuNode = serde_json::from_str(r#"{"name":"a","path":"a"}"#).unwrap();
        assert_eq!(node.meta, NodeMeta::default());
        assert!(node.children.is_none());
        assert!(!node.is_invisible());
    }

    #[test]
    fn test_full_path_alias() {
        let node: MenuNode =
            serde_json::from_str(r#"{"name":"a","path":"a","fullPath":"/a"}"#).unwrap();
        assert_eq!(node.full_path.as_deref(), Some("/a"));
    }

    #[test]
    fn test_icon_sentinel() {
        assert_eq!(MenuNode::new("a", "a").meta.icon(), None);
        assert_eq!(MenuNode::new("a", "a").with_icon("none").meta.icon(), None);
        assert_eq!(MenuNode::new("a", "a").with_icon("home").meta.icon(), Some("home"));
    }

    #[test]
    fn test_serialize_skips_defaults() {
        let json = serde_json::to_string(&MenuNode::new("a", "a")).unwrap();
        assert_eq!(json, r#"{"name":"a","path":"a","meta":{}}"#);
    }
}
