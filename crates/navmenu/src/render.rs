//! View tree production.
//!
//! The renderer does not draw. It turns an annotated [`MenuTree`] into a
//! [`MenuElement`] tree that a widget toolkit maps onto its own menu, item
//! and submenu widgets. Every element is keyed by its node's full path.

use serde::Serialize;

use navmenu_core::logging::targets;
use navmenu_core::{DebugTreeNode, PerfSpan, TreeDebug, TreeFormatOptions};

use crate::i18n::{i18n_key, I18n};
use crate::node::NodeMeta;
use crate::theme::{MenuMode, MenuTheme};
use crate::tree::{MenuTree, NodeId};
use crate::visibility::{render_form, RenderForm};

/// An icon reference, drawn by the host toolkit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Icon {
    /// Toolkit-specific icon type, e.g. `"dashboard"`.
    pub kind: String,
}

/// Icon for a node, or `None` when absent or `"none"`.
pub fn render_icon(meta: &NodeMeta) -> Option<Icon> {
    meta.icon().map(|kind| Icon {
        kind: kind.to_string(),
    })
}

/// Icon and text shown for an item or a submenu title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuLabel {
    pub icon: Option<Icon>,
    pub text: String,
}

/// One element of the rendered menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuElement {
    /// A row that links to `link`.
    Item {
        key: String,
        link: String,
        label: MenuLabel,
    },
    /// A titled, collapsible group.
    SubMenu {
        key: String,
        title: MenuLabel,
        children: Vec<MenuElement>,
    },
}

impl MenuElement {
    /// The element's key (its node's full path).
    pub fn key(&self) -> &str {
        match self {
            Self::Item { key, .. } | Self::SubMenu { key, .. } => key,
        }
    }

    pub fn label(&self) -> &MenuLabel {
        match self {
            Self::Item { label, .. } => label,
            Self::SubMenu { title, .. } => title,
        }
    }

    pub fn is_submenu(&self) -> bool {
        matches!(self, Self::SubMenu { .. })
    }

    /// Child elements, empty for items.
    pub fn children(&self) -> &[MenuElement] {
        match self {
            Self::Item { .. } => &[],
            Self::SubMenu { children, .. } => children,
        }
    }
}

impl DebugTreeNode for MenuElement {
    fn debug_label(&self) -> String {
        let label = self.label();
        match &label.icon {
            Some(icon) => format!("{} <{}>", label.text, icon.kind),
            None => label.text.clone(),
        }
    }

    fn debug_detail(&self) -> Option<String> {
        Some(self.key().to_string())
    }

    fn debug_children(&self) -> &[Self] {
        self.children()
    }
}

/// Render every visible root of `tree`. Labels are resolved through `i18n`
/// on each call.
pub fn render_elements(tree: &MenuTree, i18n: &dyn I18n) -> Vec<MenuElement> {
    let _span = PerfSpan::new("render_menu");
    let elements: Vec<MenuElement> = tree
        .roots()
        .iter()
        .filter_map(|&id| render_item(tree, id, i18n))
        .collect();
    tracing::trace!(target: targets::RENDER, roots = elements.len(), "rendered menu elements");
    elements
}

fn render_item(tree: &MenuTree, id: NodeId, i18n: &dyn I18n) -> Option<MenuElement> {
    let form = render_form(tree, id);
    if form == RenderForm::Hidden {
        return None;
    }

    let entry = tree.entry(id);
    let key = entry.full_path().to_string();
    let label = MenuLabel {
        icon: render_icon(entry.meta()),
        text: i18n.resolve(&i18n_key(&key)),
    };

    let element = match form {
        RenderForm::SubMenu => MenuElement::SubMenu {
            key,
            title: label,
            children: entry
                .children()
                .iter()
                .filter_map(|&child| render_item(tree, child, i18n))
                .collect(),
        },
        _ => MenuElement::Item {
            link: key.clone(),
            key,
            label,
        },
    };
    Some(element)
}

/// A complete rendered menu, ready to hand to a toolkit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    pub theme: MenuTheme,
    pub mode: MenuMode,
    pub selected_keys: Vec<String>,
    pub open_keys: Vec<String>,
    pub items: Vec<MenuElement>,
}

impl MenuView {
    /// Find an element by key anywhere in the view.
    pub fn find(&self, key: &str) -> Option<&MenuElement> {
        fn search<'a>(elements: &'a [MenuElement], key: &str) -> Option<&'a MenuElement> {
            elements.iter().find_map(|element| {
                if element.key() == key {
                    Some(element)
                } else {
                    search(element.children(), key)
                }
            })
        }
        search(&self.items, key)
    }

    /// Keys of all elements, pre-order.
    pub fn keys(&self) -> Vec<&str> {
        fn collect<'a>(elements: &'a [MenuElement], out: &mut Vec<&'a str>) {
            for element in elements {
                out.push(element.key());
                collect(element.children(), out);
            }
        }
        let mut keys = Vec::new();
        collect(&self.items, &mut keys);
        keys
    }

    /// Format the element tree for logs.
    pub fn debug_tree(&self, options: TreeFormatOptions) -> String {
        TreeDebug::with_options(options).format(&self.items)
    }
}
