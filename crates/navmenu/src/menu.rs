//! The navigation menu component.
//!
//! [`NavMenu`] ties the pieces together: an annotated [`MenuTree`], the
//! route-driven [`SelectionSync`] state, an [`I18n`] backend for labels and
//! the signals a host toolkit listens to.
//!
//! # Signals
//!
//! - [`select`](NavMenu::select): a leaf was clicked
//! - [`open_change`](NavMenu::open_change): the expanded submenus changed
//! - [`update_open_keys`](NavMenu::update_open_keys): same payload, for hosts
//!   that mirror open keys into their own state
//!
//! Both open-key signals fire only when the menu's own open keys change by
//! value. Writing an equal list, such as collapsing a menu that has nothing
//! expanded, emits nothing. Keys cached while collapsed or horizontal emit
//! when they are restored.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use navmenu::{MenuConfig, MenuNode, NavMenu};
//! use navmenu::i18n::MessageStore;
//! use navmenu::route::RouteTable;
//!
//! let config = MenuConfig::new(vec![
//!     MenuNode::new("system", "system").with_children(vec![MenuNode::new("users", "users")]),
//! ]);
//! let menu = NavMenu::new(config, Arc::new(MessageStore::new("US"))).unwrap();
//!
//! menu.open_change.connect(|keys| println!("open: {keys:?}"));
//!
//! let (routes, _) = RouteTable::from_menu(menu.tree());
//! let users = routes.find_by_path("/system/users").unwrap();
//! menu.sync_route(&routes.matched(users));
//!
//! let view = menu.render();
//! assert_eq!(view.selected_keys, vec!["/system/users"]);
//! assert_eq!(view.open_keys, vec!["/system"]);
//! ```

use std::sync::Arc;

use serde::Serialize;

use navmenu_core::logging::targets;
use navmenu_core::{Property, Signal, TreeFormatOptions};

use crate::config::MenuConfig;
use crate::error::{MenuError, Result};
use crate::i18n::I18n;
use crate::render::{render_elements, MenuView};
use crate::route::RouteChain;
use crate::selection::SelectionSync;
use crate::theme::{MenuMode, MenuTheme};
use crate::tree::MenuTree;

/// Payload of [`NavMenu::select`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectEvent {
    /// Key of the clicked item.
    pub key: String,
    /// Keys from the clicked item up to its top-level submenu.
    pub key_path: Vec<String>,
    /// The selection after the click.
    pub selected_keys: Vec<String>,
}

impl SelectEvent {
    /// A single-selection click on `key`.
    pub fn new(key: impl Into<String>, key_path: Vec<String>) -> Self {
        let key = key.into();
        Self {
            selected_keys: vec![key.clone()],
            key,
            key_path,
        }
    }
}

/// A route-synchronized navigation menu.
pub struct NavMenu {
    tree: MenuTree,
    i18n: Arc<dyn I18n>,
    state: SelectionSync,
    theme: Property<MenuTheme>,
    open_keys_override: Property<Option<Vec<String>>>,

    /// Signal emitted when a leaf is selected.
    pub select: Signal<SelectEvent>,
    /// Signal emitted when the internal open keys change.
    pub open_change: Signal<Vec<String>>,
    /// Signal emitted alongside `open_change` with the same keys.
    pub update_open_keys: Signal<Vec<String>>,
}

impl NavMenu {
    /// Build a menu from `config`.
    ///
    /// Node paths are resolved into a private copy of `config.options`, and
    /// every bundle in `config.i18n` is merged into `i18n`.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::EmptyOptions`] if `config.options` is empty.
    pub fn new(config: MenuConfig, i18n: Arc<dyn I18n>) -> Result<Self> {
        if config.options.is_empty() {
            return Err(MenuError::EmptyOptions);
        }

        let theme = config.menu_theme();
        let mode = config.menu_mode();
        let tree = MenuTree::from_options(&config.options);

        if let Some(bundles) = config.i18n {
            for (locale, bundle) in bundles.messages {
                i18n.merge(&locale, bundle);
            }
        }

        tracing::debug!(
            target: targets::RENDER,
            nodes = tree.len(),
            %theme,
            %mode,
            collapsed = config.collapsed,
            "menu created"
        );

        Ok(Self {
            tree,
            i18n,
            state: SelectionSync::new(mode, config.collapsed),
            theme: Property::new(theme),
            open_keys_override: Property::new(config.open_keys),
            select: Signal::new(),
            open_change: Signal::new(),
            update_open_keys: Signal::new(),
        })
    }

    /// The annotated node tree.
    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    /// The label backend.
    pub fn i18n(&self) -> &Arc<dyn I18n> {
        &self.i18n
    }

    pub fn theme(&self) -> MenuTheme {
        self.theme.get()
    }

    /// Set the theme by name. Anything other than `"light"` is dark.
    pub fn set_theme(&self, name: &str) {
        self.theme.set(MenuTheme::normalize(name));
    }

    pub fn mode(&self) -> MenuMode {
        self.state.mode()
    }

    pub fn set_mode(&self, mode: MenuMode) {
        self.state.set_mode(mode);
    }

    pub fn is_collapsed(&self) -> bool {
        self.state.is_collapsed()
    }

    pub fn selected_keys(&self) -> Vec<String> {
        self.state.selected_keys()
    }

    /// The menu's own open keys, ignoring any override.
    pub fn open_keys(&self) -> Vec<String> {
        self.state.open_keys()
    }

    pub fn cached_open_keys(&self) -> Vec<String> {
        self.state.cached_open_keys()
    }

    /// Open keys shown in views: the override if set, else the menu's own.
    pub fn effective_open_keys(&self) -> Vec<String> {
        self.open_keys_override
            .get()
            .unwrap_or_else(|| self.state.open_keys())
    }

    /// React to a route change.
    pub fn sync_route(&self, chain: &RouteChain<'_>) {
        if let Some(keys) = self.state.sync_route(chain) {
            self.emit_open_keys(keys);
        }
    }

    /// Collapse or expand the menu, stashing or restoring open keys.
    pub fn set_collapsed(&self, collapsed: bool) {
        if let Some(keys) = self.state.set_collapsed(collapsed) {
            self.emit_open_keys(keys);
        }
    }

    /// Handle a click on a leaf reported by the view.
    pub fn handle_select(&self, event: SelectEvent) {
        tracing::debug!(target: targets::SELECTION, key = %event.key, "item selected");
        self.state.select(event.selected_keys.clone());
        self.select.emit(event);
    }

    /// Handle the view expanding or collapsing a submenu.
    pub fn set_open_keys_from_widget(&self, keys: Vec<String>) {
        if let Some(keys) = self.state.set_open_keys(keys) {
            self.emit_open_keys(keys);
        }
    }

    /// Set or clear the externally controlled open keys.
    pub fn set_open_keys_override(&self, keys: Option<Vec<String>>) {
        self.open_keys_override.set(keys);
    }

    pub fn open_keys_override(&self) -> Option<Vec<String>> {
        self.open_keys_override.get()
    }

    fn emit_open_keys(&self, keys: Vec<String>) {
        tracing::debug!(target: targets::SELECTION, open_keys = ?keys, "open keys changed");
        self.open_change.emit(keys.clone());
        self.update_open_keys.emit(keys);
    }

    /// Produce the current view. Labels are looked up again on every call.
    pub fn render(&self) -> MenuView {
        let view = MenuView {
            theme: self.theme(),
            mode: self.mode(),
            selected_keys: self.selected_keys(),
            open_keys: self.effective_open_keys(),
            items: render_elements(&self.tree, self.i18n.as_ref()),
        };
        if tracing::enabled!(target: targets::RENDER, tracing::Level::TRACE) {
            tracing::trace!(
                target: targets::RENDER,
                "menu view:\n{}",
                view.debug_tree(TreeFormatOptions::ascii())
            );
        }
        view
    }
}

impl std::fmt::Debug for NavMenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavMenu")
            .field("nodes", &self.tree.len())
            .field("theme", &self.theme())
            .field("state", &self.state)
            .field("open_keys_override", &self.open_keys_override())
            .finish()
    }
}

static_assertions::assert_impl_all!(NavMenu: Send, Sync);
