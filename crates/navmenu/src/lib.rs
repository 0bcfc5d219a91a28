//! Route-driven navigation menus for administration dashboards.
//!
//! This crate models the sidebar (or top bar) menu of an admin console:
//!
//! - **Node trees**: [`MenuNode`] descriptors with relative or absolute paths,
//!   resolved into an immutable [`MenuTree`]
//! - **Visibility**: hidden nodes, and submenus whose children are all hidden
//! - **Route sync**: selected and expanded keys follow the matched route chain
//! - **Labels**: dotted i18n keys resolved through a pluggable [`I18n`] store
//! - **Views**: a toolkit-neutral [`MenuView`] tree keyed by full paths
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use navmenu::{MenuConfig, MenuElement, NavMenu};
//! use navmenu::i18n::MessageStore;
//!
//! let config = MenuConfig::from_json_str(r#"{
//!     "options": [
//!         { "name": "dashboard", "path": "dashboard", "meta": { "icon": "dashboard" } }
//!     ],
//!     "i18n": { "messages": { "US": { "dashboard": { "name": "Dashboard" } } } }
//! }"#).unwrap();
//!
//! let menu = NavMenu::new(config, Arc::new(MessageStore::new("US"))).unwrap();
//! let view = menu.render();
//!
//! match &view.items[0] {
//!     MenuElement::Item { key, label, .. } => {
//!         assert_eq!(key, "/dashboard");
//!         assert_eq!(label.text, "Dashboard");
//!     }
//!     other => panic!("unexpected element: {other:?}"),
//! }
//! ```

pub mod config;
pub mod i18n;
pub mod menu;
pub mod node;
pub mod path;
pub mod render;
pub mod route;
pub mod selection;
pub mod theme;
pub mod tree;
pub mod visibility;

mod error;

pub use config::{I18nConfig, MenuConfig};
pub use error::{MenuError, Result};
pub use i18n::{I18n, LabelSource, MessageStore};
pub use menu::{NavMenu, SelectEvent};
pub use node::{MenuNode, NodeMeta};
pub use render::{Icon, MenuElement, MenuLabel, MenuView};
pub use route::{RouteChain, RouteId, RouteMeta, RouteTable};
pub use selection::SelectionSync;
pub use theme::{MenuMode, MenuTheme};
pub use tree::{MenuEntry, MenuTree, NodeId};
pub use visibility::RenderForm;
