//! Menu configuration.
//!
//! A [`MenuConfig`] carries everything needed to build a
//! [`NavMenu`](crate::NavMenu): the node tree, theme, layout, initial collapse
//! state, message bundles and an optional open-keys override. It can be built
//! in code or loaded from JSON or TOML.
//!
//! # Example
//!
//! ```
//! use navmenu::MenuConfig;
//!
//! let config = MenuConfig::from_json_str(r#"{
//!     "options": [{ "name": "dashboard", "path": "dashboard", "meta": { "icon": "dashboard" } }],
//!     "theme": "light",
//!     "i18n": { "messages": { "US": { "dashboard": { "name": "Dashboard" } } } }
//! }"#).unwrap();
//!
//! assert_eq!(config.options.len(), 1);
//! assert_eq!(config.theme, "light");
//! assert_eq!(config.mode, "inline");
//! ```

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use navmenu_core::logging::targets;

use crate::error::{MenuError, Result};
use crate::i18n::deep_merge;
use crate::node::MenuNode;
use crate::theme::{MenuMode, MenuTheme};

fn default_theme() -> String {
    MenuTheme::Dark.as_str().to_string()
}

fn default_mode() -> String {
    MenuMode::Inline.as_str().to_string()
}

/// Message bundles keyed by locale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct I18nConfig {
    #[serde(default)]
    pub messages: BTreeMap<String, Value>,
}

/// Full description of a menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuConfig {
    /// Root nodes.
    pub options: Vec<MenuNode>,
    /// Theme name. Anything other than `"light"` is dark.
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Layout name: `inline`, `vertical` or `horizontal`.
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default)]
    pub collapsed: bool,
    /// Bundles merged into the message store when the menu is built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n: Option<I18nConfig>,
    /// Externally controlled open keys. When set, they win over the menu's
    /// own expansion state in rendered views.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_keys: Option<Vec<String>>,
}

impl MenuConfig {
    /// Create a config with default theme and mode.
    pub fn new(options: Vec<MenuNode>) -> Self {
        Self {
            options,
            theme: default_theme(),
            mode: default_mode(),
            collapsed: false,
            i18n: None,
            open_keys: None,
        }
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// Add a bundle for `locale`, deep-merging with one already present.
    pub fn with_messages(mut self, locale: impl Into<String>, bundle: Value) -> Self {
        let messages = &mut self.i18n.get_or_insert_with(I18nConfig::default).messages;
        match messages.entry(locale.into()) {
            Entry::Occupied(mut existing) => deep_merge(existing.get_mut(), bundle),
            Entry::Vacant(slot) => {
                slot.insert(bundle);
            }
        }
        self
    }

    pub fn with_open_keys(mut self, keys: Vec<String>) -> Self {
        self.open_keys = Some(keys);
        self
    }

    /// Normalized theme.
    pub fn menu_theme(&self) -> MenuTheme {
        MenuTheme::normalize(&self.theme)
    }

    /// Parsed layout mode.
    pub fn menu_mode(&self) -> MenuMode {
        MenuMode::from_name(&self.mode)
    }

    /// Parse a JSON config.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source)?;
        tracing::debug!(target: targets::CONFIG, roots = config.options.len(), "parsed JSON menu config");
        Ok(config)
    }

    /// Parse a TOML config.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        tracing::debug!(target: targets::CONFIG, roots = config.options.len(), "parsed TOML menu config");
        Ok(config)
    }

    /// Load a config file. The format follows the extension: `.json` or
    /// `.toml`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("toml") => Self::from_toml_str,
            _ => {
                return Err(MenuError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loading menu config");
        let source = std::fs::read_to_string(path).map_err(|e| MenuError::io(path, e))?;
        parse(&source)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
