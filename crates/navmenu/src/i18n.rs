//! Label translation.
//!
//! Menu labels are never stored on the nodes. Each node's full path maps to
//! a dotted lookup key ([`i18n_key`]) that is resolved through an [`I18n`]
//! implementation on every render, so switching the locale relabels the
//! menu on the next frame.
//!
//! [`MessageStore`] is the bundled implementation: nested JSON bundles per
//! locale, deep-merged on insert, with an optional fallback locale.
//!
//! # Example
//!
//! ```
//! use navmenu::i18n::{I18n, MessageStore};
//! use serde_json::json;
//!
//! let store = MessageStore::new("CN");
//! store.merge("CN", json!({ "dashboard": { "name": "监控中心" } }));
//! store.merge("US", json!({ "dashboard": { "name": "Dashboard" } }));
//!
//! assert_eq!(store.resolve("dashboard.name"), "监控中心");
//! store.set_locale("US");
//! assert_eq!(store.resolve("dashboard.name"), "Dashboard");
//! ```

use std::collections::BTreeMap;

use parking_lot::RwLock;
use serde_json::{Map, Value};

use navmenu_core::logging::targets;
use navmenu_core::Signal;

use crate::path::PATH_SEPARATOR;
use crate::tree::{MenuTree, NodeId};

/// Segment appended to every menu label key.
pub const NAME_SEGMENT: &str = "name";

/// Translation backend used by the menu.
pub trait I18n: Send + Sync {
    /// Resolve a dotted key in the current locale. Missing keys resolve to
    /// the key itself.
    fn resolve(&self, key: &str) -> String;

    /// Deep-merge `bundle` into the messages of `locale`.
    fn merge(&self, locale: &str, bundle: Value);
}

/// Route segments that take part in label keys: non-empty and not a
/// `:param` placeholder.
fn key_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(PATH_SEPARATOR)
        .filter(|segment| !segment.is_empty() && !segment.starts_with(':'))
}

/// Derive the label key for a full path.
///
/// ```
/// use navmenu::i18n::i18n_key;
///
/// assert_eq!(i18n_key("/dashboard/workplace"), "dashboard.workplace.name");
/// assert_eq!(i18n_key("/users/:id/detail"), "users.detail.name");
/// ```
pub fn i18n_key(full_path: &str) -> String {
    key_segments(full_path)
        .chain(std::iter::once(NAME_SEGMENT))
        .collect::<Vec<_>>()
        .join(".")
}

/// What default label bundles use as the label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource {
    /// The node's `name`.
    Name,
    /// The node's own path segments joined with `.`.
    Path,
}

/// Build a bundle with a label for every node in `tree`, keyed by
/// [`i18n_key`].
///
/// Merge these before custom bundles so every node has some label.
pub fn default_messages(tree: &MenuTree, source: LabelSource) -> Value {
    let mut bundle = Value::Object(Map::new());
    for &root in tree.roots() {
        collect_defaults(tree, root, source, &mut bundle);
    }
    bundle
}

fn collect_defaults(tree: &MenuTree, id: NodeId, source: LabelSource, bundle: &mut Value) {
    let entry = tree.entry(id);
    let label = match source {
        LabelSource::Name => entry.name().to_string(),
        LabelSource::Path => key_segments(entry.path()).collect::<Vec<_>>().join("."),
    };
    assign(bundle, &i18n_key(entry.full_path()), Value::String(label));
    for &child in entry.children() {
        collect_defaults(tree, child, source, bundle);
    }
}

/// Set `value` at a dotted `key`, creating intermediate objects. A
/// non-object value in the way is replaced.
fn assign(target: &mut Value, key: &str, value: Value) {
    let (parents, leaf) = match key.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, key),
    };
    let mut current = target;
    for segment in parents.into_iter().flat_map(|parents| parents.split('.')) {
        current = object_mut(current)
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    object_mut(current).insert(leaf.to_string(), value);
}

fn object_mut(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    value.as_object_mut().expect("value was just made an object")
}

/// Deep-merge `source` into `target`. Objects merge key by key; any other
/// value in `source` overwrites.
pub fn deep_merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, source) => *target = source,
    }
}

fn lookup<'a>(bundle: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(bundle, |value, segment| value.get(segment))
        .and_then(Value::as_str)
}

struct StoreInner {
    locale: String,
    fallback_locale: Option<String>,
    messages: BTreeMap<String, Value>,
}

/// Locale-keyed message bundles.
pub struct MessageStore {
    inner: RwLock<StoreInner>,
    /// Emitted with the new locale after [`set_locale`](Self::set_locale)
    /// changes it.
    pub locale_changed: Signal<String>,
}

impl MessageStore {
    /// Create an empty store using `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                locale: locale.into(),
                fallback_locale: None,
                messages: BTreeMap::new(),
            }),
            locale_changed: Signal::new(),
        }
    }

    /// Set the fallback locale using builder pattern.
    pub fn with_fallback(self, locale: impl Into<String>) -> Self {
        self.inner.write().fallback_locale = Some(locale.into());
        self
    }

    /// The current locale.
    pub fn locale(&self) -> String {
        self.inner.read().locale.clone()
    }

    /// Switch the current locale.
    pub fn set_locale(&self, locale: impl Into<String>) {
        let locale = locale.into();
        {
            let mut inner = self.inner.write();
            if inner.locale == locale {
                return;
            }
            inner.locale = locale.clone();
        }
        tracing::debug!(target: targets::I18N, %locale, "locale changed");
        self.locale_changed.emit(locale);
    }

    /// Locales that have at least one bundle, sorted.
    pub fn locales(&self) -> Vec<String> {
        self.inner.read().messages.keys().cloned().collect()
    }

    /// Deep-merge `bundle` into `locale`'s messages.
    pub fn merge_locale_messages(&self, locale: &str, bundle: Value) {
        tracing::debug!(target: targets::I18N, locale, "merging locale messages");
        let mut inner = self.inner.write();
        let messages = inner
            .messages
            .entry(locale.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        deep_merge(messages, bundle);
    }

    /// Replace `locale`'s messages entirely.
    pub fn set_locale_messages(&self, locale: &str, bundle: Value) {
        self.inner.write().messages.insert(locale.to_string(), bundle);
    }

    /// Look `key` up in one locale only.
    pub fn lookup(&self, locale: &str, key: &str) -> Option<String> {
        let inner = self.inner.read();
        inner
            .messages
            .get(locale)
            .and_then(|bundle| lookup(bundle, key))
            .map(str::to_string)
    }

    /// Translate `key`: current locale, then fallback locale, then the key.
    pub fn translate(&self, key: &str) -> String {
        let inner = self.inner.read();
        let candidates = std::iter::once(&inner.locale).chain(inner.fallback_locale.as_ref());
        for locale in candidates {
            if let Some(text) = inner.messages.get(locale).and_then(|b| lookup(b, key)) {
                return text.to_string();
            }
        }
        tracing::trace!(target: targets::I18N, key, locale = %inner.locale, "missing translation");
        key.to_string()
    }
}

impl I18n for MessageStore {
    fn resolve(&self, key: &str) -> String {
        self.translate(key)
    }

    fn merge(&self, locale: &str, bundle: Value) {
        self.merge_locale_messages(locale, bundle);
    }
}

impl std::fmt::Debug for MessageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("MessageStore")
            .field("locale", &inner.locale)
            .field("fallback_locale", &inner.fallback_locale)
            .field("locales", &inner.messages.keys().collect::<Vec<_>>())
            .finish()
    }
}

static_assertions::assert_impl_all!(MessageStore: Send, Sync);
