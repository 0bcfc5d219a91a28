//! Reactive properties for navmenu.
//!
//! A [`Property<T>`] holds one piece of component state and reports whether a
//! write actually changed it. Components pair each property with a
//! [`Signal`](crate::Signal) and emit only when `set` returns `true`.
//!
//! # Example
//!
//! ```
//! use navmenu_core::{Property, Signal};
//!
//! struct Sidebar {
//!     collapsed: Property<bool>,
//!     collapsed_changed: Signal<bool>,
//! }
//!
//! impl Sidebar {
//!     fn set_collapsed(&self, collapsed: bool) {
//!         if self.collapsed.set(collapsed) {
//!             self.collapsed_changed.emit(collapsed);
//!         }
//!     }
//! }
//!
//! let sidebar = Sidebar { collapsed: Property::new(false), collapsed_changed: Signal::new() };
//! sidebar.set_collapsed(true);
//! assert!(sidebar.collapsed.get());
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `Property<T>` wraps a value and provides change detection. When `set()` is
/// called, it compares the new value with the current one and returns whether
/// the value actually changed.
///
/// # Thread Safety
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}
