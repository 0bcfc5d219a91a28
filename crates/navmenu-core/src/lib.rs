//! Core systems for navmenu.
//!
//! This crate provides the reactive plumbing the menu component is built on:
//!
//! - **Signal/Slot System**: Type-safe observer callbacks
//! - **Property System**: State cells with change detection
//! - **Logging**: `tracing` targets and tree debug formatting
//!
//! # Example
//!
//! ```
//! use navmenu_core::{Property, Signal};
//!
//! struct OpenKeys {
//!     keys: Property<Vec<String>>,
//!     changed: Signal<Vec<String>>,
//! }
//!
//! impl OpenKeys {
//!     fn set(&self, keys: Vec<String>) {
//!         if self.keys.set(keys.clone()) {
//!             self.changed.emit(keys);
//!         }
//!     }
//! }
//!
//! let open = OpenKeys { keys: Property::default(), changed: Signal::new() };
//! open.changed.connect(|keys| println!("now open: {:?}", keys));
//! open.set(vec!["/system".to_string()]);
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::{DebugTreeNode, PerfSpan, TreeDebug, TreeFormatOptions, TreeStyle};
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
