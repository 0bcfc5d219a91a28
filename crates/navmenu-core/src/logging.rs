//! Logging and debugging facilities for navmenu.
//!
//! This module provides:
//! - Target names for filtering navmenu's `tracing` output by subsystem
//! - Debug visualization for view trees ([`TreeDebug`])
//! - A performance span guard ([`PerfSpan`])
//!
//! # Tracing Integration
//!
//! navmenu uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("navmenu::selection=debug")
//!     .init();
//! ```

use std::fmt::Write as FmtWrite;

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "navmenu_core::signal";
    /// Path annotation of menu trees.
    pub const PATH: &str = "navmenu::path";
    /// Route-driven selection and open-key synchronization.
    pub const SELECTION: &str = "navmenu::selection";
    /// View tree production.
    pub const RENDER: &str = "navmenu::render";
    /// Message store and label lookup.
    pub const I18N: &str = "navmenu::i18n";
    /// Configuration loading.
    pub const CONFIG: &str = "navmenu::config";
    /// Route table bookkeeping.
    pub const ROUTE: &str = "navmenu::route";
    /// Timing spans from [`PerfSpan`](super::PerfSpan).
    pub const PERF: &str = "navmenu::perf";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Indentation only.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to print each node's detail string (e.g. its key).
    pub show_details: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level in [`TreeStyle::Compact`].
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_details: true,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for minimal output: labels only.
    pub fn minimal() -> Self {
        Self {
            show_details: false,
            ..Default::default()
        }
    }

    /// Create options using plain ASCII connectors.
    pub fn ascii() -> Self {
        Self {
            style: TreeStyle::Ascii,
            ..Default::default()
        }
    }
}

/// A node that can be printed by [`TreeDebug`].
pub trait DebugTreeNode: Sized {
    /// Short human readable label.
    fn debug_label(&self) -> String;

    /// Optional detail printed after the label, in brackets.
    fn debug_detail(&self) -> Option<String> {
        None
    }

    /// Child nodes, in display order.
    fn debug_children(&self) -> &[Self];
}

/// Debug utility for visualizing trees of [`DebugTreeNode`]s.
#[derive(Debug, Clone, Default)]
pub struct TreeDebug {
    options: TreeFormatOptions,
}

impl TreeDebug {
    /// Create a new debug visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a debug visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format a forest of root nodes.
    pub fn format<N: DebugTreeNode>(&self, roots: &[N]) -> String {
        let mut output = String::new();
        let mut ancestors_last = Vec::new();
        let count = roots.len();
        for (i, root) in roots.iter().enumerate() {
            self.format_node(root, i + 1 == count, &mut ancestors_last, &mut output);
        }
        output
    }

    fn format_node<N: DebugTreeNode>(
        &self,
        node: &N,
        is_last: bool,
        ancestors_last: &mut Vec<bool>,
        output: &mut String,
    ) {
        let depth = ancestors_last.len();
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return;
        }

        output.push_str(&self.build_prefix(ancestors_last, is_last));
        output.push_str(&node.debug_label());
        if self.options.show_details {
            if let Some(detail) = node.debug_detail() {
                write!(output, " [{detail}]").expect("write to String");
            }
        }
        output.push('\n');

        let children = node.debug_children();
        ancestors_last.push(is_last);
        let count = children.len();
        for (i, child) in children.iter().enumerate() {
            self.format_node(child, i + 1 == count, ancestors_last, output);
        }
        ancestors_last.pop();
    }

    /// Build the prefix string for a node. Roots get no connector.
    fn build_prefix(&self, ancestors_last: &[bool], is_last: bool) -> String {
        if ancestors_last.is_empty() {
            return String::new();
        }

        let (branch, tee, corner) = match self.options.style {
            TreeStyle::Ascii => ("|   ", "+-- ", "`-- "),
            TreeStyle::Unicode => ("\u{2502}   ", "\u{251c}\u{2500}\u{2500} ", "\u{2514}\u{2500}\u{2500} "),
            TreeStyle::Compact => {
                return " ".repeat(self.options.indent_size * ancestors_last.len());
            }
        };

        let mut prefix = String::new();
        // Skip the root level: roots are printed without connectors.
        for &last in &ancestors_last[1..] {
            prefix.push_str(if last { "    " } else { branch });
        }
        prefix.push_str(if is_last { corner } else { tee });
        prefix
    }
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: targets::PERF, "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Node {
        name: &'static str,
        children: Vec<Node>,
    }

    impl Node {
        fn leaf(name: &'static str) -> Self {
            Self { name, children: Vec::new() }
        }
    }

    impl DebugTreeNode for Node {
        fn debug_label(&self) -> String {
            self.name.to_string()
        }

        fn debug_detail(&self) -> Option<String> {
            Some(format!("/{}", self.name))
        }

        fn debug_children(&self) -> &[Self] {
            &self.children
        }
    }

    fn sample() -> Vec<Node> {
        vec![
            Node {
                name: "system",
                children: vec![Node::leaf("users"), Node::leaf("roles")],
            },
            Node::leaf("about"),
        ]
    }

    #[test]
    fn test_tree_format_ascii() {
        let output = TreeDebug::with_options(TreeFormatOptions::ascii()).format(&sample());
        assert_eq!(
            output,
            "system [/system]\n+-- users [/users]\n`-- roles [/roles]\nabout [/about]\n"
        );
    }

    #[test]
    fn test_tree_format_minimal() {
        let output = TreeDebug::with_options(TreeFormatOptions::minimal()).format(&sample());
        assert!(output.contains("users"));
        assert!(!output.contains('['));
    }

    #[test]
    fn test_tree_format_max_depth() {
        let options = TreeFormatOptions {
            max_depth: Some(0),
            ..TreeFormatOptions::minimal()
        };
        let output = TreeDebug::with_options(options).format(&sample());
        assert_eq!(output, "system\nabout\n");
    }

    #[test]
    fn test_tree_format_empty() {
        assert!(TreeDebug::new().format::<Node>(&[]).is_empty());
    }

    struct SpanTargets(std::sync::Arc<parking_lot::Mutex<Vec<String>>>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for SpanTargets {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            _id: &tracing::span::Id,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            self.0.lock().push(attrs.metadata().target().to_string());
        }
    }

    #[test]
    fn test_perf_span_uses_perf_target() {
        use tracing_subscriber::layer::SubscriberExt;

        let seen = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(SpanTargets(seen.clone()));
        tracing::subscriber::with_default(subscriber, || {
            let _span = PerfSpan::new("render_menu");
        });

        assert_eq!(*seen.lock(), vec![targets::PERF.to_string()]);
    }
}
