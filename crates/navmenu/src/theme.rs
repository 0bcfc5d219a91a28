//! Menu theme and layout mode.

use std::fmt;

use serde::{Deserialize, Serialize};

use navmenu_core::logging::targets;

/// Menu color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuTheme {
    #[default]
    Dark,
    Light,
}

impl MenuTheme {
    /// Normalize a theme name. Only `"light"` selects the light theme;
    /// anything else, including unknown names, is dark.
    pub fn normalize(name: &str) -> Self {
        if name == "light" {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for MenuTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Menu layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuMode {
    /// Sidebar with submenus expanding in place.
    #[default]
    Inline,
    /// Sidebar with submenus popping out to the side.
    Vertical,
    /// Top bar. Route-driven open keys are cached rather than applied.
    Horizontal,
}

impl MenuMode {
    /// Parse a mode name, falling back to inline for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "inline" => Self::Inline,
            "vertical" => Self::Vertical,
            "horizontal" => Self::Horizontal,
            other => {
                tracing::debug!(target: targets::RENDER, mode = other, "unknown menu mode, using inline");
                Self::Inline
            }
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Self::Horizontal
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for MenuMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
