//! Wide vs compact presentation, picked from the viewport width.

use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPACT_BREAKPOINT: u16 = 100;

/// How the gallery is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Full slider with metadata card, plus indicator strip.
    Wide,
    /// Compact carousel: title, one-line summary, indicator strip.
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Widths at or below this value use [`LayoutMode::Compact`].
    pub compact_breakpoint: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            compact_breakpoint: DEFAULT_COMPACT_BREAKPOINT,
        }
    }
}

impl LayoutConfig {
    pub fn mode_for_width(&self, width: u16) -> LayoutMode {
        if width <= self.compact_breakpoint {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }
}
