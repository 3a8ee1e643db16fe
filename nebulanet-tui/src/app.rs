//! Application state — single-owner, main-thread only.
//!
//! The gallery lives here exactly once. The slider and the indicator strip
//! both draw from `AppState::gallery`, so selecting through either one moves
//! the same index.

use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;

use chrono::NaiveDateTime;

use nebulanet_core::paths;
use nebulanet_core::{Gallery, JumpOutcome, LayoutConfig, LayoutMode, Route, SiteConfig};

const STATUS_HISTORY_CAP: usize = 50;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

impl StatusLevel {
    pub fn label(self) -> &'static str {
        match self {
            StatusLevel::Info => "INFO",
            StatusLevel::Warning => "WARN",
        }
    }
}

/// An entry in the status history overlay.
#[derive(Debug, Clone)]
pub struct StatusRecord {
    pub timestamp: NaiveDateTime,
    pub level: StatusLevel,
    pub message: String,
}

/// Whether an item's image file could be found under the asset root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    /// No asset root configured.
    Unchecked,
    Present,
    Missing,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    Jump,
    History,
}

/// Top-level application state.
pub struct AppState {
    pub route: Route,
    pub running: bool,

    pub gallery: Gallery,
    pub layout: LayoutConfig,
    /// Human-readable dataset origin for the Home header.
    pub dataset_label: String,
    pub asset_root: Option<PathBuf>,
    missing_images: HashSet<usize>,

    /// Vertical scroll of the text pages.
    pub page_scroll: u16,

    pub status_message: Option<(String, StatusLevel)>,
    pub status_history: VecDeque<StatusRecord>,
    pub overlay: Overlay,
    pub jump_input: String,
}

impl AppState {
    pub fn new(gallery: Gallery, config: &SiteConfig) -> Self {
        let missing_images = match &config.asset_root {
            Some(root) => gallery
                .items()
                .iter()
                .enumerate()
                .filter(|(_, item)| !paths::resolve(root, &item.image_path).is_file())
                .map(|(i, _)| i)
                .collect(),
            None => HashSet::new(),
        };
        if !missing_images.is_empty() {
            tracing::warn!(
                missing = missing_images.len(),
                "gallery images not found under asset root"
            );
        }

        Self {
            route: Route::Home,
            running: true,
            gallery,
            layout: config.layout,
            dataset_label: config.dataset.display().to_string(),
            asset_root: config.asset_root.clone(),
            missing_images,
            page_scroll: 0,
            status_message: None,
            status_history: VecDeque::with_capacity(STATUS_HISTORY_CAP),
            overlay: Overlay::None,
            jump_input: String::new(),
        }
    }

    pub fn layout_mode(&self, width: u16) -> LayoutMode {
        self.layout.mode_for_width(width)
    }

    pub fn image_status(&self, index: usize) -> ImageStatus {
        if self.asset_root.is_none() {
            ImageStatus::Unchecked
        } else if self.missing_images.contains(&index) {
            ImageStatus::Missing
        } else {
            ImageStatus::Present
        }
    }

    pub fn navigate(&mut self, route: Route) {
        if self.route != route {
            self.route = route;
            self.page_scroll = 0;
        }
    }

    /// Parse the jump prompt (1-based) and jump. The prompt is cleared either way.
    pub fn submit_jump(&mut self) {
        let input = std::mem::take(&mut self.jump_input);
        self.overlay = Overlay::None;

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return;
        }
        let Ok(position) = trimmed.parse::<i64>() else {
            self.set_warning(format!("Not a number: {trimmed}"));
            return;
        };
        let outcome = match position.checked_sub(1) {
            Some(index) => self.gallery.jump_to(index),
            None => JumpOutcome::Rejected {
                requested: position,
                len: self.gallery.len(),
            },
        };
        match outcome {
            JumpOutcome::Moved { to, .. } => self.announce_active(to),
            JumpOutcome::Unchanged => {}
            JumpOutcome::Rejected { len, .. } => {
                self.set_warning(format!("No image #{position} (gallery has {len})"));
            }
        }
    }

    pub fn announce_active(&mut self, index: usize) {
        if let Some(item) = self.gallery.items().get(index) {
            let msg = format!("{}/{}: {}", index + 1, self.gallery.len(), item.alt_text());
            self.set_status(msg);
        }
    }

    fn push_status(&mut self, message: String, level: StatusLevel) {
        self.status_history.push_front(StatusRecord {
            timestamp: chrono::Local::now().naive_local(),
            level,
            message: message.clone(),
        });
        if self.status_history.len() > STATUS_HISTORY_CAP {
            self.status_history.pop_back();
        }
        self.status_message = Some((message, level));
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.push_status(msg.into(), StatusLevel::Info);
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.push_status(msg.into(), StatusLevel::Warning);
    }
}
