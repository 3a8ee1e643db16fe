//! Gallery engine — an ordered, cyclic index over observation records.
//!
//! A [`Gallery`] owns the item sequence and the single `active_index`. Views
//! never keep their own counters: they call [`Gallery::render`] and draw the
//! returned projection. The sequence is fixed at construction.
//!
//! Navigation on an empty gallery is a no-op. Out-of-range jumps are rejected
//! without touching state and logged as a warning, since they only come from
//! caller defects.

pub mod view;

use crate::dataset::{Dataset, ObservationRecord};
use crate::paths::ImagePaths;

pub use view::{GalleryView, IndicatorState, SlideState, SlideView};

/// An observation record plus the display path of its image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub key: String,
    pub record: ObservationRecord,
    pub image_path: String,
}

impl GalleryItem {
    pub fn new(key: impl Into<String>, record: ObservationRecord, paths: &ImagePaths) -> Self {
        let key = key.into();
        let image_path = paths.derive(&key);
        Self {
            key,
            record,
            image_path,
        }
    }

    /// Text shown in place of the image when it cannot be displayed.
    pub fn alt_text(&self) -> &str {
        if self.record.target_name.is_empty() {
            &self.key
        } else {
            &self.record.target_name
        }
    }
}

/// Result of [`Gallery::jump_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    Moved { from: usize, to: usize },
    /// Target already active.
    Unchanged,
    /// Target outside `[0, len)`; state untouched.
    Rejected { requested: i64, len: usize },
}

impl JumpOutcome {
    pub fn is_rejected(self) -> bool {
        matches!(self, JumpOutcome::Rejected { .. })
    }
}

/// Cyclic carousel state: the items and the one active index.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    active_index: usize,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self {
            items,
            active_index: 0,
        }
    }

    /// Build one item per dataset entry, in dataset order.
    pub fn from_dataset(dataset: &Dataset, paths: &ImagePaths) -> Self {
        let items = dataset
            .iter()
            .map(|(key, record)| GalleryItem::new(key, record.clone(), paths))
            .collect();
        Self::new(items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// `None` when the gallery is empty.
    pub fn active_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.active_index)
    }

    pub fn active_item(&self) -> Option<&GalleryItem> {
        self.items.get(self.active_index)
    }

    pub fn advance(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.active_index = (self.active_index + 1) % len;
    }

    pub fn retreat(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.active_index = (self.active_index + len - 1) % len;
    }

    /// Make item `i` active. Targets outside `[0, len)` are rejected, not
    /// clamped or wrapped.
    pub fn jump_to(&mut self, i: i64) -> JumpOutcome {
        let len = self.items.len();
        let target = match usize::try_from(i) {
            Ok(t) if t < len => t,
            _ => {
                tracing::warn!(requested = i, len, "gallery jump out of range; ignored");
                return JumpOutcome::Rejected { requested: i, len };
            }
        };
        if target == self.active_index {
            return JumpOutcome::Unchanged;
        }
        let from = self.active_index;
        self.active_index = target;
        JumpOutcome::Moved { from, to: target }
    }

    pub fn first(&mut self) -> JumpOutcome {
        self.jump_to(0)
    }

    pub fn last(&mut self) -> JumpOutcome {
        self.jump_to(self.items.len() as i64 - 1)
    }

    /// Project the current state for both views.
    pub fn render(&self) -> GalleryView<'_> {
        view::project(&self.items, self.active_index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(keys: &[&str]) -> Gallery {
        let paths = ImagePaths::default();
        Gallery::new(
            keys.iter()
                .map(|k| GalleryItem::new(*k, ObservationRecord::default(), &paths))
                .collect(),
        )
    }

    fn active_key(g: &Gallery) -> &str {
        &g.active_item().unwrap().key
    }

    #[test]
    fn starts_at_zero() {
        let g = gallery(&["A", "B", "C"]);
        assert_eq!(g.active_index(), Some(0));
    }

    #[test]
    fn advance_wraps_forward() {
        let mut g = gallery(&["A", "B", "C"]);
        g.advance();
        assert_eq!(active_key(&g), "B");
        g.advance();
        assert_eq!(active_key(&g), "C");
        g.advance();
        assert_eq!(active_key(&g), "A");
        assert_eq!(g.active_index(), Some(0));
    }

    #[test]
    fn retreat_wraps_backward() {
        let mut g = gallery(&["A", "B", "C"]);
        g.retreat();
        assert_eq!(g.active_index(), Some(2));
        assert_eq!(active_key(&g), "C");
    }

    #[test]
    fn single_item_navigation_stays_put() {
        let mut g = gallery(&["only"]);
        g.advance();
        assert_eq!(g.active_index(), Some(0));
        g.retreat();
        assert_eq!(g.active_index(), Some(0));
    }

    #[test]
    fn empty_gallery_is_inert() {
        let mut g = gallery(&[]);
        g.advance();
        g.retreat();
        assert!(g.jump_to(0).is_rejected());
        assert!(g.jump_to(-1).is_rejected());
        assert!(g.last().is_rejected());
        assert_eq!(g.active_index(), None);
        assert!(g.active_item().is_none());
    }

    #[test]
    fn jump_in_range() {
        let mut g = gallery(&["A", "B", "C"]);
        assert_eq!(g.jump_to(2), JumpOutcome::Moved { from: 0, to: 2 });
        assert_eq!(g.active_index(), Some(2));
        assert_eq!(g.jump_to(2), JumpOutcome::Unchanged);
    }

    #[test]
    fn jump_out_of_range_rejected() {
        let mut g = gallery(&["A", "B", "C"]);
        g.advance();
        assert_eq!(
            g.jump_to(3),
            JumpOutcome::Rejected { requested: 3, len: 3 }
        );
        assert_eq!(
            g.jump_to(-1),
            JumpOutcome::Rejected { requested: -1, len: 3 }
        );
        assert_eq!(g.active_index(), Some(1));
    }

    #[test]
    fn first_and_last() {
        let mut g = gallery(&["A", "B", "C", "D"]);
        g.last();
        assert_eq!(active_key(&g), "D");
        g.first();
        assert_eq!(active_key(&g), "A");
    }

    #[test]
    fn from_dataset_keeps_order_and_paths() {
        let ds = Dataset::from_json_str(
            r#"{"NGC1068_NIRCam_2024-01-08": {"target_name": "NGC1068"}, "M82": {}}"#,
        )
        .unwrap();
        let g = Gallery::from_dataset(&ds, &ImagePaths::default());
        assert_eq!(g.len(), 2);
        assert_eq!(
            g.items()[0].image_path,
            "./processed_png/NGC1068_NIRCam_2024-01-08.png"
        );
        assert_eq!(g.items()[1].key, "M82");
    }

    #[test]
    fn alt_text_falls_back_to_key() {
        let paths = ImagePaths::default();
        let named = GalleryItem::new(
            "k1",
            ObservationRecord {
                target_name: "Jupiter".into(),
                ..Default::default()
            },
            &paths,
        );
        let unnamed = GalleryItem::new("k2", ObservationRecord::default(), &paths);
        assert_eq!(named.alt_text(), "Jupiter");
        assert_eq!(unnamed.alt_text(), "k2");
    }
}
