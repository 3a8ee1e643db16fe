//! Render projection shared by the slider and the indicator strip.
//!
//! Every item appears in the projection; inactive slides are marked hidden
//! rather than dropped so a renderer can transition between them.

use super::GalleryItem;

/// Primary slider state of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideState {
    Visible,
    Hidden,
}

/// Indicator dot decoration of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideView<'a> {
    pub index: usize,
    pub item: &'a GalleryItem,
    pub slide: SlideState,
    pub indicator: IndicatorState,
}

impl SlideView<'_> {
    pub fn is_active(&self) -> bool {
        self.slide == SlideState::Visible
    }
}

/// Output of [`super::Gallery::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView<'a> {
    /// No items to show.
    Placeholder,
    Slides {
        active_index: usize,
        slides: Vec<SlideView<'a>>,
    },
}

impl<'a> GalleryView<'a> {
    pub fn slides(&self) -> &[SlideView<'a>] {
        match self {
            GalleryView::Placeholder => &[],
            GalleryView::Slides { slides, .. } => slides,
        }
    }

    pub fn active(&self) -> Option<&SlideView<'a>> {
        match self {
            GalleryView::Placeholder => None,
            GalleryView::Slides {
                active_index,
                slides,
            } => slides.get(*active_index),
        }
    }

    pub fn active_count(&self) -> usize {
        self.slides().iter().filter(|s| s.is_active()).count()
    }
}

pub(super) fn project(items: &[GalleryItem], active: Option<usize>) -> GalleryView<'_> {
    let Some(active_index) = active else {
        return GalleryView::Placeholder;
    };
    let slides = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let on = index == active_index;
            SlideView {
                index,
                item,
                slide: if on { SlideState::Visible } else { SlideState::Hidden },
                indicator: if on {
                    IndicatorState::Active
                } else {
                    IndicatorState::Inactive
                },
            }
        })
        .collect();
    GalleryView::Slides {
        active_index,
        slides,
    }
}
