//! Indicator strip — one dot per slide, the active one lit.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use nebulanet_core::gallery::{GalleryView, IndicatorState};

use crate::theme::Theme;

const ACTIVE_DOT: &str = "●";
const INACTIVE_DOT: &str = "○";
/// Each dot plus its separating space.
const DOT_WIDTH: usize = 2;

pub struct IndicatorStrip<'a> {
    view: &'a GalleryView<'a>,
    theme: &'a Theme,
}

impl<'a> IndicatorStrip<'a> {
    pub fn new(view: &'a GalleryView<'a>, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    /// Dots visible in `width` columns, windowed so the active dot stays on
    /// screen. Elided ends are marked with `‹` / `›`.
    fn line(&self, width: u16) -> Line<'a> {
        let slides = self.view.slides();
        if slides.is_empty() {
            return Line::from("");
        }

        let capacity = (usize::from(width) / DOT_WIDTH).max(1);
        if slides.len() > capacity && capacity < 3 {
            // No room for elision markers: the active dot alone.
            return Line::from(Span::styled(ACTIVE_DOT, Style::default().fg(self.theme.accent)));
        }
        let (start, end) = if slides.len() <= capacity {
            (0, slides.len())
        } else {
            // Reserve room for the two elision markers.
            let room = capacity.saturating_sub(2).max(1);
            let active = self.view.active().map_or(0, |s| s.index);
            let start = active.saturating_sub(room / 2).min(slides.len() - room);
            (start, start + room)
        };

        let mut spans = Vec::with_capacity(end - start + 2);
        if start > 0 {
            spans.push(Span::styled("‹ ", Style::default().fg(self.theme.muted)));
        }
        for slide in &slides[start..end] {
            let (symbol, color) = match slide.indicator {
                IndicatorState::Active => (ACTIVE_DOT, self.theme.accent),
                IndicatorState::Inactive => (INACTIVE_DOT, self.theme.muted),
            };
            spans.push(Span::styled(format!("{symbol} "), Style::default().fg(color)));
        }
        if end < slides.len() {
            spans.push(Span::styled("›", Style::default().fg(self.theme.muted)));
        }
        Line::from(spans)
    }
}

impl<'a> Widget for IndicatorStrip<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = self.line(area.width);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
