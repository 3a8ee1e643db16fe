//! Compact carousel — the narrow-terminal presentation of the active slide.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use nebulanet_core::gallery::GalleryView;

use crate::app::ImageStatus;
use crate::theme::Theme;

pub struct CompactCarousel<'a> {
    view: &'a GalleryView<'a>,
    image_status: ImageStatus,
    theme: &'a Theme,
}

impl<'a> CompactCarousel<'a> {
    pub fn new(view: &'a GalleryView<'a>, image_status: ImageStatus, theme: &'a Theme) -> Self {
        Self {
            view,
            image_status,
            theme,
        }
    }
}

impl<'a> Widget for CompactCarousel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(slide) = self.view.active() else {
            Paragraph::new("No observations to show.")
                .style(Style::default().fg(self.theme.muted))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        };
        let item = slide.item;
        let r = &item.record;

        let image_line = match self.image_status {
            ImageStatus::Missing => Span::styled(
                format!("[ image unavailable: {} ]", item.alt_text()),
                Style::default().fg(self.theme.warning),
            ),
            ImageStatus::Present | ImageStatus::Unchecked => Span::styled(
                item.image_path.clone(),
                Style::default().fg(self.theme.muted),
            ),
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("◀ ", Style::default().fg(self.theme.muted)),
                Span::styled(
                    item.alt_text().to_string(),
                    Style::default()
                        .fg(self.theme.highlight)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ▶", Style::default().fg(self.theme.muted)),
            ]),
            Line::from(Span::styled(
                format!(
                    "{}/{} · {} · {}",
                    slide.index + 1,
                    self.view.slides().len(),
                    r.target_classification,
                    r.instrument_name
                ),
                Style::default().fg(self.theme.text_secondary),
            )),
            Line::from(image_line),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
