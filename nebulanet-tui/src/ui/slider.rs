//! Primary slider — the wide, desktop-style view of the active observation.
//!
//! Shows an image frame (path, or fallback text when the file is missing)
//! and the full metadata card for the visible slide.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use nebulanet_core::gallery::{GalleryView, SlideView};

use crate::app::ImageStatus;
use crate::theme::Theme;

pub struct Slider<'a> {
    view: &'a GalleryView<'a>,
    image_status: ImageStatus,
    theme: &'a Theme,
}

impl<'a> Slider<'a> {
    pub fn new(view: &'a GalleryView<'a>, image_status: ImageStatus, theme: &'a Theme) -> Self {
        Self {
            view,
            image_status,
            theme,
        }
    }

    fn key_value(&self, key: &str, value: String) -> Line<'a> {
        Line::from(vec![
            Span::styled(
                format!("{key:>14}: "),
                Style::default().fg(self.theme.text_secondary),
            ),
            Span::styled(value, Style::default().fg(self.theme.text_primary)),
        ])
    }

    fn image_frame(&self, slide: &SlideView<'a>) -> Paragraph<'a> {
        let item = slide.item;
        let mut lines = vec![Line::from("")];
        match self.image_status {
            ImageStatus::Missing => {
                lines.push(Line::from(Span::styled(
                    format!("[ image unavailable: {} ]", item.alt_text()),
                    Style::default().fg(self.theme.warning),
                )));
            }
            ImageStatus::Present | ImageStatus::Unchecked => {
                lines.push(Line::from(Span::styled(
                    format!("[ {} ]", item.alt_text()),
                    Style::default()
                        .fg(self.theme.highlight)
                        .add_modifier(Modifier::BOLD),
                )));
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            item.image_path.clone(),
            Style::default().fg(self.theme.muted),
        )));

        Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.muted)),
            )
    }

    fn metadata(&self, slide: &SlideView<'a>) -> Vec<Line<'a>> {
        let r = &slide.item.record;
        let mut lines = vec![
            Line::from(Span::styled(
                r.obs_title.clone(),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("{:>14}: ", "Classification"),
                    Style::default().fg(self.theme.text_secondary),
                ),
                Span::styled(
                    r.target_classification.clone(),
                    Style::default().fg(self.theme.classification_color(&r.target_classification)),
                ),
            ]),
            self.key_value("Instrument", r.instrument_name.clone()),
            self.key_value("Filters", r.filter_list().join(", ")),
            self.key_value("Exposure", r.exposure_time.clone()),
            self.key_value("Start", r.start_time.clone()),
            self.key_value("End", r.end_time.clone()),
            self.key_value("Parent obsid", r.parent_obsid.clone()),
            self.key_value("Calib level", r.calib_level.to_string()),
            self.key_value("File", r.file_name.clone()),
            self.key_value("Size", r.size_display()),
            self.key_value("FITS", r.fits_url.clone()),
        ];
        let keywords = r.keyword_list();
        if !keywords.is_empty() {
            lines.push(self.key_value("Keywords", keywords.join(" · ")));
        }
        if !r.description.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                r.description.clone(),
                Style::default().fg(self.theme.text_secondary),
            )));
        }
        lines
    }
}

impl<'a> Widget for Slider<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(slide) = self.view.active() else {
            Paragraph::new(Line::from(Span::styled(
                "No observations to show.",
                Style::default().fg(self.theme.muted),
            )))
            .render(area, buf);
            return;
        };

        let total = self.view.slides().len();
        let title = format!(
            " ◀ {}/{}  {} ▶ ",
            slide.index + 1,
            total,
            slide.item.alt_text()
        );
        let block = Block::default()
            .title(title)
            .title_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent));
        let inner = block.inner(area);
        block.render(area, buf);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(inner);

        self.image_frame(slide).render(cols[0], buf);
        Paragraph::new(self.metadata(slide))
            .wrap(Wrap { trim: true })
            .render(cols[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{buffer_text, sample_gallery};

    #[test]
    fn renders_active_slide_metadata() {
        let theme = Theme::default();
        let mut gallery = sample_gallery();
        gallery.advance();
        let view = gallery.render();

        let area = Rect::new(0, 0, 140, 24);
        let mut buf = Buffer::empty(area);
        Slider::new(&view, ImageStatus::Unchecked, &theme).render(area, &mut buf);

        let content = buffer_text(&buf);
        assert!(content.contains("2/3"));
        assert!(content.contains("M82"));
        assert!(content.contains("./processed_png/M82_NIRCam_2023-12-30.png"));
        assert!(content.contains("F164N"));
        assert!(!content.contains("NGC1068"));
    }

    #[test]
    fn missing_image_shows_fallback() {
        let theme = Theme::default();
        let gallery = sample_gallery();
        let view = gallery.render();

        let area = Rect::new(0, 0, 140, 24);
        let mut buf = Buffer::empty(area);
        Slider::new(&view, ImageStatus::Missing, &theme).render(area, &mut buf);

        assert!(buffer_text(&buf).contains("image unavailable: NGC1068"));
    }

    #[test]
    fn unnamed_record_titled_by_key() {
        let theme = Theme::default();
        let gallery = crate::test_helpers::gallery_of(2);
        let view = gallery.render();

        let area = Rect::new(0, 0, 140, 12);
        let mut buf = Buffer::empty(area);
        Slider::new(&view, ImageStatus::Unchecked, &theme).render(area, &mut buf);

        let first_row = buffer_text(&buf).lines().next().unwrap_or_default().to_string();
        assert!(first_row.contains("1/2  obs_0"));
    }

    #[test]
    fn empty_view_shows_placeholder() {
        let theme = Theme::default();
        let view = GalleryView::Placeholder;

        let area = Rect::new(0, 0, 60, 5);
        let mut buf = Buffer::empty(area);
        Slider::new(&view, ImageStatus::Unchecked, &theme).render(area, &mut buf);

        assert!(buffer_text(&buf).contains("No observations"));
    }
}
