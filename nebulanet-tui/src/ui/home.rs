//! Home page — landing header plus the gallery.
//!
//! The layout mode is recomputed from the viewport width on every frame, so a
//! resize only changes presentation. Both gallery widgets draw from one
//! `Gallery::render()` projection.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use nebulanet_core::site::{FOOTER_MOTTO, FOOTER_RIGHTS, LANDING_TAGLINE, LANDING_TITLE};
use nebulanet_core::LayoutMode;

use crate::app::{AppState, ImageStatus};
use crate::theme::{self, Theme};
use crate::ui::carousel::CompactCarousel;
use crate::ui::indicators::IndicatorStrip;
use crate::ui::slider::Slider;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mode = app.layout_mode(f.area().width);
    let theme = Theme::default();
    let view = app.gallery.render();
    let image_status = app
        .gallery
        .active_index()
        .map_or(ImageStatus::Unchecked, |i| app.image_status(i));

    let (header_height, footer_height) = match mode {
        LayoutMode::Wide => (3, 1),
        LayoutMode::Compact => (1, 0),
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(footer_height),
        ])
        .split(area);

    f.render_widget(header(mode, &app.dataset_label, app.gallery.len()), chunks[0]);

    match mode {
        LayoutMode::Wide => {
            f.render_widget(Slider::new(&view, image_status, &theme), chunks[1]);
        }
        LayoutMode::Compact => {
            f.render_widget(CompactCarousel::new(&view, image_status, &theme), chunks[1]);
        }
    }
    f.render_widget(IndicatorStrip::new(&view, &theme), chunks[2]);

    if mode == LayoutMode::Wide {
        let footer = Line::from(vec![
            Span::styled(FOOTER_MOTTO, theme::label()),
            Span::styled("  ·  ", theme::muted()),
            Span::styled(FOOTER_RIGHTS, theme::muted()),
        ]);
        f.render_widget(Paragraph::new(footer).alignment(Alignment::Center), chunks[3]);
    }
}

fn header(mode: LayoutMode, dataset_label: &str, count: usize) -> Paragraph<'static> {
    let title = Line::from(Span::styled(LANDING_TITLE, theme::highlight()));
    let lines = match mode {
        LayoutMode::Compact => vec![title],
        LayoutMode::Wide => vec![
            title,
            Line::from(Span::styled(LANDING_TAGLINE, theme::label())),
            Line::from(Span::styled(
                format!("{count} observations from {dataset_label}"),
                theme::muted(),
            )),
        ],
    };
    Paragraph::new(lines).alignment(Alignment::Center)
}
