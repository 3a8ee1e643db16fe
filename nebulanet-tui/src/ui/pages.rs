//! Static text pages — About, Sources, Telescope.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use nebulanet_core::site::{
    Section, ABOUT, FOOTER_CREDITS, FOOTER_MOTTO, FOOTER_RIGHTS, SOURCES, TELESCOPE,
    TELESCOPE_MODEL,
};

use crate::theme;

pub fn render_about(f: &mut Frame, area: Rect, scroll: u16) {
    render_lines(f, area, about_lines(), scroll);
}

pub fn render_sources(f: &mut Frame, area: Rect, scroll: u16) {
    render_lines(f, area, sources_lines(), scroll);
}

pub fn render_telescope(f: &mut Frame, area: Rect, scroll: u16) {
    render_lines(f, area, telescope_lines(), scroll);
}

fn render_lines(f: &mut Frame, area: Rect, mut lines: Vec<Line<'static>>, scroll: u16) {
    lines.extend(footer_lines());
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0));
    f.render_widget(para, area);
}

fn section_lines(sections: &[Section]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for section in sections {
        lines.push(Line::from(Span::styled(
            section.heading,
            theme::highlight().add_modifier(Modifier::BOLD),
        )));
        for paragraph in section.paragraphs {
            lines.push(Line::from(Span::styled(*paragraph, theme::text())));
            lines.push(Line::from(""));
        }
    }
    lines
}

fn footer_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(""), Line::from(Span::styled("─".repeat(40), theme::muted()))];
    for credit in FOOTER_CREDITS {
        lines.push(Line::from(Span::styled(*credit, theme::label())));
    }
    lines.push(Line::from(Span::styled(
        FOOTER_MOTTO,
        theme::highlight().add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(Span::styled(FOOTER_RIGHTS, theme::muted())));
    lines
}

pub fn about_lines() -> Vec<Line<'static>> {
    section_lines(ABOUT)
}

pub fn sources_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for group in SOURCES {
        lines.push(Line::from(Span::styled(
            group.module,
            theme::highlight().add_modifier(Modifier::BOLD),
        )));
        for topic in group.topics {
            lines.push(Line::from(Span::styled(
                format!("  {}", topic.topic),
                theme::accent(),
            )));
            for link in topic.links {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {}: ", link.label), theme::label()),
                    Span::styled(link.url, theme::muted().add_modifier(Modifier::UNDERLINED)),
                ]));
            }
        }
        lines.push(Line::from(""));
    }
    lines
}

pub fn telescope_lines() -> Vec<Line<'static>> {
    let mut lines = section_lines(TELESCOPE);
    lines.push(Line::from(vec![
        Span::styled("Model asset: ", theme::label()),
        Span::styled(TELESCOPE_MODEL, theme::accent()),
    ]));
    lines.push(Line::from(Span::styled(
        "Open the site in a browser to use the interactive 3D viewer.",
        theme::muted(),
    )));
    lines
}
