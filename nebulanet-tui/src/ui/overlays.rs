//! Overlay widgets — help, jump prompt, message history.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::{AppState, StatusLevel};
use crate::input::KEY_BINDINGS;
use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keys ")
        .title_style(theme::accent_bold());

    let mut lines = vec![Line::from("")];
    for (keys, action) in KEY_BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<20}"), theme::highlight()),
            Span::styled(*action, theme::text()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Esc to close", theme::muted())));

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

pub fn render_jump(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(40, 20, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" Jump to image (1-{}) ", app.gallery.len()))
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  # ", theme::muted()),
            Span::styled(app.jump_input.as_str(), theme::text()),
            Span::styled("_", theme::accent()),
        ]),
        Line::from(""),
        Line::from(Span::styled("  Enter to jump, Esc to cancel", theme::muted())),
    ];

    f.render_widget(Paragraph::new(text).block(block), popup);
}

pub fn render_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" Messages ({}) [Esc]close ", app.status_history.len()))
        .title_style(theme::accent());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.status_history.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No messages yet.", theme::muted())),
            inner,
        );
        return;
    }

    let lines: Vec<Line> = app
        .status_history
        .iter()
        .take(inner.height as usize)
        .map(|record| {
            let level_style = match record.level {
                StatusLevel::Info => theme::accent(),
                StatusLevel::Warning => theme::warning().add_modifier(Modifier::BOLD),
            };
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", record.timestamp.format("%H:%M:%S")),
                    theme::muted(),
                ),
                Span::styled(format!("[{}] ", record.level.label()), level_style),
                Span::styled(record.message.as_str(), theme::text()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
