//! Top-level UI layout — nav bar, active page, status bar, overlays.

pub mod carousel;
pub mod home;
pub mod indicators;
pub mod nav_bar;
pub mod overlays;
pub mod pages;
pub mod slider;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};

use nebulanet_core::Route;

use crate::app::{AppState, Overlay};
use crate::theme::{self, Theme};

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let background = Block::default().style(Style::default().bg(Theme::default().background));
    f.render_widget(background, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let nav_area = chunks[0];
    let main_area = chunks[1];
    let status_area = chunks[2];

    nav_bar::render(f, nav_area, app);
    draw_page(f, main_area, app);
    status_bar::render(f, status_area, app);

    match app.overlay {
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::Jump => overlays::render_jump(f, main_area, app),
        Overlay::History => overlays::render_history(f, main_area, app),
        Overlay::None => {}
    }
}

fn draw_page(f: &mut Frame, area: Rect, app: &AppState) {
    let route = app.route;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", route.label(), route.index() + 1))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match route {
        Route::Home => home::render(f, inner, app),
        Route::About => pages::render_about(f, inner, app.page_scroll),
        Route::Sources => pages::render_sources(f, inner, app.page_scroll),
        Route::Telescope => pages::render_telescope(f, inner, app.page_scroll),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
