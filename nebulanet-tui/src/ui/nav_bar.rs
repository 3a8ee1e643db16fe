//! Top navigation bar — site name and one tab per route.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use nebulanet_core::site::SITE_NAME;
use nebulanet_core::Route;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Paragraph::new(nav_line(app.route)), area);
}

pub fn nav_line(active: Route) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!(" {SITE_NAME} "), theme::highlight().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
    ];
    for route in Route::ALL {
        let label = format!(" {}:{} ", route.index() + 1, route.label());
        let style = if route == active {
            theme::accent_bold().add_modifier(Modifier::REVERSED)
        } else {
            theme::muted()
        };
        spans.push(Span::styled(label, style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_has_a_tab() {
        let line = nav_line(Route::Sources);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        for route in Route::ALL {
            assert!(text.contains(route.label()));
        }
        assert!(text.contains("NebulaNet"));
    }

    #[test]
    fn active_tab_is_reversed() {
        let line = nav_line(Route::About);
        let about = line
            .spans
            .iter()
            .find(|s| s.content.contains("About"))
            .unwrap();
        assert!(about.style.add_modifier.contains(Modifier::REVERSED));
        let home = line
            .spans
            .iter()
            .find(|s| s.content.contains("Home"))
            .unwrap();
        assert!(!home.style.add_modifier.contains(Modifier::REVERSED));
    }
}
