use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::coordinator::AppNavigation;
use crate::core::screen::{Link, overlay_screen, visible_screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Overlay, ScreenView, TabBar};

const HELP_TEXT: &str = " 1-4 Tabs  ↑↓ Move  Enter Open  Esc Back  r Root  q Quit ";

pub fn draw_ui(frame: &mut Frame, nav: &AppNavigation, tui: &TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(2), Min(0), Length(1)]);
    let full_area = frame.area();
    let [tab_area, main_area, help_area] = layout.areas(full_area);

    TabBar::new(nav).render(frame, tab_area);

    let overlay = overlay_screen(nav);
    // The cursor belongs to whichever screen receives key presses.
    let content_cursor = if overlay.is_some() {
        None
    } else {
        Some(tui.selected_link)
    };
    let screen = visible_screen(nav);
    ScreenView::new(&screen, content_cursor).render(frame, main_area);

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some((kind, presented)) = &overlay {
        Overlay::new(*kind, presented, tui.selected_link).render(frame, full_area);
    }
}

/// Links of the screen that currently receives key presses: the top-most
/// overlay if any, else the selected tab's visible screen.
pub fn active_links(nav: &AppNavigation) -> Vec<Link> {
    match overlay_screen(nav) {
        Some((_, screen)) => screen.links,
        None => visible_screen(nav).links,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::modal::FullScreenCover;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(nav: &AppNavigation, tui: &TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, nav, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_root_shows_tabs_and_links() {
        let nav = AppNavigation::new();
        let text = render(&nav, &TuiState::new());
        for title in ["Home", "Catalog", "Cart", "Profile"] {
            assert!(text.contains(title), "missing tab {title}");
        }
        assert!(text.contains("Product 123"));
        assert!(text.contains("Path count: 0"));
    }

    #[test]
    fn test_draw_follows_selected_tab() {
        let mut nav = AppNavigation::new();
        update(&mut nav, Action::NavigateToProduct("999".into()));
        let text = render(&nav, &TuiState::new());
        assert!(text.contains("Product 999"));
        assert!(text.contains("Add to cart and go"));
        assert!(text.contains("Home (1)"));
    }

    #[test]
    fn test_draw_cover_over_content() {
        let mut nav = AppNavigation::new();
        update(&mut nav, Action::PresentCover(FullScreenCover::Onboarding));
        let text = render(&nav, &TuiState::new());
        assert!(text.contains("Welcome!"));
        assert!(text.contains("Start"));
    }

    #[test]
    fn test_active_links_prefer_overlay() {
        let mut nav = AppNavigation::new();
        assert!(active_links(&nav).len() > 1);
        update(&mut nav, Action::PresentCover(FullScreenCover::Camera));
        let links = active_links(&nav);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].action, Action::Back);
    }
}
