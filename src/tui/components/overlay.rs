//! # Overlay Component
//!
//! Draws the top-most presented overlay over the tab content. Full-screen
//! covers take the whole frame; sheets (global or per-tab) are a centered
//! popup. The underlying content is cleared first.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Color;
use ratatui::widgets::Clear;

use crate::core::screen::{OverlayKind, Screen};
use crate::tui::component::Component;
use crate::tui::components::ScreenView;

pub struct Overlay<'a> {
    pub kind: OverlayKind,
    pub screen: &'a Screen,
    pub selected: usize,
}

impl<'a> Overlay<'a> {
    pub fn new(kind: OverlayKind, screen: &'a Screen, selected: usize) -> Self {
        Self {
            kind,
            screen,
            selected,
        }
    }

    /// Where the overlay goes inside `area`.
    pub fn area(&self, area: Rect) -> Rect {
        match self.kind {
            OverlayKind::Cover => area,
            OverlayKind::GlobalModal | OverlayKind::TabModal(_) => centered_rect(60, 50, area),
        }
    }
}

impl Component for Overlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = self.area(area);
        frame.render_widget(Clear, overlay);

        let color = match self.kind {
            OverlayKind::Cover => Color::Blue,
            OverlayKind::GlobalModal => Color::Yellow,
            OverlayKind::TabModal(_) => Color::Magenta,
        };
        ScreenView::new(self.screen, Some(self.selected))
            .border_color(color)
            .render(frame, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
