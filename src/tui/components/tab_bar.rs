//! # TabBar Component
//!
//! Top row of the shell: one entry per tab, the selected one highlighted.
//! Each entry shows the tab's stack depth when it is not at its root, so a
//! cross-tab jump that leaves another tab deep is visible at a glance.
//!
//! Stateless: all props are copied out of `AppNavigation` each frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

use crate::core::coordinator::AppNavigation;
use crate::core::tab::Tab;
use crate::tui::component::Component;

pub struct TabBar {
    pub selected: Tab,
    /// Stack depth per tab, in `Tab::ALL` order.
    pub depths: [usize; 4],
}

impl TabBar {
    pub fn new(nav: &AppNavigation) -> Self {
        Self {
            selected: nav.selected_tab(),
            depths: Tab::ALL.map(|tab| nav.depth(tab)),
        }
    }

    /// Label for one tab, e.g. `⌂ Home` or `▦ Catalog (2)`.
    pub fn label(tab: Tab, depth: usize) -> String {
        if depth == 0 {
            format!("{} {}", tab.icon(), tab.title())
        } else {
            format!("{} {} ({depth})", tab.icon(), tab.title())
        }
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = Tab::ALL
            .iter()
            .zip(self.depths)
            .map(|(tab, depth)| Line::from(Self::label(*tab, depth)))
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.selected.index())
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .divider("│");

        frame.render_widget(tabs, area);
    }
}
