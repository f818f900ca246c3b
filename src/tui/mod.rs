//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the selected
//! tab's visible screen and any overlay, and translates keyboard events into
//! core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The adapter subscribes to the `Navigator` through an mpsc channel. A frame
//! is drawn at startup, after any key event, and whenever the channel
//! reports a navigation change. Otherwise the loop sleeps in `poll`.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::Action;
use crate::core::config::ResolvedConfig;
use crate::core::coordinator::{AppNavigation, Change};
use crate::core::screen::overlay_screen;
use crate::core::state::Navigator;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Action),
    Quit,
}

/// TUI-specific presentation state (not part of core navigation state)
#[derive(Debug, Default)]
pub struct TuiState {
    /// Link cursor on the screen that receives key presses.
    pub selected_link: usize,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a TuiEvent into a Command, moving the cursor locally.
    pub fn handle_event(&mut self, event: TuiEvent, nav: &AppNavigation) -> Option<Command> {
        // Overlays are modal: the tab bar and stack shortcuts are inert
        // until they are dismissed.
        let overlay_up = overlay_screen(nav).is_some();
        match event {
            TuiEvent::Quit | TuiEvent::ForceQuit => Some(Command::Quit),
            TuiEvent::Resize => None,
            TuiEvent::SelectTab(tab) if !overlay_up => {
                Some(Command::Dispatch(Action::SelectTab(tab)))
            }
            TuiEvent::NextTab if !overlay_up => {
                Some(Command::Dispatch(Action::SelectTab(nav.selected_tab().next())))
            }
            TuiEvent::PrevTab if !overlay_up => {
                Some(Command::Dispatch(Action::SelectTab(nav.selected_tab().prev())))
            }
            TuiEvent::PopToRoot if !overlay_up => {
                Some(Command::Dispatch(Action::PopSelectedToRoot))
            }
            TuiEvent::SelectTab(_) | TuiEvent::NextTab | TuiEvent::PrevTab | TuiEvent::PopToRoot => {
                None
            }
            TuiEvent::CursorUp => {
                self.selected_link = self.selected_link.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                let count = ui::active_links(nav).len();
                if count > 0 {
                    self.selected_link = (self.selected_link + 1).min(count - 1);
                }
                None
            }
            TuiEvent::Submit => ui::active_links(nav)
                .into_iter()
                .nth(self.selected_link)
                .map(|link| {
                    info!("Activated link: {}", link.label);
                    Command::Dispatch(link.action)
                }),
            TuiEvent::Back => Some(Command::Dispatch(Action::Back)),
        }
    }

    /// Any navigation change shows a different screen; start at its first link.
    pub fn navigation_changed(&mut self, changes: &[Change]) {
        if !changes.is_empty() {
            self.selected_link = 0;
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Disambiguated escape codes let a bare Esc arrive without the
        // terminal's escape-sequence delay; ignored by terminals without it.
        execute!(
            stdout(),
            Hide,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, Show);
    }
}

pub fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let mut navigator = Navigator::from_config(config);
    let mut tui = TuiState::new();

    // Navigation changes flow back to the loop through this channel
    let (tx, rx) = mpsc::channel();
    navigator.subscribe(Box::new(tx));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    'event_loop: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, navigator.state(), &tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            match tui.handle_event(event, navigator.state()) {
                Some(Command::Quit) => break 'event_loop,
                Some(Command::Dispatch(action)) => {
                    navigator.dispatch(action);
                }
                None => {}
            }
        }

        while let Ok(changes) = rx.try_recv() {
            debug!("Event loop received: {:?}", changes);
            tui.navigation_changed(&changes);
            needs_redraw = true;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::StackAction;
    use crate::core::modal::AppModal;
    use crate::core::route::HomeRoute;
    use crate::core::tab::Tab;
    use crate::test_support::test_navigator;
    use std::sync::mpsc::Receiver;

    /// A navigator subscribed the way `run` does, plus the loop's receiver.
    fn subscribed_navigator() -> (Navigator, Receiver<Vec<Change>>) {
        let mut navigator = test_navigator();
        let (tx, rx) = mpsc::channel();
        navigator.subscribe(Box::new(tx));
        (navigator, rx)
    }

    /// Feed events through the TUI the way the event loop does.
    fn drive(
        navigator: &mut Navigator,
        rx: &Receiver<Vec<Change>>,
        tui: &mut TuiState,
        events: &[TuiEvent],
    ) {
        for event in events {
            if let Some(Command::Dispatch(action)) = tui.handle_event(*event, navigator.state()) {
                navigator.dispatch(action);
            }
            while let Ok(changes) = rx.try_recv() {
                tui.navigation_changed(&changes);
            }
        }
    }

    #[test]
    fn test_enter_activates_selected_link() {
        let (mut navigator, rx) = subscribed_navigator();
        let mut tui = TuiState::new();
        // Home root: "Product 123" is the first link, "Promotions" the second.
        drive(&mut navigator, &rx, &mut tui, &[TuiEvent::CursorDown, TuiEvent::Submit]);

        assert_eq!(navigator.state().home().path(), &[HomeRoute::Promotions]);
        assert_eq!(tui.selected_link, 0);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let (mut navigator, rx) = subscribed_navigator();
        let mut tui = TuiState::new();
        drive(&mut navigator, &rx, &mut tui, &[TuiEvent::CursorUp]);
        assert_eq!(tui.selected_link, 0);

        drive(&mut navigator, &rx, &mut tui, &[TuiEvent::SelectTab(Tab::Cart)]);
        drive(&mut navigator, &rx, &mut tui, &[TuiEvent::CursorDown, TuiEvent::CursorDown]);
        assert_eq!(tui.selected_link, 0);
    }

    #[test]
    fn test_checkout_flow() {
        let (mut navigator, rx) = subscribed_navigator();
        let mut tui = TuiState::new();
        drive(
            &mut navigator,
            &rx,
            &mut tui,
            &[TuiEvent::SelectTab(Tab::Cart), TuiEvent::Submit, TuiEvent::Submit],
        );
        assert_eq!(
            navigator.state().cart().ids(),
            vec!["checkout", "confirmed-12345"]
        );
    }

    #[test]
    fn test_tab_keys_inert_under_overlay() {
        let mut navigator = test_navigator();
        navigator.dispatch(Action::Home(StackAction::PresentModal(AppModal::Login)));
        let mut tui = TuiState::new();

        assert_eq!(tui.handle_event(TuiEvent::NextTab, navigator.state()), None);
        assert_eq!(tui.handle_event(TuiEvent::PopToRoot, navigator.state()), None);
        // The overlay's only link is its close button.
        assert_eq!(
            tui.handle_event(TuiEvent::Submit, navigator.state()),
            Some(Command::Dispatch(Action::Back))
        );
    }

    #[test]
    fn test_back_and_quit() {
        let nav = AppNavigation::new();
        let mut tui = TuiState::new();
        assert_eq!(
            tui.handle_event(TuiEvent::Back, &nav),
            Some(Command::Dispatch(Action::Back))
        );
        assert_eq!(tui.handle_event(TuiEvent::ForceQuit, &nav), Some(Command::Quit));
    }

    #[test]
    fn test_prev_tab_wraps() {
        let nav = AppNavigation::new();
        let mut tui = TuiState::new();
        assert_eq!(
            tui.handle_event(TuiEvent::PrevTab, &nav),
            Some(Command::Dispatch(Action::SelectTab(Tab::Profile)))
        );
    }
}
