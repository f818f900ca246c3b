//! # Application State
//!
//! `Navigator` is the single mutation point of the shell. It owns the
//! navigation state and the observers that want to hear about it.
//!
//! ```text
//! Navigator
//! ├── nav: AppNavigation                       // tabs, stacks, overlays
//! └── observers: Vec<Box<dyn NavigationObserver>>
//! ```
//!
//! State changes only happen through `dispatch(action)`, which runs
//! `update()` from action.rs and then notifies every observer, in
//! registration order, before returning.

use log::{debug, info, warn};
use std::sync::mpsc::Sender;

use crate::core::action::{Action, update};
use crate::core::config::ResolvedConfig;
use crate::core::coordinator::{AppNavigation, Change};
use crate::core::deep_link;
use crate::core::modal::FullScreenCover;

/// Receives every effective state transition, synchronously.
pub trait NavigationObserver {
    fn navigation_changed(&mut self, nav: &AppNavigation, changes: &[Change]);
}

/// Lets a renderer subscribe through a channel and drain changes on its own
/// loop.
impl NavigationObserver for Sender<Vec<Change>> {
    fn navigation_changed(&mut self, _nav: &AppNavigation, changes: &[Change]) {
        if self.send(changes.to_vec()).is_err() {
            warn!("Failed to notify navigation observer: receiver dropped");
        }
    }
}

#[derive(Default)]
pub struct Navigator {
    nav: AppNavigation,
    observers: Vec<Box<dyn NavigationObserver>>,
}

impl Navigator {
    pub fn new(nav: AppNavigation) -> Self {
        Self {
            nav,
            observers: Vec::new(),
        }
    }

    /// Builds the startup state: start tab, onboarding cover, then the
    /// configured deep links in order. Invalid links are logged and skipped.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut navigator = Self::new(AppNavigation::starting_on(config.start_tab));
        if config.show_onboarding {
            navigator.dispatch(Action::PresentCover(FullScreenCover::Onboarding));
        }
        for link in &config.deep_links {
            match deep_link::parse(link) {
                Ok(action) => {
                    info!("Opening deep link: {}", link);
                    navigator.dispatch(action);
                }
                Err(e) => warn!("Skipping deep link {:?}: {}", link, e),
            }
        }
        navigator
    }

    pub fn subscribe(&mut self, observer: Box<dyn NavigationObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &AppNavigation {
        &self.nav
    }

    /// Applies `action` and notifies observers. Returns the change list;
    /// observers are not called when it is empty.
    pub fn dispatch(&mut self, action: Action) -> Vec<Change> {
        debug!("Dispatching {:?}", action);
        let changes = update(&mut self.nav, action);
        if changes.is_empty() {
            debug!("No-op");
            return changes;
        }
        debug!("Changed: {:?}", changes);
        for observer in self.observers.iter_mut() {
            observer.navigation_changed(&self.nav, &changes);
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::StackAction;
    use crate::core::route::HomeRoute;
    use crate::core::tab::Tab;
    use crate::test_support::{RecordingObserver, test_config};
    use std::sync::mpsc;

    #[test]
    fn test_observers_notified_in_order_after_mutation() {
        let mut navigator = Navigator::default();
        let (first, first_log) = RecordingObserver::new("first");
        let (second, second_log) = RecordingObserver::new("second");
        navigator.subscribe(Box::new(first));
        navigator.subscribe(Box::new(second));

        navigator.dispatch(Action::Home(StackAction::Push(HomeRoute::Promotions)));

        // Each observer saw the state after the push.
        assert_eq!(first_log.borrow().as_slice(), &[("first", 1, vec![Change::StackChanged(Tab::Home)])]);
        assert_eq!(second_log.borrow().len(), 1);
        assert_eq!(second_log.borrow()[0].1, 1);
    }

    #[test]
    fn test_noop_does_not_notify() {
        let mut navigator = Navigator::default();
        let (observer, log) = RecordingObserver::new("only");
        navigator.subscribe(Box::new(observer));

        assert!(navigator.dispatch(Action::Back).is_empty());
        assert!(navigator.dispatch(Action::SelectTab(Tab::Home)).is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_repeated_product_link_notifies_once() {
        let mut navigator = Navigator::default();
        let (observer, log) = RecordingObserver::new("only");
        navigator.subscribe(Box::new(observer));

        navigator.dispatch(Action::NavigateToProduct("999".into()));
        let before = navigator.state().clone();
        assert!(navigator.dispatch(Action::NavigateToProduct("999".into())).is_empty());

        assert_eq!(navigator.state(), &before);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_channel_observer_receives_changes() {
        let mut navigator = Navigator::default();
        let (tx, rx) = mpsc::channel();
        navigator.subscribe(Box::new(tx));

        navigator.dispatch(Action::NavigateToCart);
        assert_eq!(rx.try_recv(), Ok(vec![Change::TabSelected]));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_from_config_applies_startup_actions() {
        let mut config = test_config();
        config.start_tab = Tab::Profile;
        config.show_onboarding = true;
        config.deep_links = vec!["bogus".into(), "product/999".into(), "modal/login".into()];

        let navigator = Navigator::from_config(&config);
        let nav = navigator.state();
        assert_eq!(nav.selected_tab(), Tab::Home);
        assert_eq!(nav.home().ids(), vec!["product-999"]);
        assert_eq!(nav.full_screen_cover(), Some(&FullScreenCover::Onboarding));
        assert!(nav.global_modal().is_some());
    }

    #[test]
    fn test_from_config_without_links_keeps_start_tab() {
        let mut config = test_config();
        config.start_tab = Tab::Catalog;
        let navigator = Navigator::from_config(&config);
        assert_eq!(navigator.state().selected_tab(), Tab::Catalog);
        assert!(navigator.state().full_screen_cover().is_none());
    }
}
