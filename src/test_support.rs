//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::config::{DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL, ResolvedConfig};
use crate::core::coordinator::{AppNavigation, Change};
use crate::core::state::{NavigationObserver, Navigator};
use crate::core::tab::Tab;

/// (observer name, home stack depth at notification time, changes)
pub type Recorded = Vec<(&'static str, usize, Vec<Change>)>;

/// Observer that records every notification into a shared log.
pub struct RecordingObserver {
    name: &'static str,
    log: Rc<RefCell<Recorded>>,
}

impl RecordingObserver {
    pub fn new(name: &'static str) -> (Self, Rc<RefCell<Recorded>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                name,
                log: Rc::clone(&log),
            },
            log,
        )
    }
}

impl NavigationObserver for RecordingObserver {
    fn navigation_changed(&mut self, nav: &AppNavigation, changes: &[Change]) {
        self.log
            .borrow_mut()
            .push((self.name, nav.depth(Tab::Home), changes.to_vec()));
    }
}

/// A resolved config with every default and no startup links.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        start_tab: Tab::Home,
        show_onboarding: false,
        deep_links: Vec::new(),
        log_level: DEFAULT_LOG_LEVEL,
        log_file: DEFAULT_LOG_FILE.to_string(),
    }
}

/// Creates a fresh Navigator on the home tab.
pub fn test_navigator() -> Navigator {
    Navigator::from_config(&test_config())
}
