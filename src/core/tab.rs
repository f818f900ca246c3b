//! # Tabs
//!
//! The four top-level sections of the shell. Each tab owns its own
//! navigation stack (see [`crate::core::stack`]); the tab itself only
//! carries presentation metadata.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Catalog,
    Cart,
    Profile,
}

impl Tab {
    /// All tabs in tab bar order.
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Catalog, Tab::Cart, Tab::Profile];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Catalog => "Catalog",
            Tab::Cart => "Cart",
            Tab::Profile => "Profile",
        }
    }

    /// Icon glyph shown next to the title in the tab bar.
    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Home => "⌂",
            Tab::Catalog => "▦",
            Tab::Cart => "◫",
            Tab::Profile => "☺",
        }
    }

    /// Stable lowercase name, also used in deep links and config.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Catalog => "catalog",
            Tab::Cart => "cart",
            Tab::Profile => "profile",
        }
    }

    pub fn from_name(name: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.name() == name)
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Catalog => 1,
            Tab::Cart => 2,
            Tab::Profile => 3,
        }
    }

    /// Next tab in bar order, wrapping around.
    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// Previous tab in bar order, wrapping around.
    pub fn prev(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
