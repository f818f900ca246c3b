//! # App Coordinator
//!
//! `AppNavigation` owns everything navigational in the shell:
//!
//! ```text
//! AppNavigation
//! ├── selected_tab: Tab
//! ├── home: NavigationStack<HomeRoute>
//! ├── catalog: NavigationStack<CatalogRoute>
//! ├── cart: NavigationStack<CartRoute>
//! ├── profile: NavigationStack<ProfileRoute>
//! ├── global_modal: Option<AppModal>
//! └── full_screen_cover: Option<FullScreenCover>
//! ```
//!
//! The four stacks are created with the coordinator and never replaced.
//! Cross-tab operations (`navigate_to_product`, `navigate_to_cart`) live here
//! because they touch more than one slot.

use serde::Serialize;

use crate::core::modal::{AppModal, FullScreenCover};
use crate::core::route::{CartRoute, CatalogRoute, HomeRoute, ProfileRoute};
use crate::core::stack::NavigationStack;
use crate::core::tab::Tab;

/// The slot a state transition touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Change {
    TabSelected,
    StackChanged(Tab),
    TabModalChanged(Tab),
    GlobalModalChanged,
    CoverChanged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppNavigation {
    selected_tab: Tab,
    home: NavigationStack<HomeRoute>,
    catalog: NavigationStack<CatalogRoute>,
    cart: NavigationStack<CartRoute>,
    profile: NavigationStack<ProfileRoute>,
    global_modal: Option<AppModal>,
    full_screen_cover: Option<FullScreenCover>,
}

impl AppNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts on `tab` instead of home, with every stack empty.
    pub fn starting_on(tab: Tab) -> Self {
        Self {
            selected_tab: tab,
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Tab selection and cross-tab navigation
    // ------------------------------------------------------------------

    /// Returns false if `tab` was already selected.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.selected_tab == tab {
            return false;
        }
        self.selected_tab = tab;
        true
    }

    /// Deep link into home: the home stack is reset before the push so the
    /// product detail is always exactly one level deep.
    pub fn navigate_to_product(&mut self, id: impl Into<String>) {
        self.selected_tab = Tab::Home;
        self.home.pop_to_root();
        self.home.push(HomeRoute::product(id));
    }

    /// Shows the cart tab as it was left.
    pub fn navigate_to_cart(&mut self) {
        self.selected_tab = Tab::Cart;
    }

    // ------------------------------------------------------------------
    // App-level presentations
    // ------------------------------------------------------------------

    pub fn present_global_modal(&mut self, modal: AppModal) {
        self.global_modal = Some(modal);
    }

    pub fn dismiss_global_modal(&mut self) -> Option<AppModal> {
        self.global_modal.take()
    }

    pub fn present_full_screen_cover(&mut self, cover: FullScreenCover) {
        self.full_screen_cover = Some(cover);
    }

    pub fn dismiss_full_screen_cover(&mut self) -> Option<FullScreenCover> {
        self.full_screen_cover.take()
    }

    /// Dismisses the top-most thing on screen: cover, then global modal, then
    /// the selected tab's modal, then the selected tab's top route.
    pub fn back(&mut self) -> Option<Change> {
        if self.full_screen_cover.take().is_some() {
            return Some(Change::CoverChanged);
        }
        if self.global_modal.take().is_some() {
            return Some(Change::GlobalModalChanged);
        }
        let tab = self.selected_tab;
        let (had_modal, popped) = match tab {
            Tab::Home => back_in(&mut self.home),
            Tab::Catalog => back_in(&mut self.catalog),
            Tab::Cart => back_in(&mut self.cart),
            Tab::Profile => back_in(&mut self.profile),
        };
        if had_modal {
            Some(Change::TabModalChanged(tab))
        } else if popped {
            Some(Change::StackChanged(tab))
        } else {
            None
        }
    }

    // ------------------------------------------------------------------
    // Read surface
    // ------------------------------------------------------------------

    pub fn selected_tab(&self) -> Tab {
        self.selected_tab
    }

    pub fn home(&self) -> &NavigationStack<HomeRoute> {
        &self.home
    }

    pub fn catalog(&self) -> &NavigationStack<CatalogRoute> {
        &self.catalog
    }

    pub fn cart(&self) -> &NavigationStack<CartRoute> {
        &self.cart
    }

    pub fn profile(&self) -> &NavigationStack<ProfileRoute> {
        &self.profile
    }

    pub fn home_mut(&mut self) -> &mut NavigationStack<HomeRoute> {
        &mut self.home
    }

    pub fn catalog_mut(&mut self) -> &mut NavigationStack<CatalogRoute> {
        &mut self.catalog
    }

    pub fn cart_mut(&mut self) -> &mut NavigationStack<CartRoute> {
        &mut self.cart
    }

    pub fn profile_mut(&mut self) -> &mut NavigationStack<ProfileRoute> {
        &mut self.profile
    }

    pub fn global_modal(&self) -> Option<&AppModal> {
        self.global_modal.as_ref()
    }

    pub fn full_screen_cover(&self) -> Option<&FullScreenCover> {
        self.full_screen_cover.as_ref()
    }

    /// Stack depth of any tab, without naming its route type.
    pub fn depth(&self, tab: Tab) -> usize {
        match tab {
            Tab::Home => self.home.len(),
            Tab::Catalog => self.catalog.len(),
            Tab::Cart => self.cart.len(),
            Tab::Profile => self.profile.len(),
        }
    }

    pub fn tab_modal(&self, tab: Tab) -> Option<&AppModal> {
        match tab {
            Tab::Home => self.home.modal(),
            Tab::Catalog => self.catalog.modal(),
            Tab::Cart => self.cart.modal(),
            Tab::Profile => self.profile.modal(),
        }
    }

    pub fn stack_ids(&self, tab: Tab) -> Vec<String> {
        match tab {
            Tab::Home => self.home.ids(),
            Tab::Catalog => self.catalog.ids(),
            Tab::Cart => self.cart.ids(),
            Tab::Profile => self.profile.ids(),
        }
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            selected_tab: self.selected_tab,
            tabs: Tab::ALL
                .into_iter()
                .map(|tab| TabSnapshot {
                    tab,
                    path: self.stack_ids(tab),
                    modal: self.tab_modal(tab).map(AppModal::id),
                })
                .collect(),
            global_modal: self.global_modal.as_ref().map(AppModal::id),
            full_screen_cover: self.full_screen_cover.as_ref().map(FullScreenCover::id),
        }
    }
}

/// Returns (dismissed a modal, popped a route).
fn back_in<R: crate::core::route::Route>(stack: &mut NavigationStack<R>) -> (bool, bool) {
    if stack.dismiss_modal().is_some() {
        return (true, false);
    }
    (false, stack.pop().is_some())
}

/// Identity-only view of the navigation state, for logs and `--print-state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationSnapshot {
    pub selected_tab: Tab,
    pub tabs: Vec<TabSnapshot>,
    pub global_modal: Option<String>,
    pub full_screen_cover: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabSnapshot {
    pub tab: Tab,
    pub path: Vec<String>,
    pub modal: Option<String>,
}
