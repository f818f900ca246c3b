//! # Actions
//!
//! Every navigation mutation is an `Action`. Pressing a link? That's whatever
//! `Action` the link carries. Deep link on the command line? Parsed into an
//! `Action` too.
//!
//! `update()` applies one action to the state and reports which slots
//! changed. No I/O here.
//!
//! ```text
//! AppNavigation + Action  →  update()  →  Vec<Change>
//! ```
//!
//! An empty change list means the action was a no-op (popping an empty
//! stack, selecting the tab that is already selected, ...).

use crate::core::coordinator::{AppNavigation, Change};
use crate::core::modal::{AppModal, FullScreenCover};
use crate::core::route::{CartRoute, CatalogRoute, HomeRoute, ProfileRoute, Route};
use crate::core::stack::NavigationStack;
use crate::core::tab::Tab;

/// Operations scoped to one tab's stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackAction<R: Route> {
    Push(R),
    Pop,
    PopToRoot,
    PresentModal(AppModal),
    DismissModal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectTab(Tab),
    Home(StackAction<HomeRoute>),
    Catalog(StackAction<CatalogRoute>),
    Cart(StackAction<CartRoute>),
    Profile(StackAction<ProfileRoute>),
    NavigateToProduct(String),
    NavigateToCart,
    PresentGlobalModal(AppModal),
    DismissGlobalModal,
    PresentCover(FullScreenCover),
    DismissCover,
    /// Dismiss the top-most overlay, or pop the selected tab.
    Back,
    /// Pop whichever tab is selected back to its root screen.
    PopSelectedToRoot,
}

pub fn update(nav: &mut AppNavigation, action: Action) -> Vec<Change> {
    match action {
        Action::SelectTab(tab) => {
            if nav.select_tab(tab) {
                vec![Change::TabSelected]
            } else {
                vec![]
            }
        }
        Action::Home(op) => apply(nav.home_mut(), op),
        Action::Catalog(op) => apply(nav.catalog_mut(), op),
        Action::Cart(op) => apply(nav.cart_mut(), op),
        Action::Profile(op) => apply(nav.profile_mut(), op),
        Action::NavigateToProduct(id) => {
            let was = nav.selected_tab();
            let old_path = nav.home().path().to_vec();
            nav.navigate_to_product(id);
            let mut changes = vec![];
            if was != Tab::Home {
                changes.push(Change::TabSelected);
            }
            if nav.home().path() != old_path.as_slice() {
                changes.push(Change::StackChanged(Tab::Home));
            }
            changes
        }
        Action::NavigateToCart => {
            let was = nav.selected_tab();
            nav.navigate_to_cart();
            if was != Tab::Cart {
                vec![Change::TabSelected]
            } else {
                vec![]
            }
        }
        Action::PresentGlobalModal(modal) => {
            if nav.global_modal() == Some(&modal) {
                return vec![];
            }
            nav.present_global_modal(modal);
            vec![Change::GlobalModalChanged]
        }
        Action::DismissGlobalModal => match nav.dismiss_global_modal() {
            Some(_) => vec![Change::GlobalModalChanged],
            None => vec![],
        },
        Action::PresentCover(cover) => {
            if nav.full_screen_cover() == Some(&cover) {
                return vec![];
            }
            nav.present_full_screen_cover(cover);
            vec![Change::CoverChanged]
        }
        Action::DismissCover => match nav.dismiss_full_screen_cover() {
            Some(_) => vec![Change::CoverChanged],
            None => vec![],
        },
        Action::Back => nav.back().into_iter().collect(),
        Action::PopSelectedToRoot => {
            let tab = nav.selected_tab();
            let removed = match tab {
                Tab::Home => nav.home_mut().pop_to_root(),
                Tab::Catalog => nav.catalog_mut().pop_to_root(),
                Tab::Cart => nav.cart_mut().pop_to_root(),
                Tab::Profile => nav.profile_mut().pop_to_root(),
            };
            if removed > 0 {
                vec![Change::StackChanged(tab)]
            } else {
                vec![]
            }
        }
    }
}

fn apply<R: Route>(stack: &mut NavigationStack<R>, op: StackAction<R>) -> Vec<Change> {
    let tab = R::TAB;
    let changed = match op {
        StackAction::Push(route) => {
            stack.push(route);
            return vec![Change::StackChanged(tab)];
        }
        StackAction::Pop => stack.pop().is_some(),
        StackAction::PopToRoot => stack.pop_to_root() > 0,
        StackAction::PresentModal(modal) => {
            if stack.modal() == Some(&modal) {
                return vec![];
            }
            stack.present_modal(modal);
            return vec![Change::TabModalChanged(tab)];
        }
        StackAction::DismissModal => {
            return match stack.dismiss_modal() {
                Some(_) => vec![Change::TabModalChanged(tab)],
                None => vec![],
            };
        }
    };
    if changed {
        vec![Change::StackChanged(tab)]
    } else {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_reports_stack_change_for_its_tab() {
        let mut nav = AppNavigation::new();
        let changes = update(&mut nav, Action::Profile(StackAction::Push(ProfileRoute::Settings)));
        assert_eq!(changes, vec![Change::StackChanged(Tab::Profile)]);
        assert_eq!(nav.profile().ids(), vec!["settings"]);
    }

    #[test]
    fn test_noops_report_nothing() {
        let mut nav = AppNavigation::new();
        assert!(update(&mut nav, Action::SelectTab(Tab::Home)).is_empty());
        assert!(update(&mut nav, Action::Home(StackAction::Pop)).is_empty());
        assert!(update(&mut nav, Action::Home(StackAction::PopToRoot)).is_empty());
        assert!(update(&mut nav, Action::Home(StackAction::DismissModal)).is_empty());
        assert!(update(&mut nav, Action::DismissGlobalModal).is_empty());
        assert!(update(&mut nav, Action::DismissCover).is_empty());
        assert!(update(&mut nav, Action::Back).is_empty());
        assert!(update(&mut nav, Action::PopSelectedToRoot).is_empty());
        assert_eq!(nav, AppNavigation::new());
    }

    #[test]
    fn test_present_same_modal_twice_reports_once() {
        let mut nav = AppNavigation::new();
        let quick = AppModal::QuickView { product_id: "456".into() };
        assert_eq!(
            update(&mut nav, Action::Home(StackAction::PresentModal(quick.clone()))),
            vec![Change::TabModalChanged(Tab::Home)]
        );
        assert!(update(&mut nav, Action::Home(StackAction::PresentModal(quick))).is_empty());
        assert_eq!(
            update(&mut nav, Action::Home(StackAction::PresentModal(AppModal::Login))),
            vec![Change::TabModalChanged(Tab::Home)]
        );
        assert_eq!(nav.home().modal(), Some(&AppModal::Login));
    }

    #[test]
    fn test_navigate_to_product_from_other_tab() {
        let mut nav = AppNavigation::starting_on(Tab::Cart);
        let changes = update(&mut nav, Action::NavigateToProduct("999".into()));
        assert_eq!(changes, vec![Change::TabSelected, Change::StackChanged(Tab::Home)]);
        assert_eq!(nav.home().path(), &[HomeRoute::product("999")]);
    }

    #[test]
    fn test_navigate_to_product_from_home_only_changes_stack() {
        let mut nav = AppNavigation::new();
        update(&mut nav, Action::Home(StackAction::Push(HomeRoute::Promotions)));
        let changes = update(&mut nav, Action::NavigateToProduct("999".into()));
        assert_eq!(changes, vec![Change::StackChanged(Tab::Home)]);
        assert_eq!(nav.home().ids(), vec!["product-999"]);
    }

    #[test]
    fn test_navigate_to_product_already_shown_is_noop() {
        let mut nav = AppNavigation::new();
        update(&mut nav, Action::NavigateToProduct("999".into()));
        let before = nav.clone();

        assert!(update(&mut nav, Action::NavigateToProduct("999".into())).is_empty());
        assert_eq!(nav, before);

        // Same product, but reached from another tab: only the selection changes.
        update(&mut nav, Action::SelectTab(Tab::Cart));
        assert_eq!(
            update(&mut nav, Action::NavigateToProduct("999".into())),
            vec![Change::TabSelected]
        );
    }

    #[test]
    fn test_navigate_to_cart() {
        let mut nav = AppNavigation::new();
        update(&mut nav, Action::Cart(StackAction::Push(CartRoute::Checkout)));
        assert_eq!(update(&mut nav, Action::NavigateToCart), vec![Change::TabSelected]);
        assert!(update(&mut nav, Action::NavigateToCart).is_empty());
        assert_eq!(nav.cart().ids(), vec!["checkout"]);
    }

    #[test]
    fn test_pop_selected_to_root_only_touches_selected_tab() {
        let mut nav = AppNavigation::starting_on(Tab::Catalog);
        update(&mut nav, Action::Home(StackAction::Push(HomeRoute::Promotions)));
        update(&mut nav, Action::Catalog(StackAction::Push(CatalogRoute::Filters)));
        update(&mut nav, Action::Catalog(StackAction::Push(CatalogRoute::Filters)));

        assert_eq!(
            update(&mut nav, Action::PopSelectedToRoot),
            vec![Change::StackChanged(Tab::Catalog)]
        );
        assert_eq!(nav.depth(Tab::Catalog), 0);
        assert_eq!(nav.depth(Tab::Home), 1);
    }

    #[test]
    fn test_cover_replaces_and_dismisses() {
        let mut nav = AppNavigation::new();
        update(&mut nav, Action::PresentCover(FullScreenCover::Onboarding));
        update(&mut nav, Action::PresentCover(FullScreenCover::Camera));
        assert_eq!(nav.full_screen_cover(), Some(&FullScreenCover::Camera));
        assert_eq!(update(&mut nav, Action::DismissCover), vec![Change::CoverChanged]);
        assert!(nav.full_screen_cover().is_none());
    }
}
