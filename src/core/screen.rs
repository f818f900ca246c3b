//! # Screen Resolver
//!
//! Pure mapping from navigation values to the content they denote. The
//! renderer never decides what a route means; it asks here.
//!
//! ```text
//! Tab (empty stack)      → root_screen(tab)
//! Route / modal / cover  → Resolve::screen()
//! AppNavigation          → visible_screen() + overlay_screen()
//! ```
//!
//! Every mapping is a `match` without a wildcard arm, so adding a variant
//! without giving it a screen does not compile.
//!
//! Content is static demo data: there is no catalog behind it.

use crate::core::action::{Action, StackAction};
use crate::core::coordinator::AppNavigation;
use crate::core::modal::{AppModal, FullScreenCover};
use crate::core::route::{CartRoute, CatalogRoute, HomeRoute, ProfileRoute};
use crate::core::tab::Tab;

/// Checkout always confirms this order.
pub const CONFIRMED_ORDER_ID: &str = "12345";

/// A selectable entry on a screen. Activating it dispatches `action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub action: Action,
}

impl Link {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub title: String,
    pub lines: Vec<String>,
    pub links: Vec<Link>,
}

impl Screen {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    fn link(mut self, label: impl Into<String>, action: Action) -> Self {
        self.links.push(Link::new(label, action));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() || (self.lines.is_empty() && self.links.is_empty())
    }
}

/// Something that denotes exactly one screen.
pub trait Resolve {
    fn screen(&self) -> Screen;
}

// ============================================================================
// Tab roots
// ============================================================================

pub fn root_screen(tab: Tab) -> Screen {
    match tab {
        Tab::Home => Screen::new("Home")
            .link("Product 123", Action::Home(StackAction::Push(HomeRoute::product("123"))))
            .link("Promotions", Action::Home(StackAction::Push(HomeRoute::Promotions)))
            .link(
                "Search \"iPhone\"",
                Action::Home(StackAction::Push(HomeRoute::Search {
                    query: "iPhone".to_string(),
                })),
            )
            .link(
                "Quick view 456",
                Action::Home(StackAction::PresentModal(AppModal::QuickView {
                    product_id: "456".to_string(),
                })),
            )
            .link("Global login", Action::PresentGlobalModal(AppModal::Login))
            .link("Onboarding", Action::PresentCover(FullScreenCover::Onboarding))
            .link("Camera", Action::PresentCover(FullScreenCover::Camera))
            .link(
                "Video player",
                Action::PresentCover(FullScreenCover::VideoPlayer {
                    url: "https://example.com/promo.mp4".to_string(),
                }),
            )
            .link("Go to cart", Action::NavigateToCart)
            .link("Deep link: product 999", Action::NavigateToProduct("999".to_string())),
        Tab::Catalog => Screen::new("Catalog")
            .link(
                "Smartphones",
                Action::Catalog(StackAction::Push(CatalogRoute::Category {
                    id: "1".to_string(),
                    name: "Smartphones".to_string(),
                })),
            )
            .link(
                "Product 789",
                Action::Catalog(StackAction::Push(CatalogRoute::ProductDetail {
                    id: "789".to_string(),
                })),
            )
            .link("Filters", Action::Catalog(StackAction::Push(CatalogRoute::Filters))),
        Tab::Cart => Screen::new("Cart")
            .link("Checkout", Action::Cart(StackAction::Push(CartRoute::Checkout))),
        Tab::Profile => Screen::new("Profile")
            .link("Settings", Action::Profile(StackAction::Push(ProfileRoute::Settings)))
            .link(
                "Order history",
                Action::Profile(StackAction::Push(ProfileRoute::OrderHistory)),
            ),
    }
}

// ============================================================================
// Routes
// ============================================================================

fn product_detail(id: &str) -> Screen {
    Screen::new(format!("Product {id}"))
        .line(format!("Product #{id}"))
        .link("Add to cart and go", Action::NavigateToCart)
}

impl Resolve for HomeRoute {
    fn screen(&self) -> Screen {
        match self {
            HomeRoute::ProductDetail { id } => product_detail(id),
            HomeRoute::Promotions => Screen::new("Promotions").line("Deals and discounts"),
            HomeRoute::Search { query } => (1..=10).fold(
                Screen::new(format!("Search: {query}")),
                |screen, i| screen.line(format!("Result {i}: {query}")),
            ),
        }
    }
}

impl Resolve for CatalogRoute {
    fn screen(&self) -> Screen {
        match self {
            CatalogRoute::Category { name, .. } => {
                (1..=20).fold(Screen::new(name.clone()), |screen, i| {
                    screen.line(format!("Product {i}"))
                })
            }
            CatalogRoute::ProductDetail { id } => product_detail(id),
            CatalogRoute::Filters => Screen::new("Filters").line("Filter settings"),
        }
    }
}

impl Resolve for CartRoute {
    fn screen(&self) -> Screen {
        match self {
            CartRoute::Checkout => Screen::new("Checkout").line("Review your order").link(
                "Confirm order",
                Action::Cart(StackAction::Push(CartRoute::OrderConfirmed {
                    id: CONFIRMED_ORDER_ID.to_string(),
                })),
            ),
            CartRoute::OrderConfirmed { id } => Screen::new("Success")
                .line("✓")
                .line(format!("Order {id} confirmed!")),
        }
    }
}

impl Resolve for ProfileRoute {
    fn screen(&self) -> Screen {
        match self {
            ProfileRoute::Settings => Screen::new("Settings")
                .line("Email: user@example.com")
                .line("Name: Ivan Ivanov")
                .line("Notifications: on")
                .line("Dark theme: off"),
            ProfileRoute::OrderHistory => {
                mock_orders().iter().fold(Screen::new("Order history"), |screen, order| {
                    screen.link(
                        format!("Order #{}  {}  ₽{}", order.id, ORDER_DATE, order.total),
                        Action::Profile(StackAction::Push(ProfileRoute::OrderDetail {
                            id: order.id.clone(),
                        })),
                    )
                })
            }
            ProfileRoute::OrderDetail { id } => {
                let screen = Screen::new(format!("Order #{id}"))
                    .line(format!("Order number: #{id}"))
                    .line(format!("Date: {ORDER_DATE}"));
                match mock_orders().into_iter().find(|order| &order.id == id) {
                    Some(order) => order
                        .items
                        .iter()
                        .fold(screen.line(format!("Status: {}", order.status.label())), |s, item| {
                            s.line(format!("{} × {}  ₽{}", item.name, item.quantity, item.price))
                        }),
                    None => screen.line("Status: unknown order"),
                }
            }
        }
    }
}

// ============================================================================
// Overlays
// ============================================================================

impl Resolve for AppModal {
    fn screen(&self) -> Screen {
        match self {
            AppModal::Login => Screen::new("Login").line("Sign in to your account"),
            AppModal::QuickView { product_id } => {
                Screen::new("Quick view").line(format!("Product: {product_id}"))
            }
        }
    }
}

impl Resolve for FullScreenCover {
    fn screen(&self) -> Screen {
        match self {
            FullScreenCover::Onboarding => Screen::new("Welcome!")
                .line("This is an onboarding example"),
            FullScreenCover::Camera => Screen::new("Camera").line("[ shutter ]"),
            FullScreenCover::VideoPlayer { url } => {
                Screen::new("Video player").line("▶").line(url.clone())
            }
        }
    }
}

// ============================================================================
// State-derived views
// ============================================================================

/// What the selected tab shows: its top route, or its root when the stack is
/// empty. Non-empty stacks get back/root links and every screen gets the
/// path count line.
pub fn visible_screen(nav: &AppNavigation) -> Screen {
    let tab = nav.selected_tab();
    let top = match tab {
        Tab::Home => nav.home().top().map(Resolve::screen),
        Tab::Catalog => nav.catalog().top().map(Resolve::screen),
        Tab::Cart => nav.cart().top().map(Resolve::screen),
        Tab::Profile => nav.profile().top().map(Resolve::screen),
    };
    let depth = nav.depth(tab);
    let mut screen = top.unwrap_or_else(|| root_screen(tab));
    if depth > 0 {
        screen = screen
            .link("Back", Action::Back)
            .link("Pop to root", Action::PopSelectedToRoot);
    }
    screen.line(format!("Path count: {depth}"))
}

/// Which slot an overlay is presented from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Cover,
    GlobalModal,
    TabModal(Tab),
}

/// The top-most presented overlay, in the same order `Action::Back` dismisses
/// them, with a close link appended.
pub fn overlay_screen(nav: &AppNavigation) -> Option<(OverlayKind, Screen)> {
    let (kind, screen, close) = if let Some(cover) = nav.full_screen_cover() {
        let close = match cover {
            FullScreenCover::Onboarding => "Start",
            FullScreenCover::Camera | FullScreenCover::VideoPlayer { .. } => "Close",
        };
        (OverlayKind::Cover, cover.screen(), close)
    } else if let Some(modal) = nav.global_modal() {
        (OverlayKind::GlobalModal, modal.screen(), "Close")
    } else {
        let tab = nav.selected_tab();
        let modal = nav.tab_modal(tab)?;
        (OverlayKind::TabModal(tab), modal.screen(), "Close")
    };
    Some((kind, screen.link(close, Action::Back)))
}

// ============================================================================
// Mock orders
// ============================================================================

const ORDER_DATE: &str = "01.12.2024";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Processing",
            OrderStatus::Completed => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

struct OrderItem {
    name: &'static str,
    price: u32,
    quantity: u32,
}

struct Order {
    id: String,
    total: u32,
    status: OrderStatus,
    items: Vec<OrderItem>,
}

fn mock_orders() -> Vec<Order> {
    (1..=10)
        .map(|i| Order {
            id: i.to_string(),
            total: i * 1000,
            status: if i % 3 == 0 {
                OrderStatus::Completed
            } else if i % 2 == 0 {
                OrderStatus::Pending
            } else {
                OrderStatus::Cancelled
            },
            items: vec![
                OrderItem {
                    name: "iPhone 15 Pro",
                    price: 89990,
                    quantity: 1,
                },
                OrderItem {
                    name: "AirPods Pro",
                    price: 24990,
                    quantity: 1,
                },
            ],
        })
        .collect()
}
