//! # Routes
//!
//! Each tab has its own closed set of destinations. A route is a plain value:
//! two routes with the same variant and fields are the same route, and
//! `id()` is derived from nothing else.
//!
//! ```text
//! HomeRoute      product-{id} | promotions | search-{query}
//! CatalogRoute   cat-{id} | product-{id} | filters
//! CartRoute      checkout | confirmed-{id}
//! ProfileRoute   settings | history | order-{id}
//! ```
//!
//! Identities only need to be unique within one tab's namespace:
//! `HomeRoute::ProductDetail` and `CatalogRoute::ProductDetail` share
//! `product-{id}` but never live on the same stack.

use std::fmt::Debug;
use std::hash::Hash;

use crate::core::tab::Tab;

/// A destination on one tab's navigation stack.
pub trait Route: Clone + Debug + PartialEq + Eq + Hash {
    /// The tab whose stack this route type belongs to.
    const TAB: Tab;

    /// Stable identity: namespace tag plus field values.
    fn id(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HomeRoute {
    ProductDetail { id: String },
    Promotions,
    Search { query: String },
}

impl HomeRoute {
    pub fn product(id: impl Into<String>) -> Self {
        HomeRoute::ProductDetail { id: id.into() }
    }
}

impl Route for HomeRoute {
    const TAB: Tab = Tab::Home;

    fn id(&self) -> String {
        match self {
            HomeRoute::ProductDetail { id } => format!("product-{id}"),
            HomeRoute::Promotions => "promotions".to_string(),
            HomeRoute::Search { query } => format!("search-{query}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CatalogRoute {
    Category { id: String, name: String },
    ProductDetail { id: String },
    Filters,
}

impl Route for CatalogRoute {
    const TAB: Tab = Tab::Catalog;

    fn id(&self) -> String {
        match self {
            // The display name is payload, not identity.
            CatalogRoute::Category { id, .. } => format!("cat-{id}"),
            CatalogRoute::ProductDetail { id } => format!("product-{id}"),
            CatalogRoute::Filters => "filters".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CartRoute {
    Checkout,
    OrderConfirmed { id: String },
}

impl Route for CartRoute {
    const TAB: Tab = Tab::Cart;

    fn id(&self) -> String {
        match self {
            CartRoute::Checkout => "checkout".to_string(),
            CartRoute::OrderConfirmed { id } => format!("confirmed-{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProfileRoute {
    Settings,
    OrderHistory,
    OrderDetail { id: String },
}

impl Route for ProfileRoute {
    const TAB: Tab = Tab::Profile;

    fn id(&self) -> String {
        match self {
            ProfileRoute::Settings => "settings".to_string(),
            ProfileRoute::OrderHistory => "history".to_string(),
            ProfileRoute::OrderDetail { id } => format!("order-{id}"),
        }
    }
}
