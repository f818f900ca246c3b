//! # Core Navigation Logic
//!
//! This module contains the shell's navigation model.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Routes, overlays     │
//!                    │  • Per-tab stacks       │
//!                    │  • Action + update()    │
//!                    │  • Screen resolver      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ NavigationObserver
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Snapshot  │      │   Tests    │
//!     │  Adapter   │      │  (JSON)    │      │            │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`tab`], [`route`], [`modal`]: the closed sets of navigation values
//! - [`stack`]: `NavigationStack<R>`, one per tab
//! - [`coordinator`]: `AppNavigation`, all four stacks plus app-wide overlays
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`state`]: `Navigator`, dispatch + observers
//! - [`screen`]: what each navigation value shows
//! - [`deep_link`]: textual links parsed into actions
//! - [`config`]: layered TOML configuration (the only module that does I/O)

pub mod action;
pub mod config;
pub mod coordinator;
pub mod deep_link;
pub mod modal;
pub mod route;
pub mod screen;
pub mod stack;
pub mod state;
pub mod tab;

// Re-export commonly used types for convenience
pub use action::{Action, StackAction};
pub use coordinator::{AppNavigation, Change};
pub use state::{NavigationObserver, Navigator};
pub use tab::Tab;
