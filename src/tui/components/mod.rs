//! # TUI Components
//!
//! All UI components for the terminal shell. They are stateless: every prop
//! is read from `AppNavigation` or produced by the screen resolver each
//! frame, and the only TUI-local state (the link cursor) lives in
//! `TuiState`.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── tab_bar.rs      (tab row with stack depths)
//! ├── screen_view.rs  (one resolved Screen: text + links)
//! └── overlay.rs      (cover / sheet drawn over the tab content)
//! ```

mod overlay;
mod screen_view;
mod tab_bar;

pub use overlay::Overlay;
pub use screen_view::ScreenView;
pub use tab_bar::TabBar;
