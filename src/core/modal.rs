//! # Overlays
//!
//! Sheets (`AppModal`) can be presented per tab or app-wide. Full-screen
//! covers are app-wide only.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppModal {
    Login,
    QuickView { product_id: String },
}

impl AppModal {
    pub fn id(&self) -> String {
        match self {
            AppModal::Login => "login".to_string(),
            AppModal::QuickView { product_id } => format!("quick-{product_id}"),
        }
    }
}

impl fmt::Display for AppModal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FullScreenCover {
    Onboarding,
    Camera,
    VideoPlayer { url: String },
}

impl FullScreenCover {
    /// A single video player slot: the url does not take part in identity.
    pub fn id(&self) -> String {
        match self {
            FullScreenCover::Onboarding => "onboarding".to_string(),
            FullScreenCover::Camera => "camera".to_string(),
            FullScreenCover::VideoPlayer { .. } => "video".to_string(),
        }
    }
}

impl fmt::Display for FullScreenCover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}
