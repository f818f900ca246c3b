//! # Deep Links
//!
//! Textual navigation requests, accepted from the command line (`--open`)
//! and from `deep_links` in the config file. Each link parses into a single
//! [`Action`].
//!
//! ```text
//! product/<id>          → NavigateToProduct
//! cart                  → NavigateToCart
//! tab/<tab>             → SelectTab
//! modal/login           → PresentGlobalModal(Login)
//! modal/quick/<id>      → PresentGlobalModal(QuickView)
//! cover/onboarding      → PresentCover(Onboarding)
//! cover/camera          → PresentCover(Camera)
//! cover/video/<url>     → PresentCover(VideoPlayer), url may contain '/'
//! ```

use std::fmt;

use crate::core::action::Action;
use crate::core::modal::{AppModal, FullScreenCover};
use crate::core::tab::Tab;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLinkError {
    Empty,
    UnknownTarget(String),
    MissingArgument(String),
    UnknownTab(String),
}

impl fmt::Display for DeepLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeepLinkError::Empty => write!(f, "empty deep link"),
            DeepLinkError::UnknownTarget(link) => write!(f, "unknown deep link target: {link}"),
            DeepLinkError::MissingArgument(link) => {
                write!(f, "deep link is missing an argument: {link}")
            }
            DeepLinkError::UnknownTab(name) => write!(f, "unknown tab: {name}"),
        }
    }
}

impl std::error::Error for DeepLinkError {}

pub fn parse(link: &str) -> Result<Action, DeepLinkError> {
    let trimmed = link.trim();
    let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Err(DeepLinkError::Empty);
    }

    let (head, rest) = match trimmed.split_once('/') {
        Some((head, rest)) => (head, Some(rest)),
        None => (trimmed, None),
    };
    let missing = || DeepLinkError::MissingArgument(trimmed.to_string());
    let unknown = || DeepLinkError::UnknownTarget(trimmed.to_string());

    match (head, rest) {
        ("product", Some(id)) => Ok(Action::NavigateToProduct(argument(id).ok_or_else(missing)?)),
        ("product", None) => Err(missing()),
        ("cart", None) => Ok(Action::NavigateToCart),
        ("tab", Some(name)) => Tab::from_name(name)
            .map(Action::SelectTab)
            .ok_or_else(|| DeepLinkError::UnknownTab(name.to_string())),
        ("tab", None) => Err(missing()),
        ("modal", Some(target)) => parse_modal(target)
            .map(Action::PresentGlobalModal)
            .ok_or_else(|| {
                if target == "quick" || target == "quick/" {
                    missing()
                } else {
                    unknown()
                }
            }),
        ("cover", Some(target)) => parse_cover(target)
            .map(Action::PresentCover)
            .ok_or_else(|| {
                if target == "video" || target == "video/" {
                    missing()
                } else {
                    unknown()
                }
            }),
        ("modal" | "cover", None) => Err(missing()),
        _ => Err(unknown()),
    }
}

/// Non-empty single path segment.
fn argument(segment: &str) -> Option<String> {
    if segment.is_empty() || segment.contains('/') {
        None
    } else {
        Some(segment.to_string())
    }
}

fn parse_modal(target: &str) -> Option<AppModal> {
    match target.split_once('/') {
        None if target == "login" => Some(AppModal::Login),
        Some(("quick", id)) => argument(id).map(|product_id| AppModal::QuickView { product_id }),
        _ => None,
    }
}

fn parse_cover(target: &str) -> Option<FullScreenCover> {
    match target.split_once('/') {
        None if target == "onboarding" => Some(FullScreenCover::Onboarding),
        None if target == "camera" => Some(FullScreenCover::Camera),
        Some(("video", url)) if !url.is_empty() => Some(FullScreenCover::VideoPlayer {
            url: url.to_string(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product() {
        assert_eq!(parse("product/999"), Ok(Action::NavigateToProduct("999".into())));
        assert_eq!(parse("  /product/42 "), Ok(Action::NavigateToProduct("42".into())));
    }

    #[test]
    fn test_parse_cart_and_tab() {
        assert_eq!(parse("cart"), Ok(Action::NavigateToCart));
        assert_eq!(parse("tab/profile"), Ok(Action::SelectTab(Tab::Profile)));
        assert_eq!(
            parse("tab/settings"),
            Err(DeepLinkError::UnknownTab("settings".into()))
        );
    }

    #[test]
    fn test_parse_overlays() {
        assert_eq!(parse("modal/login"), Ok(Action::PresentGlobalModal(AppModal::Login)));
        assert_eq!(
            parse("modal/quick/456"),
            Ok(Action::PresentGlobalModal(AppModal::QuickView {
                product_id: "456".into()
            }))
        );
        assert_eq!(parse("cover/camera"), Ok(Action::PresentCover(FullScreenCover::Camera)));
        assert_eq!(
            parse("cover/video/https://example.com/a.mp4"),
            Ok(Action::PresentCover(FullScreenCover::VideoPlayer {
                url: "https://example.com/a.mp4".into()
            }))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("   "), Err(DeepLinkError::Empty));
        assert_eq!(parse("/"), Err(DeepLinkError::Empty));
        assert_eq!(
            parse("product/"),
            Err(DeepLinkError::MissingArgument("product/".into()))
        );
        assert_eq!(parse("product"), Err(DeepLinkError::MissingArgument("product".into())));
        assert_eq!(
            parse("modal/quick/"),
            Err(DeepLinkError::MissingArgument("modal/quick/".into()))
        );
        assert_eq!(
            parse("cover/video"),
            Err(DeepLinkError::MissingArgument("cover/video".into()))
        );
        assert_eq!(
            parse("wishlist"),
            Err(DeepLinkError::UnknownTarget("wishlist".into()))
        );
        assert_eq!(
            parse("modal/signup"),
            Err(DeepLinkError::UnknownTarget("modal/signup".into()))
        );
        assert_eq!(parse("cart/extra"), Err(DeepLinkError::UnknownTarget("cart/extra".into())));
    }

    #[test]
    fn test_error_display_names_input() {
        let err = parse("wishlist").unwrap_err();
        assert_eq!(err.to_string(), "unknown deep link target: wishlist");
    }
}
