//! Sidebar navigation catalog.
//!
//! A static ordered list of (label, route, icon) entries consumed by
//! the presentation layer. It shares nothing with the plan catalog
//! beyond both being fixed lookup tables defined at startup.

use serde::Serialize;

/// Handle for a sidebar icon.
///
/// The actual artwork lives with the presentation layer; this enum is
/// the stable key it resolves against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavIcon {
    Overview,
    Jobs,
    Profile,
    Bookmarks,
}

impl NavIcon {
    /// Stable asset key for this icon (lowercase).
    #[must_use]
    pub fn asset_key(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Jobs => "jobs",
            Self::Profile => "profile",
            Self::Bookmarks => "bookmarks",
        }
    }
}

/// One sidebar menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub route: &'static str,
    pub icon: NavIcon,
}

/// The WorkScout sidebar menu, in display order.
pub const WORKSCOUT_MENU: &[NavEntry] = &[
    NavEntry { label: "Overview", route: "/workscout/dashboard", icon: NavIcon::Overview },
    NavEntry { label: "My Jobs", route: "/workscout/my-jobs", icon: NavIcon::Jobs },
    NavEntry { label: "Profile", route: "/workscout/profile", icon: NavIcon::Profile },
    NavEntry { label: "Bookmarks", route: "/workscout/bookmarks", icon: NavIcon::Bookmarks },
];

/// Find the menu entry for a route, for active-item highlighting.
#[must_use]
pub fn entry_for_route(route: &str) -> Option<&'static NavEntry> {
    WORKSCOUT_MENU.iter().find(|e| e.route == route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order_and_labels() {
        let labels: Vec<_> = WORKSCOUT_MENU.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Overview", "My Jobs", "Profile", "Bookmarks"]);
    }

    #[test]
    fn test_routes_are_unique() {
        for (i, entry) in WORKSCOUT_MENU.iter().enumerate() {
            assert!(
                WORKSCOUT_MENU[..i].iter().all(|e| e.route != entry.route),
                "duplicate route {}",
                entry.route
            );
        }
    }

    #[test]
    fn test_entry_for_route() {
        let entry = entry_for_route("/workscout/my-jobs").unwrap();
        assert_eq!(entry.label, "My Jobs");
        assert_eq!(entry.icon, NavIcon::Jobs);
        assert!(entry_for_route("/workscout/settings").is_none());
    }

    #[test]
    fn test_icon_asset_keys() {
        assert_eq!(NavIcon::Overview.asset_key(), "overview");
        assert_eq!(NavIcon::Bookmarks.asset_key(), "bookmarks");
    }
}
