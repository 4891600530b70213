use crate::routing::Page;
use std::collections::BTreeSet;

pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 768;

pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutMode {
    Mobile,
    #[default]
    Desktop,
}

impl LayoutMode {
    pub fn from_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Adds or removes the document-wide dark class.
    pub fn apply(&self, classes: &mut dyn DocumentClasses) {
        classes.set_class(DARK_CLASS, self.is_dark());
    }
}

/// Class list of the document root.
pub trait DocumentClasses {
    fn set_class(&mut self, class: &str, present: bool);
}

impl DocumentClasses for BTreeSet<String> {
    fn set_class(&mut self, class: &str, present: bool) {
        if present {
            self.insert(class.to_string());
        } else {
            self.remove(class);
        }
    }
}

/// Local presentation state of the sidebar/header shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellState {
    pub mode: LayoutMode,
    pub sidebar_open: bool,
    pub theme: Theme,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the layout mode for a new viewport width. Leaving mobile
    /// mode closes the overlay.
    pub fn resize(&mut self, width: u32, breakpoint: u32) {
        let mode = LayoutMode::from_width(width, breakpoint);
        if mode == LayoutMode::Desktop {
            self.sidebar_open = false;
        }
        self.mode = mode;
    }

    pub fn is_mobile(&self) -> bool {
        self.mode == LayoutMode::Mobile
    }

    /// Whether the sidebar should be drawn as an overlay with a backdrop.
    pub fn shows_overlay(&self) -> bool {
        self.is_mobile() && self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub page: Page,
    pub icon: &'static str,
}

impl NavItem {
    /// Active when the URL is the item's path or nested below it.
    pub fn is_active(&self, current_path: &str) -> bool {
        let path = self.page.path();
        current_path == path
            || current_path
                .strip_prefix(path)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem {
        label: "Dashboard",
        page: Page::Dashboard,
        icon: "📊",
    },
    NavItem {
        label: "Members",
        page: Page::Members,
        icon: "👥",
    },
    NavItem {
        label: "Trainers",
        page: Page::Trainers,
        icon: "🏋️",
    },
    NavItem {
        label: "Memberships",
        page: Page::Memberships,
        icon: "🎫",
    },
    NavItem {
        label: "Events",
        page: Page::Events,
        icon: "📅",
    },
    NavItem {
        label: "Diet Plans",
        page: Page::DietPlans,
        icon: "🥗",
    },
    NavItem {
        label: "Society",
        page: Page::Society,
        icon: "🏢",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggling_theme_twice_restores_document() {
        let mut shell = ShellState::new();
        let mut classes: BTreeSet<String> = ["antialiased".to_string()].into();
        let original = classes.clone();

        shell.toggle_theme().apply(&mut classes);
        assert!(classes.contains(DARK_CLASS));

        shell.toggle_theme().apply(&mut classes);
        assert_eq!(classes, original);
        assert_eq!(shell.theme, Theme::Light);
    }

    #[test]
    fn test_layout_mode_threshold() {
        assert_eq!(LayoutMode::from_width(767, 768), LayoutMode::Mobile);
        assert_eq!(LayoutMode::from_width(768, 768), LayoutMode::Desktop);
        assert_eq!(LayoutMode::from_width(1440, DEFAULT_MOBILE_BREAKPOINT), LayoutMode::Desktop);
    }

    #[test]
    fn test_resize_toggles_mode() {
        let mut shell = ShellState::new();

        shell.resize(500, DEFAULT_MOBILE_BREAKPOINT);
        assert!(shell.is_mobile());
        shell.toggle_sidebar();
        assert!(shell.shows_overlay());

        shell.resize(1024, DEFAULT_MOBILE_BREAKPOINT);
        assert_eq!(shell.mode, LayoutMode::Desktop);
        assert!(!shell.shows_overlay());

        shell.resize(400, DEFAULT_MOBILE_BREAKPOINT);
        assert!(shell.is_mobile());
        assert!(!shell.sidebar_open);
    }

    #[test]
    fn test_resize_keeps_theme() {
        let mut shell = ShellState::new();
        shell.toggle_theme();

        shell.resize(320, DEFAULT_MOBILE_BREAKPOINT);
        shell.resize(1280, DEFAULT_MOBILE_BREAKPOINT);

        assert_eq!(shell.theme, Theme::Dark);
    }

    #[test]
    fn test_backdrop_closes_sidebar() {
        let mut shell = ShellState::new();
        shell.resize(320, DEFAULT_MOBILE_BREAKPOINT);
        shell.toggle_sidebar();

        shell.close_sidebar();

        assert!(!shell.sidebar_open);
    }

    #[test]
    fn test_active_nav_item_follows_url() {
        let members = NAV_ITEMS[1];

        assert!(members.is_active("/members"));
        assert!(members.is_active("/members/42"));
        assert!(!members.is_active("/memberships"));
        assert!(!members.is_active("/dashboard"));

        let active: Vec<_> = NAV_ITEMS
            .iter()
            .filter(|item| item.is_active("/diet-plans"))
            .map(|item| item.label)
            .collect();
        assert_eq!(active, vec!["Diet Plans"]);
    }
}
