use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use uikit_types::Route;

/// One entry of the dashboard's left menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub icon: &'static str,
    pub label: &'static str,
    pub path: &'static str,
}

impl MenuEntry {
    /// Whether this entry matches the route currently mounted.
    pub fn is_active(&self, route: Route) -> bool {
        route.path() == self.path
    }
}

/// State for the dashboard layout: the closable left menu and the header's
/// user button.
#[derive(Debug, Clone)]
pub struct DashboardLayoutState {
    menu_open: bool,
    entries: Vec<MenuEntry>,
    pub container_focus: FocusFlag,
    pub toggle_focus: FocusFlag,
    pub user_button_focus: FocusFlag,
    pub item_focus_flags: Vec<FocusFlag>,
    pub last_area: Rect,
    pub toggle_area: Rect,
    pub user_button_area: Rect,
    pub per_item_areas: Vec<Rect>,
}

impl Default for DashboardLayoutState {
    fn default() -> Self {
        Self::new(Self::default_entries())
    }
}

impl DashboardLayoutState {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        let item_focus_flags = (0..entries.len())
            .map(|index| FocusFlag::named(&format!("dashboard.menu.{index}")))
            .collect();
        Self {
            menu_open: true,
            entries,
            container_focus: FocusFlag::named("dashboard"),
            toggle_focus: FocusFlag::named("dashboard.toggle"),
            user_button_focus: FocusFlag::named("dashboard.user"),
            item_focus_flags,
            last_area: Rect::default(),
            toggle_area: Rect::default(),
            user_button_area: Rect::default(),
            per_item_areas: Vec::new(),
        }
    }

    pub fn default_entries() -> Vec<MenuEntry> {
        vec![
            MenuEntry {
                icon: "⌂",
                label: "Dashboard",
                path: "/dashboard",
            },
            MenuEntry {
                icon: "◈",
                label: "Components",
                path: "/dashboard/components",
            },
            MenuEntry {
                icon: "☺",
                label: "Profile",
                path: "/dashboard/profile",
            },
            MenuEntry {
                icon: "ℹ",
                label: "About",
                path: "/dashboard/about",
            },
            // No route is declared for settings; the router sends it home.
            MenuEntry {
                icon: "⚙",
                label: "Settings",
                path: "/dashboard/settings",
            },
        ]
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.item_focus_flags.iter().position(FocusFlag::get)
    }

    pub fn cycle_focus(&self, forward: bool) -> Option<FocusFlag> {
        let len = self.item_focus_flags.len();
        if len == 0 {
            return None;
        }
        let next = match self.focused_index() {
            Some(index) if forward => (index + 1) % len,
            Some(index) => (index + len - 1) % len,
            None => 0,
        };
        self.item_focus_flags.get(next).cloned()
    }
}

impl HasFocus for DashboardLayoutState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.toggle_focus);
        if self.menu_open {
            for flag in &self.item_focus_flags {
                builder.leaf_widget(flag);
            }
        }
        builder.leaf_widget(&self.user_button_focus);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_open_and_toggles() {
        let mut state = DashboardLayoutState::default();
        assert!(state.is_menu_open());
        state.toggle_menu();
        assert!(!state.is_menu_open());
        state.toggle_menu();
        assert!(state.is_menu_open());
    }

    #[test]
    fn active_entry_follows_route() {
        let state = DashboardLayoutState::default();
        let active: Vec<&str> = state
            .entries()
            .iter()
            .filter(|entry| entry.is_active(Route::Components))
            .map(|entry| entry.label)
            .collect();
        assert_eq!(active, vec!["Components"]);
        assert!(!state.entries().iter().any(|entry| entry.is_active(Route::Landing)));
    }

    #[test]
    fn cycle_focus_starts_at_first_entry() {
        let state = DashboardLayoutState::default();
        let flag = state.cycle_focus(false).expect("flag");
        assert_eq!(flag.widget_id(), state.item_focus_flags[0].widget_id());
    }
}
