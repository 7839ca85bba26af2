//! UI components: sidebar shell, dashboard pages, command palette.

use ratatui::layout::Rect;

use crate::ui::utils::contains;

pub mod auth;
pub mod command_palette;
pub mod common;
pub mod component;
pub mod dashboard;
pub mod gallery;
pub mod landing;
pub mod portfolio;
pub mod sidebar;

pub use auth::AuthComponent;
pub use command_palette::CommandPaletteComponent;
pub use component::*;
pub use dashboard::{DashboardHomeComponent, DashboardLayoutComponent, ProfileComponent};
pub use gallery::GalleryComponent;
pub use landing::LandingComponent;
pub use portfolio::PortfolioComponent;
pub use sidebar::SidebarShellComponent;

/// Index of the item under the pointer, if the pointer is inside `container`.
pub fn find_target_index_by_mouse_position(container: &Rect, items: &[Rect], column: u16, row: u16) -> Option<usize> {
    if !contains(*container, column, row) {
        return None;
    }
    items.iter().position(|item| contains(*item, column, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_requires_container_and_item() {
        let container = Rect::new(0, 0, 20, 10);
        let items = [Rect::new(1, 1, 18, 1), Rect::new(1, 2, 18, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &items, 3, 2), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &items, 3, 5), None);
        assert_eq!(find_target_index_by_mouse_position(&container, &items, 30, 2), None);
    }
}
