//! Sidebar shell: a collapsible navigation rail whose items share one
//! active selection, next to a main content area.

mod shell_component;
mod sidebar_component;
mod state;

pub use shell_component::SidebarShellComponent;
pub use sidebar_component::{SidebarComponent, SidebarItemView};
pub use state::{SidebarItemProps, SidebarSelectionState, SidebarState};
