//! Dashboard layout (menu, header, outlet) and its simple child views.

mod home_component;
mod layout_component;
mod profile_component;
mod state;

pub use home_component::DashboardHomeComponent;
pub use layout_component::DashboardLayoutComponent;
pub use profile_component::ProfileComponent;
pub use state::{DashboardLayoutState, MenuEntry};
