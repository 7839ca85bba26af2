mod auth_component;
mod state;

pub use auth_component::AuthComponent;
pub use state::{AuthControl, AuthField, AuthFormState};
