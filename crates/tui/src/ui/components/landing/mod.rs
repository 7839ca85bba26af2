mod landing_component;
mod state;

pub use landing_component::LandingComponent;
pub use state::{FEATURES, LandingControl, LandingState};
