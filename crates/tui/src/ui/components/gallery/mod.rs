mod gallery_component;
mod sections;
mod state;

pub use gallery_component::GalleryComponent;
pub use state::*;
