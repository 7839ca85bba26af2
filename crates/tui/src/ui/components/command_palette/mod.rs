mod palette_component;
mod state;

pub use palette_component::CommandPaletteComponent;
pub use state::{CommandPaletteState, is_palette_chord};
