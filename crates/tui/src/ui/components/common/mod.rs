mod text_field;
mod text_input;

pub use text_field::{TEXT_FIELD_HEIGHT, TextFieldOptions, render_text_field};
pub use text_input::TextInputState;
