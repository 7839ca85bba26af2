//! UI rendering: the component tree, presentational widgets, themes and the
//! runtime loop that drives them.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
pub mod widgets;
