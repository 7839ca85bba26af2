//! Component system for the UI kit TUI.
//!
//! Components are self-contained UI elements. They keep only local view
//! state, react to input, and render themselves into a provided `Rect`.
//! Anything that changes shared state (theme, session, route, sidebar
//! selection) is reported back as an [`Effect`] instead of being written
//! directly.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect, text::Span};
use uikit_types::{Effect, Msg};

use crate::app::App;

/// A UI component with its own state and behavior.
///
/// # Lifecycle
///
/// 1. `init()` once when the component is created.
/// 2. `handle_message`, `handle_key_events` and `handle_mouse_events` as
///    input arrives; each returns the effects the runtime should run.
/// 3. `render()` whenever the application is dirty.
pub(crate) trait Component {
    /// Initialize any internal state.
    fn init(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events that land on this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations draw and record hit-test areas; other state changes
    /// belong in the event handlers.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the footer while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Sub-areas this component splits `area` into.
    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        vec![area]
    }
}
