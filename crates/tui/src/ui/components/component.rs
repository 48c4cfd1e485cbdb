//! Component trait for the wizard UI.
//!
//! Components are self-contained views that handle their own events and
//! rendering while reporting side effects back to the runtime as `Effect`s
//! rather than mutating global state directly.

use crossterm::event::{KeyEvent, MouseEvent};
use mnemo_types::{Effect, Msg};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::app::App;

pub trait Component {
    /// Handle key events while this component is the active view.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events while this component is the active view.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle an application-level message this component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area. Side-effect free except
    /// for frame drawing and cursor placement.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the bottom bar while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}
