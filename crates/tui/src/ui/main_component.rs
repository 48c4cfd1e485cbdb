//! Top-level view: routes events to the active screen and draws the frame
//! chrome (content area plus hint bar).

use crossterm::event::{KeyEvent, MouseEvent};
use mnemo_types::{Effect, Msg, Route};
use rat_focus::FocusBuilder;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::components::{Component, TypeSelectComponent, WordEntryComponent};
use crate::ui::utils::centered_rect;

pub struct MainView {
    /// Current main view component
    pub content_view: Box<dyn Component>,
}

impl MainView {
    pub fn new() -> Self {
        Self {
            content_view: Box::new(TypeSelectComponent::default()),
        }
    }

    /// Swaps the active screen and moves focus into its first widget.
    /// Not called directly by components; use `Effect::SwitchTo`.
    pub fn set_current_route(&mut self, app: &mut App, route: Route) {
        self.content_view = match route {
            Route::TypeSelect => Box::new(TypeSelectComponent::default()),
            Route::WordEntry => Box::new(WordEntryComponent::default()),
        };
        app.current_route = route;

        app.focus = std::rc::Rc::new(FocusBuilder::build_for(app));
        app.focus.first();
    }

    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        self.content_view.handle_key_events(app, key)
    }

    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        self.content_view.handle_mouse_events(app, mouse)
    }

    pub fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        self.content_view.handle_message(app, msg)
    }

    pub fn render(&mut self, frame: &mut Frame, app: &mut App) {
        let area = frame.area();
        frame.render_widget(
            Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background)),
            area,
        );

        let [content_area, hint_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let content = centered_rect(70, 90, content_area);
        self.content_view.render(frame, content, app);

        let hints = self.content_view.get_hint_spans(app);
        frame.render_widget(Paragraph::new(Line::from(hints)), hint_area);
    }
}

impl Default for MainView {
    fn default() -> Self {
        Self::new()
    }
}
