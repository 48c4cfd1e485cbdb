//! Phrase-length selection screen.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use mnemo_types::Effect;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::helpers as th;

#[derive(Debug, Default)]
pub struct TypeSelectComponent {
    option_areas: Vec<Rect>,
    cancel_area: Rect,
    next_area: Rect,
}

impl TypeSelectComponent {
    fn activate_focused(&self, app: &mut App) -> Vec<Effect> {
        let focused_option = app.wizard.type_select.focused_option();
        let on_cancel = app.wizard.type_select.f_cancel.get();
        let on_next = app.wizard.type_select.f_next.get();

        if let Some(idx) = focused_option {
            let count = app.wizard.options()[idx].count;
            return app.wizard.select_count(count);
        }
        if on_cancel {
            return app.wizard.cancel();
        }
        if on_next {
            // Silent no-op while nothing is selected
            return app.wizard.advance();
        }
        Vec::new()
    }
}

impl Component for TypeSelectComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                app.focus.next();
                Vec::new()
            }
            KeyCode::BackTab | KeyCode::Up => {
                app.focus.prev();
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused(app),
            KeyCode::Esc => app.wizard.cancel(),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = Position::new(mouse.column, mouse.row);

        if let Some(idx) = self.option_areas.iter().position(|area| area.contains(position)) {
            app.focus.focus(&app.wizard.type_select.f_options[idx]);
            let count = app.wizard.options()[idx].count;
            return app.wizard.select_count(count);
        }
        if self.cancel_area.contains(position) {
            return app.wizard.cancel();
        }
        if self.next_area.contains(position) {
            return app.wizard.advance();
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &app.ctx.theme;
        let options = app.wizard.options();
        let selected_count = app.wizard.selected_count();

        let mut constraints = vec![
            Constraint::Length(1), // Heading
            Constraint::Length(1), // Subtitle
            Constraint::Length(1), // Spacer
        ];
        constraints.extend(options.iter().map(|_| Constraint::Length(4)));
        constraints.push(Constraint::Length(1)); // Spacer
        constraints.push(Constraint::Length(3)); // Buttons
        let rows = Layout::vertical(constraints).split(rect);

        frame.render_widget(
            Paragraph::new("Seed phrase type").style(theme.heading_style()),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new("What kind of wallet would you like to restore?").style(theme.text_secondary_style()),
            rows[1],
        );

        self.option_areas.clear();
        for (idx, option) in options.iter().enumerate() {
            let area = rows[3 + idx];
            let selected = selected_count == Some(option.count);
            let focused = app.wizard.type_select.f_options[idx].get();

            let mut block = th::block(theme, None, focused);
            if selected {
                block = block.border_style(ratatui::style::Style::default().fg(theme.roles().accent_primary));
            }
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let marker = if selected { "● " } else { "  " };
            let lines = vec![
                Line::from(vec![
                    Span::styled(marker, ratatui::style::Style::default().fg(theme.roles().accent_primary)),
                    Span::styled(option.title(), theme.heading_style()),
                ]),
                Line::from(Span::styled(format!("  {}", option.label), theme.text_secondary_style())),
            ];
            frame.render_widget(Paragraph::new(lines), inner);
            self.option_areas.push(area);
        }

        let button_row = rows[rows.len() - 1];
        let [_, cancel_area, _, next_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
        ])
        .areas(button_row);

        th::render_button(
            frame,
            cancel_area,
            "Cancel",
            true,
            app.wizard.type_select.f_cancel.get(),
            theme,
        );
        th::render_button(
            frame,
            next_area,
            "Next",
            selected_count.is_some(),
            app.wizard.type_select.f_next.get(),
            theme,
        );
        self.cancel_area = cancel_area;
        self.next_area = next_area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &app.ctx.theme,
            &[
                ("Tab/↑↓", " Move "),
                ("Enter", " Select "),
                ("Esc", " Cancel "),
            ],
        )
    }
}
