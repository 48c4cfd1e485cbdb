//! Word-entry screen: the numbered slot grid with per-word editing and
//! whole-phrase paste.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use mnemo_types::{Effect, Msg};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::common::SlotEditor;
use crate::ui::components::restore::{DISPLAY_COLUMNS, column_layout};
use crate::ui::theme::helpers as th;

#[derive(Debug, Default)]
pub struct WordEntryComponent {
    slot_areas: Vec<Rect>,
    back_area: Rect,
    reset_area: Rect,
    confirm_area: Rect,
    editor: SlotEditor,
    /// Slot index the editor buffer currently mirrors.
    edited_index: Option<usize>,
}

impl WordEntryComponent {
    /// Reloads the edit buffer whenever focus moved to a different slot.
    fn sync_editor(&mut self, app: &App) {
        let Some(slots) = app.wizard.slots.as_ref() else {
            self.edited_index = None;
            return;
        };
        match slots.focused_slot() {
            Some(idx) if self.edited_index != Some(idx) => {
                self.editor.load(slots.word(idx));
                self.edited_index = Some(idx);
            }
            None => self.edited_index = None,
            _ => {}
        }
    }

    /// Applies an editor mutation and writes the buffer back to the slot.
    fn edit(&mut self, app: &mut App, apply: impl FnOnce(&mut SlotEditor)) {
        let Some(idx) = self.edited_index else {
            return;
        };
        apply(&mut self.editor);
        if let Some(slots) = app.wizard.slots.as_mut() {
            slots.edit_slot(idx, self.editor.input());
        }
    }

    fn press_back(&mut self, app: &mut App) -> Vec<Effect> {
        self.edited_index = None;
        app.wizard.retreat()
    }

    fn press_reset(&mut self, app: &mut App) -> Vec<Effect> {
        self.edited_index = None;
        match app.wizard.slots.as_mut() {
            Some(slots) => slots.reset_all(),
            None => Vec::new(),
        }
    }
}

impl Component for WordEntryComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        self.sync_editor(app);

        let (on_back, on_reset, on_confirm) = match app.wizard.slots.as_ref() {
            Some(slots) => (slots.f_back.get(), slots.f_reset.get(), slots.f_confirm.get()),
            None => return Vec::new(),
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('v') = key.code {
                return vec![Effect::ClipboardPasteRequested];
            }
            return Vec::new();
        }

        match key.code {
            KeyCode::Esc => app.wizard.cancel(),
            KeyCode::Tab | KeyCode::Down => {
                app.focus.next();
                Vec::new()
            }
            KeyCode::BackTab | KeyCode::Up => {
                app.focus.prev();
                Vec::new()
            }
            KeyCode::Enter if on_back => self.press_back(app),
            KeyCode::Enter if on_reset => self.press_reset(app),
            KeyCode::Enter if on_confirm => app.wizard.confirm(),
            KeyCode::Enter => {
                // Convenience: Enter in a slot hops to the next one
                app.focus.next();
                Vec::new()
            }
            KeyCode::Left => {
                self.edit(app, SlotEditor::move_left);
                Vec::new()
            }
            KeyCode::Right => {
                self.edit(app, SlotEditor::move_right);
                Vec::new()
            }
            KeyCode::Home => {
                self.edit(app, SlotEditor::move_home);
                Vec::new()
            }
            KeyCode::End => {
                self.edit(app, SlotEditor::move_end);
                Vec::new()
            }
            KeyCode::Backspace => {
                self.edit(app, SlotEditor::backspace);
                Vec::new()
            }
            KeyCode::Delete => {
                self.edit(app, SlotEditor::delete_forward);
                Vec::new()
            }
            KeyCode::Char(c) => {
                self.edit(app, |editor| editor.insert_char(c));
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = Position::new(mouse.column, mouse.row);

        if let Some(idx) = self.slot_areas.iter().position(|area| area.contains(position)) {
            if let Some(slots) = app.wizard.slots.as_ref() {
                app.focus.focus(&slots.f_slots[idx]);
            }
            self.sync_editor(app);
            return Vec::new();
        }
        if self.back_area.contains(position) {
            return self.press_back(app);
        }
        if self.reset_area.contains(position) {
            return self.press_reset(app);
        }
        if self.confirm_area.contains(position) {
            return app.wizard.confirm();
        }
        Vec::new()
    }

    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::PasteCaptured(text) => {
                // Bulk replace invalidates the per-slot edit buffer
                self.edited_index = None;
                app.wizard.paste(text)
            }
            Msg::PasteNoticeExpired => {
                if let Some(slots) = app.wizard.slots.as_mut() {
                    slots.expire_notice();
                }
                Vec::new()
            }
            Msg::Resize(..) => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &app.ctx.theme;
        let Some(slots) = app.wizard.slots.as_ref() else {
            return;
        };

        let has_notice = slots.notice().is_some();
        let columns = column_layout(slots.len(), DISPLAY_COLUMNS);
        let grid_rows = columns.first().map(Vec::len).unwrap_or(0) as u16;

        let rows = Layout::vertical([
            Constraint::Length(3), // Back button
            Constraint::Length(1), // Heading
            Constraint::Length(1), // Subtitle
            Constraint::Length(1), // Tip
            Constraint::Length(if has_notice { 1 } else { 0 }),
            Constraint::Length(1), // Spacer
            Constraint::Length(grid_rows),
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Buttons
            Constraint::Min(0),
        ])
        .split(rect);

        let [back_area, _] = Layout::horizontal([Constraint::Length(8), Constraint::Min(0)]).areas(rows[0]);
        th::render_button(frame, back_area, "‹ Back", true, slots.f_back.get(), theme);
        self.back_area = back_area;

        frame.render_widget(Paragraph::new("Mnemonic phrase").style(theme.heading_style()), rows[1]);
        frame.render_widget(
            Paragraph::new("Enter or paste your saved seed phrase").style(theme.text_secondary_style()),
            rows[2],
        );
        frame.render_widget(
            Paragraph::new("Tip: you can paste your full seed phrase and it will auto-fill all fields.")
                .style(theme.text_muted_style()),
            rows[3],
        );

        if let Some(notice) = slots.notice() {
            frame.render_widget(Paragraph::new(notice).style(theme.error_style()), rows[4]);
        }

        let column_areas = Layout::horizontal([Constraint::Ratio(1, DISPLAY_COLUMNS as u32); DISPLAY_COLUMNS]).split(rows[6]);

        self.slot_areas = vec![Rect::default(); slots.len()];
        for (col_idx, column) in columns.iter().enumerate() {
            let column_area = column_areas[col_idx];
            for (row_idx, &slot_idx) in column.iter().enumerate() {
                let cell = Rect::new(column_area.x, column_area.y + row_idx as u16, column_area.width.saturating_sub(2), 1);
                let focused = slots.f_slots[slot_idx].get();
                let text = if focused && self.edited_index == Some(slot_idx) {
                    self.editor.input()
                } else {
                    slots.word(slot_idx)
                };

                let prefix = format!("{:>2} │ ", slot_idx + 1);
                let number_style = if focused {
                    ratatui::style::Style::default().fg(theme.roles().accent_primary)
                } else {
                    theme.text_muted_style()
                };
                let line = Line::from(vec![
                    Span::styled(prefix.clone(), number_style),
                    Span::styled(text.to_string(), th::input_style(theme, focused)),
                ]);
                frame.render_widget(Paragraph::new(line), cell);

                if focused {
                    let caret_offset = if self.edited_index == Some(slot_idx) {
                        self.editor.input()[..self.editor.cursor()].width() as u16
                    } else {
                        text.width() as u16
                    };
                    let x = (cell.x + prefix.width() as u16 + caret_offset).min(cell.right().saturating_sub(1));
                    frame.set_cursor_position(Position::new(x, cell.y));
                }
                self.slot_areas[slot_idx] = cell;
            }
        }

        let [_, reset_area, _, confirm_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
        ])
        .areas(rows[8]);
        th::render_button(frame, reset_area, "Reset", true, slots.f_reset.get(), theme);
        th::render_button(frame, confirm_area, "Confirm", slots.is_ready(), slots.f_confirm.get(), theme);
        self.reset_area = reset_area;
        self.confirm_area = confirm_area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &app.ctx.theme,
            &[
                ("Tab/↑↓", " Move "),
                ("Ctrl+V", " Paste phrase "),
                ("Enter", " Activate "),
                ("Esc", " Cancel "),
            ],
        )
    }
}
