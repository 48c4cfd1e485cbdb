//! Widget-style builders shared by the wizard components.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a>(theme: &'a Theme, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(
            t,
            theme.text_secondary_style().add_modifier(Modifier::BOLD),
        ));
    }
    block
}

/// Style for panel-like containers.
pub fn panel_style(theme: &Theme) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Style for a word-slot input; the caller sets the border from focus.
pub fn input_style(theme: &Theme, focused: bool) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    let mut style = Style::default().bg(surface).fg(text);
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

/// Renders a bordered button; disabled buttons render muted and callers
/// ignore activation on them.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, enabled: bool, focused: bool, theme: &Theme) {
    let border_style = if enabled {
        theme.border_style(focused)
    } else {
        theme.text_muted_style()
    };

    let button_style = if enabled {
        let style = Style::default().fg(theme.roles().accent_secondary);
        if focused { style.bg(theme.roles().selection_bg) } else { style }
    } else {
        theme.text_muted_style()
    };

    frame.render_widget(
        Paragraph::new(label)
            .centered()
            .block(Block::bordered().border_style(border_style))
            .style(button_style),
        area,
    );
}

/// Builds alternating key/description spans for the hint bar.
pub fn build_hint_spans<'a>(theme: &Theme, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let key_style = Style::default().fg(theme.roles().accent_secondary).add_modifier(Modifier::BOLD);
    let desc_style = theme.text_muted_style();
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(*description, desc_style));
    }
    spans
}
