//! Input widget: the chat message box

use crate::tui::state::{Focus, TuiState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const PLACEHOLDER: &str = "Type your message here...";

pub struct InputWidget<'a> {
    state: &'a TuiState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let active = self.state.focus == Focus::ChatInput && !self.state.busy;
        let color = if active { Color::Green } else { Color::DarkGray };

        let cursor = Span::styled(" ", Style::default().bg(color));
        let mut spans = vec![Span::styled("> ", Style::default().fg(color))];
        if self.state.input.is_empty() {
            if active {
                spans.push(cursor);
            }
            spans.push(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)));
        } else {
            spans.push(Span::raw(self.state.input.as_str()));
            if active {
                spans.push(cursor);
            }
        }

        // Keep the end of a long draft visible
        let inner_width = area.width.saturating_sub(2) as usize;
        let text_width = 2 + self.state.input.chars().count() + 1;
        let offset = text_width.saturating_sub(inner_width) as u16;

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Message ")
            .style(Style::default().fg(color));

        Paragraph::new(Line::from(spans))
            .block(block)
            .scroll((0, offset))
            .render(area, buf);
    }
}
