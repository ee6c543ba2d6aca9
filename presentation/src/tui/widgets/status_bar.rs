//! Status bar widget: busy indicator + key hints

use crate::progress::reporter::THINKING;
use crate::tui::state::{Focus, TuiState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static str {
        match self.state.focus {
            Focus::AuthTabs => "←/→:switch tab  Tab:next  Esc:quit",
            Focus::ChatInput => "Enter:send  ↑/↓:scroll  Tab:next  Esc:quit",
            _ => "Enter:select  Tab:next  Shift+Tab:back  Esc:quit",
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let line = if self.state.busy {
            Line::from(Span::styled(
                format!(" {} ", THINKING),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(format!(" {}", self.hints()), bg_style))
        };
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
