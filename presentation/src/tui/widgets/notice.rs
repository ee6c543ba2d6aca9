//! Notice banner: one-cycle feedback from the last action

use memchat_domain::{Notice, NoticeLevel};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct NoticeWidget<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeWidget<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }

    pub fn color(level: NoticeLevel) -> Color {
        match level {
            NoticeLevel::Info => Color::Cyan,
            NoticeLevel::Success => Color::Green,
            NoticeLevel::Warning => Color::Yellow,
            NoticeLevel::Error => Color::Red,
        }
    }
}

impl<'a> Widget for NoticeWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = Self::color(self.notice.level);
        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(color));

        Paragraph::new(self.notice.text.as_str())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
