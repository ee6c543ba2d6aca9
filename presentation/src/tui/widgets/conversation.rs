//! Conversation widget: welcome screen or role-tagged chat history

use crate::tui::state::TuiState;
use memchat_domain::{Role, SessionState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub const WELCOME_TITLE: &str = "Welcome to Your Local Chat Assistant";
pub const WELCOME_TEXT: &str = "Please login or sign up to start a conversation.";
pub const CHAT_TITLE: &str = "Chat with Your Local AI";

fn role_label(role: Role) -> (&'static str, Color) {
    match role {
        Role::User => ("You", Color::Cyan),
        Role::Assistant => ("AI", Color::Green),
        Role::System => ("System", Color::DarkGray),
    }
}

fn push_entry(lines: &mut Vec<Line<'_>>, role: Role, content: &str) {
    let (label, color) = role_label(role);
    lines.push(Line::from(Span::styled(
        format!("{}: ", label),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    for content_line in content.lines() {
        lines.push(Line::from(format!("  {}", content_line)));
    }
    lines.push(Line::from(""));
}

/// First line to show so that `scroll` lines above the newest are hidden below
fn scroll_offset(total_lines: usize, visible_height: u16, scroll: u16) -> u16 {
    let total = u16::try_from(total_lines).unwrap_or(u16::MAX);
    if total > visible_height {
        let max_scroll = total - visible_height;
        max_scroll - scroll.min(max_scroll)
    } else {
        0
    }
}

pub struct ConversationWidget<'a> {
    session: &'a SessionState,
    state: &'a TuiState,
}

impl<'a> ConversationWidget<'a> {
    pub fn new(session: &'a SessionState, state: &'a TuiState) -> Self {
        Self { session, state }
    }

    fn format_messages(&self) -> Text<'a> {
        let mut lines: Vec<Line> = Vec::new();

        for msg in self.session.messages() {
            push_entry(&mut lines, msg.role, &msg.content);
        }
        if let Some(text) = &self.state.pending {
            push_entry(&mut lines, Role::User, text);
        }

        Text::from(lines)
    }

    fn render_welcome(area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", WELCOME_TITLE));
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                WELCOME_TITLE,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(WELCOME_TEXT),
        ];
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

impl<'a> Widget for ConversationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.session.is_authenticated() {
            Self::render_welcome(area, buf);
            return;
        }

        let visible_height = area.height.saturating_sub(2);
        let content_width = area.width.saturating_sub(2);

        // Built without block so line_count returns pure content lines.
        let paragraph = Paragraph::new(self.format_messages()).wrap(Wrap { trim: false });
        // scroll=0 shows the newest messages
        let scroll = scroll_offset(
            paragraph.line_count(content_width),
            visible_height,
            self.state.scroll,
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", CHAT_TITLE))
            .style(Style::default().fg(Color::White));

        paragraph.block(block).scroll((scroll, 0)).render(area, buf);
    }
}
