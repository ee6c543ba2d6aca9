//! Sidebar widget: auth forms or account controls

use crate::tui::state::{AuthTab, Focus, TuiState};
use memchat_domain::SessionState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub const SIDEBAR_TITLE: &str = "Local AI Chat";

pub struct SidebarWidget<'a> {
    session: &'a SessionState,
    state: &'a TuiState,
}

impl<'a> SidebarWidget<'a> {
    pub fn new(session: &'a SessionState, state: &'a TuiState) -> Self {
        Self { session, state }
    }

    fn focus_style(&self, focus: Focus) -> Style {
        if self.state.focus == focus {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }

    fn button(&self, label: &str, focus: Focus) -> Line<'static> {
        let style = if self.state.focus == focus {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(Span::styled(format!("[ {} ]", label), style))
    }

    fn field(&self, label: &str, value: &str, masked: bool, focus: Focus) -> Vec<Line<'static>> {
        let shown = if masked {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let mut value_spans = vec![Span::raw(format!("  {}", shown))];
        if self.state.focus == focus {
            value_spans.push(Span::styled(" ", Style::default().bg(Color::Yellow)));
        }
        vec![
            Line::from(Span::styled(label.to_string(), self.focus_style(focus))),
            Line::from(value_spans),
        ]
    }

    fn tab_row(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for tab in [AuthTab::Login, AuthTab::SignUp] {
            let mut style = if tab == self.state.tab {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if self.state.focus == Focus::AuthTabs && tab == self.state.tab {
                style = style.bg(Color::DarkGray);
            }
            spans.push(Span::styled(format!(" {} ", tab.label()), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn auth_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![self.tab_row(), Line::from("")];
        let subtitle = Style::default().add_modifier(Modifier::BOLD);

        match self.state.tab {
            AuthTab::Login => {
                let form = &self.state.login;
                lines.push(Line::from(Span::styled("Login", subtitle)));
                lines.extend(self.field("Email", &form.email, false, Focus::Email));
                lines.extend(self.field("Password", &form.password, true, Focus::Password));
                lines.push(Line::from(""));
                lines.push(self.button("Login", Focus::Submit));
            }
            AuthTab::SignUp => {
                let form = &self.state.sign_up;
                lines.push(Line::from(Span::styled("Sign Up", subtitle)));
                lines.extend(self.field("Email", &form.email, false, Focus::Email));
                lines.extend(self.field("Password", &form.password, true, Focus::Password));
                lines.extend(self.field("Full Name", &form.full_name, false, Focus::FullName));
                lines.push(Line::from(""));
                lines.push(self.button("Sign Up", Focus::Submit));
            }
        }
        lines
    }

    fn account_lines(&self) -> Vec<Line<'static>> {
        let email = self
            .session
            .user()
            .map(|u| u.display_email().to_string())
            .unwrap_or_default();
        vec![
            Line::from(Span::styled(
                format!("Logged in as: {}", email),
                Style::default().fg(Color::Green),
            )),
            Line::from(""),
            self.button("Logout", Focus::Logout),
            Line::from(""),
            Line::from(Span::styled(
                "Memory Management",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            self.button("Clear All Memories", Focus::ClearMemories),
        ]
    }
}

impl<'a> Widget for SidebarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = if self.session.is_authenticated() {
            self.account_lines()
        } else {
            self.auth_lines()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", SIDEBAR_TITLE))
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
