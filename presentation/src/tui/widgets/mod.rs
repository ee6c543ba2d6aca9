//! TUI widgets: ratatui components for the main layout
//!
//! Layout:
//! ┌── Sidebar (34) ──┬── Conversation (flex) ──────────┐
//! │                  ├── Notice (3, when present) ─────┤
//! │                  ├── Input (3, when signed in) ────┤
//! └──────────────────┴── StatusBar (1) ────────────────┘

pub mod conversation;
pub mod input;
pub mod notice;
pub mod sidebar;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

const SIDEBAR_WIDTH: u16 = 34;

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub sidebar: Rect,
    pub conversation: Rect,
    pub notice: Rect,
    pub input: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect, show_notice: bool, show_input: bool) -> Self {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)])
            .split(area);

        let notice_h = if show_notice { 3 } else { 0 };
        let input_h = if show_input { 3 } else { 0 };
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(notice_h),
                Constraint::Length(input_h),
                Constraint::Length(1),
            ])
            .split(horizontal[1]);

        Self {
            sidebar: horizontal[0],
            conversation: vertical[0],
            notice: vertical[1],
            input: vertical[2],
            status_bar: vertical[3],
        }
    }
}
