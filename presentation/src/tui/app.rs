//! TUI application: single-task event loop
//!
//! ```text
//! TuiApp::run
//!   ├─ render(SessionState, TuiState)
//!   ├─ crossterm EventStream → KeyHandler → TuiState
//!   └─ Enter → SessionAction → SessionController::dispatch
//! ```
//!
//! Dispatch awaits inline; the frame drawn just before it shows the busy
//! indicator while the action runs.

use super::keys::{KeyAction, KeyHandler};
use super::state::TuiState;
use super::widgets::{
    MainLayout, conversation::ConversationWidget, input::InputWidget, notice::NoticeWidget,
    sidebar::SidebarWidget, status_bar::StatusBarWidget,
};
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use memchat_application::{NoProgress, SessionAction, SessionController};
use memchat_domain::{Notice, SessionState};
use ratatui::{Frame, Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{debug, warn};

/// Interactive chat application with sign-in sidebar
pub struct TuiApp {
    controller: SessionController,
    session: SessionState,
    state: TuiState,
}

impl TuiApp {
    pub fn new(controller: SessionController) -> Self {
        Self {
            controller,
            session: SessionState::new(),
            state: TuiState::new(),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn state(&self) -> &TuiState {
        &self.state
    }

    /// Run the TUI main loop until the user quits
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Restore the terminal before the default hook prints
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let result = self.event_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut events = EventStream::new();

        loop {
            self.draw(terminal)?;
            if self.state.should_quit {
                return Ok(());
            }

            let Some(event) = events.next().await else {
                return Ok(());
            };
            let Event::Key(key) = event? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(action) = self.handle_key(key) {
                self.state.busy = true;
                self.draw(terminal)?;
                self.dispatch(action).await;
            }
        }
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| render(frame, &self.session, &self.state))?;
        Ok(())
    }

    /// Apply a key press to the UI state; returns the action Enter produced
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SessionAction> {
        if self.state.busy {
            return None;
        }
        match KeyHandler::handle(self.state.focus, key) {
            KeyAction::Quit => self.state.should_quit = true,
            KeyAction::NextFocus => self.state.next_focus(),
            KeyAction::PrevFocus => self.state.prev_focus(),
            KeyAction::SwitchTab => self.state.switch_tab(),
            KeyAction::Activate => return self.state.activate(),
            KeyAction::InsertChar(c) => self.state.insert_char(c),
            KeyAction::DeleteChar => self.state.delete_char(),
            KeyAction::ScrollUp => self.state.scroll_up(),
            KeyAction::ScrollDown => self.state.scroll_down(),
            KeyAction::None => {}
        }
        None
    }

    /// Run one session action and fold its outcome into the UI
    pub async fn dispatch(&mut self, action: SessionAction) {
        debug!("Dispatching {:?}", ActionKind(&action));
        let result = self
            .controller
            .dispatch(&mut self.session, action, &NoProgress)
            .await;
        if let Err(e) = result {
            warn!("Session action failed: {}", e);
            self.session.set_notice(Notice::error(format!("Error: {}", e)));
        }
        self.state.busy = false;
        self.state.pending = None;
        self.state.sync(&self.session);
    }
}

/// Logs the action name without credentials or message text
struct ActionKind<'a>(&'a SessionAction);

impl std::fmt::Debug for ActionKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self.0 {
            SessionAction::SignIn { .. } => "SignIn",
            SessionAction::SignUp { .. } => "SignUp",
            SessionAction::SignOut => "SignOut",
            SessionAction::ClearMemories => "ClearMemories",
            SessionAction::SendMessage(_) => "SendMessage",
        };
        f.write_str(name)
    }
}

/// Draw the whole screen from session and UI state
pub fn render(frame: &mut Frame, session: &SessionState, state: &TuiState) {
    let notice = session.notice();
    let layout = MainLayout::compute(frame.area(), notice.is_some(), session.is_authenticated());

    frame.render_widget(SidebarWidget::new(session, state), layout.sidebar);
    frame.render_widget(ConversationWidget::new(session, state), layout.conversation);
    if let Some(notice) = notice {
        frame.render_widget(NoticeWidget::new(notice), layout.notice);
    }
    if session.is_authenticated() {
        frame.render_widget(InputWidget::new(state), layout.input);
    }
    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);
}
