//! TUI view state
//!
//! Everything the screen needs besides the [`SessionState`]: which control
//! has focus, the contents of the forms, the draft message and scrolling.
//! Session data (user, chat history, notice) is never duplicated here.

use memchat_application::SessionAction;
use memchat_domain::SessionState;

/// Login / Sign Up tabs of the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    SignUp,
}

impl AuthTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::SignUp => "Sign Up",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Login => Self::SignUp,
            Self::SignUp => Self::Login,
        }
    }
}

/// A focusable control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    AuthTabs,
    Email,
    Password,
    FullName,
    Submit,
    ChatInput,
    Logout,
    ClearMemories,
}

impl Focus {
    /// Whether typing edits this control
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Self::Email | Self::Password | Self::FullName | Self::ChatInput
        )
    }
}

const LOGIN_ORDER: &[Focus] = &[Focus::AuthTabs, Focus::Email, Focus::Password, Focus::Submit];
const SIGN_UP_ORDER: &[Focus] = &[
    Focus::AuthTabs,
    Focus::Email,
    Focus::Password,
    Focus::FullName,
    Focus::Submit,
];
const CHAT_ORDER: &[Focus] = &[Focus::ChatInput, Focus::Logout, Focus::ClearMemories];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Central TUI state, owned by the app loop
#[derive(Debug, Clone)]
pub struct TuiState {
    pub tab: AuthTab,
    pub focus: Focus,
    pub login: LoginForm,
    pub sign_up: SignUpForm,
    /// Draft chat message
    pub input: String,
    /// Lines scrolled up from the newest message
    pub scroll: u16,
    /// A dispatch is in flight
    pub busy: bool,
    /// Message sent but not yet recorded in the session
    pub pending: Option<String>,
    pub should_quit: bool,
    authenticated: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            tab: AuthTab::Login,
            focus: Focus::Email,
            login: LoginForm::default(),
            sign_up: SignUpForm::default(),
            input: String::new(),
            scroll: 0,
            busy: false,
            pending: None,
            should_quit: false,
            authenticated: false,
        }
    }

    /// Controls reachable with Tab, in order
    pub fn focus_order(&self) -> &'static [Focus] {
        if self.authenticated {
            CHAT_ORDER
        } else {
            match self.tab {
                AuthTab::Login => LOGIN_ORDER,
                AuthTab::SignUp => SIGN_UP_ORDER,
            }
        }
    }

    pub fn next_focus(&mut self) {
        self.move_focus(1);
    }

    pub fn prev_focus(&mut self) {
        let len = self.focus_order().len();
        self.move_focus(len.saturating_sub(1));
    }

    fn move_focus(&mut self, step: usize) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(current + step) % order.len()];
    }

    pub fn switch_tab(&mut self) {
        self.tab = self.tab.toggle();
        if !self.focus_order().contains(&self.focus) {
            self.focus = Focus::AuthTabs;
        }
    }

    /// The text buffer edited by the focused control
    pub fn field_mut(&mut self) -> Option<&mut String> {
        match (self.focus, self.tab) {
            (Focus::ChatInput, _) => Some(&mut self.input),
            (Focus::Email, AuthTab::Login) => Some(&mut self.login.email),
            (Focus::Password, AuthTab::Login) => Some(&mut self.login.password),
            (Focus::Email, AuthTab::SignUp) => Some(&mut self.sign_up.email),
            (Focus::Password, AuthTab::SignUp) => Some(&mut self.sign_up.password),
            (Focus::FullName, AuthTab::SignUp) => Some(&mut self.sign_up.full_name),
            _ => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.field_mut() {
            field.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(field) = self.field_mut() {
            field.pop();
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Turn Enter on the focused control into a session action.
    ///
    /// Enter inside a form field submits the form. The tab row only
    /// switches tabs.
    pub fn activate(&mut self) -> Option<SessionAction> {
        match self.focus {
            Focus::AuthTabs => {
                self.switch_tab();
                None
            }
            Focus::Email | Focus::Password | Focus::FullName | Focus::Submit => {
                Some(match self.tab {
                    AuthTab::Login => SessionAction::SignIn {
                        email: self.login.email.trim().to_string(),
                        password: self.login.password.clone(),
                    },
                    AuthTab::SignUp => SessionAction::SignUp {
                        email: self.sign_up.email.trim().to_string(),
                        password: self.sign_up.password.clone(),
                        full_name: self.sign_up.full_name.trim().to_string(),
                    },
                })
            }
            Focus::ChatInput => {
                self.scroll = 0;
                let text = std::mem::take(&mut self.input);
                if !text.trim().is_empty() {
                    self.pending = Some(text.clone());
                }
                Some(SessionAction::SendMessage(text))
            }
            Focus::Logout => Some(SessionAction::SignOut),
            Focus::ClearMemories => Some(SessionAction::ClearMemories),
        }
    }

    /// Follow a sign-in or sign-out that happened in the session
    pub fn sync(&mut self, session: &SessionState) {
        if session.is_authenticated() == self.authenticated {
            return;
        }
        self.authenticated = session.is_authenticated();
        self.login = LoginForm::default();
        self.sign_up = SignUpForm::default();
        self.input.clear();
        self.scroll = 0;
        if self.authenticated {
            self.focus = Focus::ChatInput;
        } else {
            self.tab = AuthTab::Login;
            self.focus = Focus::Email;
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
