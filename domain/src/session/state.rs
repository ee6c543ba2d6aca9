//! Session state for the interactive application
//!
//! Single source of truth for one running session. Handlers receive it by
//! `&mut` and apply the transitions below; renderers only read it.
//!
//! ```text
//! Unauthenticated ──sign_in(user)──> Authenticated
//!        ^                                │
//!        └──────────sign_out()────────────┘
//! ```

use super::notice::Notice;
use crate::auth::entities::AuthUser;
use crate::conversation::message::Message;
use crate::core::error::DomainError;
use crate::memory::entry::UserId;

/// Mutable state of one interactive session
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    authenticated: bool,
    user: Option<AuthUser>,
    messages: Vec<Message>,
    notice: Option<Notice>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    /// Chat history in chronological order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Memory scope of the signed-in user
    pub fn user_id(&self) -> Result<UserId, DomainError> {
        match (&self.user, self.authenticated) {
            (Some(user), true) => UserId::new(user.id.clone()),
            _ => Err(DomainError::NotAuthenticated),
        }
    }

    // -- Transitions --

    pub fn sign_in(&mut self, user: AuthUser) {
        self.authenticated = true;
        self.user = Some(user);
    }

    /// Drop the user and the chat history; never fails
    pub fn sign_out(&mut self) {
        self.authenticated = false;
        self.user = None;
        self.messages.clear();
    }

    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn clear_history(&mut self) {
        self.messages.clear();
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> SessionState {
        let mut state = SessionState::new();
        state.sign_in(AuthUser::new("u1", "me@example.com"));
        state.push_message(Message::user("hi"));
        state.push_message(Message::assistant("hello"));
        state
    }

    #[test]
    fn test_new_state_is_unauthenticated_and_empty() {
        let state = SessionState::new();
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
        assert!(state.messages().is_empty());
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_sign_in_stores_user() {
        let state = signed_in();
        assert!(state.is_authenticated());
        assert_eq!(state.user().unwrap().id, "u1");
        assert_eq!(state.user_id().unwrap().as_str(), "u1");
    }

    #[test]
    fn test_sign_out_resets_everything() {
        let mut state = signed_in();
        state.sign_out();
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
        assert!(state.messages().is_empty());
    }

    #[test]
    fn test_sign_out_when_already_signed_out_is_harmless() {
        let mut state = SessionState::new();
        state.sign_out();
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_user_id_requires_authentication() {
        let state = SessionState::new();
        assert_eq!(state.user_id().unwrap_err(), DomainError::NotAuthenticated);
    }

    #[test]
    fn test_history_keeps_chronological_order() {
        let state = signed_in();
        let contents: Vec<_> = state.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["hi", "hello"]);
    }

    #[test]
    fn test_notice_can_be_set_and_cleared() {
        let mut state = SessionState::new();
        state.set_notice(Notice::warning("careful"));
        assert_eq!(state.notice().unwrap().text, "careful");
        state.clear_notice();
        assert!(state.notice().is_none());
    }
}
