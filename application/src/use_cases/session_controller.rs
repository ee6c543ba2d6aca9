//! Session controller for the interactive application.
//!
//! Every user intent arrives as a [`SessionAction`] and is applied to the
//! [`SessionState`] by exactly one handler. The renderer reads the state
//! after each dispatch; nothing is deferred to a later cycle.

use crate::memory::Memory;
use crate::ports::memory_store::MemoryError;
use crate::ports::progress::TurnProgressNotifier;
use crate::use_cases::authenticate::AuthUseCase;
use crate::use_cases::chat_turn::{ChatTurnError, ChatTurnInput, ChatTurnUseCase};
use memchat_domain::{DomainError, Message, Notice, SessionState};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

pub const MISSING_CREDENTIALS: &str = "Please enter both email and password.";
pub const MISSING_SIGN_UP_FIELDS: &str = "Please fill in all fields.";
pub const MEMORIES_CLEARED: &str = "All memories cleared!";

/// A user intent raised by the interactive UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    SignIn {
        email: String,
        password: String,
    },
    SignUp {
        email: String,
        password: String,
        full_name: String,
    },
    SignOut,
    ClearMemories,
    SendMessage(String),
}

/// Errors that escape a dispatch
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    NotAuthenticated(#[from] DomainError),

    #[error(transparent)]
    ChatTurn(#[from] ChatTurnError),

    #[error("Memory error: {0}")]
    Memory(#[from] MemoryError),
}

/// Applies [`SessionAction`]s to a [`SessionState`]
#[derive(Clone)]
pub struct SessionController {
    auth: AuthUseCase,
    chat: ChatTurnUseCase,
    memory: Arc<Memory>,
}

impl SessionController {
    pub fn new(auth: AuthUseCase, chat: ChatTurnUseCase, memory: Arc<Memory>) -> Self {
        Self { auth, chat, memory }
    }

    /// Apply one action.
    ///
    /// The previous notice is dropped first. Auth failures become notices;
    /// chat and clear-memory failures are returned with the state as it was
    /// when the failing call started.
    pub async fn dispatch(
        &self,
        state: &mut SessionState,
        action: SessionAction,
        progress: &dyn TurnProgressNotifier,
    ) -> Result<(), SessionError> {
        state.clear_notice();

        match action {
            SessionAction::SignIn { email, password } => {
                if email.is_empty() || password.is_empty() {
                    state.set_notice(Notice::warning(MISSING_CREDENTIALS));
                    return Ok(());
                }
                self.auth.sign_in(state, &email, &password).await;
            }
            SessionAction::SignUp {
                email,
                password,
                full_name,
            } => {
                if email.is_empty() || password.is_empty() || full_name.is_empty() {
                    state.set_notice(Notice::warning(MISSING_SIGN_UP_FIELDS));
                    return Ok(());
                }
                self.auth.sign_up(state, &email, &password, &full_name).await;
            }
            SessionAction::SignOut => self.auth.sign_out(state).await,
            SessionAction::ClearMemories => {
                let user_id = state.user_id()?;
                self.memory.clear(&user_id).await?;
                state.clear_history();
                info!(user_id = %user_id, "memories cleared");
                state.set_notice(Notice::success(MEMORIES_CLEARED));
            }
            SessionAction::SendMessage(text) => {
                if text.trim().is_empty() {
                    debug!("ignoring blank message");
                    return Ok(());
                }
                let user_id = state.user_id()?;
                state.push_message(Message::user(text.clone()));
                let output = self
                    .chat
                    .execute_with_progress(ChatTurnInput::new(text, user_id), progress)
                    .await?;
                state.push_message(Message::assistant(output.response));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::test_support::{FakeAuth, FakeLlm, FakeMemoryStore};
    use memchat_domain::{AuthUser, NoticeLevel, Role};

    struct Harness {
        controller: SessionController,
        store: Arc<FakeMemoryStore>,
        auth: Arc<FakeAuth>,
    }

    fn harness(store: FakeMemoryStore, llm: FakeLlm, auth: FakeAuth) -> Harness {
        let store = Arc::new(store);
        let auth = Arc::new(auth);
        let memory = Arc::new(Memory::new(store.clone(), Arc::new(llm)));
        let controller = SessionController::new(
            AuthUseCase::new(auth.clone()),
            ChatTurnUseCase::new(memory.clone()),
            memory,
        );
        Harness {
            controller,
            store,
            auth,
        }
    }

    fn alice() -> AuthUser {
        AuthUser::new("alice-id", "alice@example.com")
    }

    fn default_harness() -> Harness {
        harness(
            FakeMemoryStore::default(),
            FakeLlm::replying("Hello Alice"),
            FakeAuth::accepting(alice()),
        )
    }

    fn sign_in(email: &str, password: &str) -> SessionAction {
        SessionAction::SignIn {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_in_requires_email_and_password() {
        let h = default_harness();
        let mut state = SessionState::new();

        h.controller
            .dispatch(&mut state, sign_in("alice@example.com", ""), &NoProgress)
            .await
            .unwrap();

        assert!(!state.is_authenticated());
        let notice = state.notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.text, MISSING_CREDENTIALS);
        assert!(h.auth.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sign_up_requires_all_fields() {
        let h = default_harness();
        let mut state = SessionState::new();

        let action = SessionAction::SignUp {
            email: "alice@example.com".to_string(),
            password: "pw".to_string(),
            full_name: String::new(),
        };
        h.controller
            .dispatch(&mut state, action, &NoProgress)
            .await
            .unwrap();

        assert_eq!(state.notice().unwrap().text, MISSING_SIGN_UP_FIELDS);
        assert!(h.auth.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sign_in_then_sign_out() {
        let h = default_harness();
        let mut state = SessionState::new();

        h.controller
            .dispatch(&mut state, sign_in("alice@example.com", "pw"), &NoProgress)
            .await
            .unwrap();
        assert!(state.is_authenticated());

        h.controller
            .dispatch(&mut state, SessionAction::SignOut, &NoProgress)
            .await
            .unwrap();
        assert!(!state.is_authenticated());
        assert_eq!(
            *h.auth.calls.lock().unwrap(),
            vec!["sign_in:alice@example.com", "sign_out"]
        );
    }

    #[tokio::test]
    async fn test_send_message_appends_user_and_assistant() {
        let h = default_harness();
        let mut state = SessionState::new();
        state.sign_in(alice());

        h.controller
            .dispatch(
                &mut state,
                SessionAction::SendMessage("Hi there".to_string()),
                &NoProgress,
            )
            .await
            .unwrap();

        let roles: Vec<Role> = state.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
        assert_eq!(state.messages()[1].content, "Hello Alice");

        let searches = h.store.searches.lock().unwrap();
        assert_eq!(searches[0].1.as_str(), "alice-id");
    }

    #[tokio::test]
    async fn test_send_message_failure_keeps_user_message() {
        let h = harness(
            FakeMemoryStore::default(),
            FakeLlm::failing("model offline"),
            FakeAuth::accepting(alice()),
        );
        let mut state = SessionState::new();
        state.sign_in(alice());

        let result = h
            .controller
            .dispatch(
                &mut state,
                SessionAction::SendMessage("Hi".to_string()),
                &NoProgress,
            )
            .await;

        assert!(matches!(result, Err(SessionError::ChatTurn(_))));
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0], Message::user("Hi"));
    }

    #[tokio::test]
    async fn test_blank_message_is_ignored() {
        let h = default_harness();
        let mut state = SessionState::new();
        state.sign_in(alice());

        h.controller
            .dispatch(
                &mut state,
                SessionAction::SendMessage("   ".to_string()),
                &NoProgress,
            )
            .await
            .unwrap();

        assert!(state.messages().is_empty());
        assert!(h.store.searches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_send_message_requires_sign_in() {
        let h = default_harness();
        let mut state = SessionState::new();

        let result = h
            .controller
            .dispatch(
                &mut state,
                SessionAction::SendMessage("Hi".to_string()),
                &NoProgress,
            )
            .await;

        assert!(matches!(result, Err(SessionError::NotAuthenticated(_))));
        assert!(state.messages().is_empty());
    }

    #[tokio::test]
    async fn test_clear_memories_empties_history() {
        let h = default_harness();
        let mut state = SessionState::new();
        state.sign_in(alice());
        state.push_message(Message::user("hi"));

        h.controller
            .dispatch(&mut state, SessionAction::ClearMemories, &NoProgress)
            .await
            .unwrap();

        assert!(state.messages().is_empty());
        assert_eq!(state.notice().unwrap().text, MEMORIES_CLEARED);
        assert_eq!(h.store.cleared.lock().unwrap()[0].as_str(), "alice-id");
    }

    #[tokio::test]
    async fn test_clear_memories_failure_keeps_history() {
        let h = harness(
            FakeMemoryStore {
                fail_clear: true,
                ..FakeMemoryStore::default()
            },
            FakeLlm::replying("unused"),
            FakeAuth::accepting(alice()),
        );
        let mut state = SessionState::new();
        state.sign_in(alice());
        state.push_message(Message::user("hi"));

        let result = h
            .controller
            .dispatch(&mut state, SessionAction::ClearMemories, &NoProgress)
            .await;

        assert!(matches!(result, Err(SessionError::Memory(_))));
        assert_eq!(state.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_clears_previous_notice() {
        let h = default_harness();
        let mut state = SessionState::new();
        state.set_notice(Notice::error("old"));
        state.sign_in(alice());

        h.controller
            .dispatch(
                &mut state,
                SessionAction::SendMessage("Hi".to_string()),
                &NoProgress,
            )
            .await
            .unwrap();

        assert!(state.notice().is_none());
    }
}
