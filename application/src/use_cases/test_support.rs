//! Hand-written port fakes shared by the use case tests.

use crate::ports::auth_provider::{AuthError, AuthProvider};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::memory_store::{MemoryError, MemoryStore};
use crate::ports::progress::TurnProgressNotifier;
use async_trait::async_trait;
use memchat_domain::{AuthResponse, AuthSession, AuthUser, MemoryEntry, Message, UserId};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Memory store returning canned search results and recording every call
#[derive(Default)]
pub struct FakeMemoryStore {
    pub results: Vec<MemoryEntry>,
    pub fail_search: bool,
    pub fail_add: bool,
    pub fail_clear: bool,
    pub searches: Mutex<Vec<(String, UserId, usize)>>,
    pub added: Mutex<Vec<(Vec<Message>, UserId)>>,
    pub cleared: Mutex<Vec<UserId>>,
}

impl FakeMemoryStore {
    pub fn with_memories(texts: &[&str]) -> Self {
        Self {
            results: texts
                .iter()
                .enumerate()
                .map(|(i, text)| MemoryEntry::new(format!("m{i}"), *text, UserId::default()))
                .collect(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl MemoryStore for FakeMemoryStore {
    async fn search(
        &self,
        query: &str,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<MemoryEntry>, MemoryError> {
        self.searches
            .lock()
            .unwrap()
            .push((query.to_string(), user_id.clone(), limit));
        if self.fail_search {
            return Err(MemoryError::Storage("search unavailable".to_string()));
        }
        Ok(self.results.iter().take(limit).cloned().collect())
    }

    async fn add(
        &self,
        messages: &[Message],
        user_id: &UserId,
    ) -> Result<Vec<MemoryEntry>, MemoryError> {
        self.added
            .lock()
            .unwrap()
            .push((messages.to_vec(), user_id.clone()));
        if self.fail_add {
            return Err(MemoryError::Storage("add unavailable".to_string()));
        }
        Ok(Vec::new())
    }

    async fn clear(&self, user_id: &UserId) -> Result<(), MemoryError> {
        self.cleared.lock().unwrap().push(user_id.clone());
        if self.fail_clear {
            return Err(MemoryError::Storage("clear unavailable".to_string()));
        }
        Ok(())
    }
}

/// Scripted language model
pub struct FakeLlm {
    replies: Mutex<VecDeque<Result<String, String>>>,
    pub received: Mutex<Vec<Vec<Message>>>,
}

impl FakeLlm {
    pub fn replying(text: &str) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from([Ok(text.to_string())])),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from([Err(message.to_string())])),
            received: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LlmGateway for FakeLlm {
    fn model(&self) -> &str {
        "fake-model"
    }

    async fn generate_response(&self, messages: &[Message]) -> Result<String, GatewayError> {
        self.received.lock().unwrap().push(messages.to_vec());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(GatewayError::RequestFailed(message)),
            None => Ok("(default response)".to_string()),
        }
    }
}

/// Auth provider with fixed outcomes per operation
pub struct FakeAuth {
    pub sign_up_result: Result<AuthResponse, String>,
    pub sign_in_result: Result<AuthResponse, String>,
    pub sign_out_fails: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeAuth {
    pub fn accepting(user: AuthUser) -> Self {
        let response = AuthResponse {
            user: Some(user),
            session: Some(AuthSession {
                access_token: "token".to_string(),
                refresh_token: None,
                expires_in: Some(3600),
            }),
        };
        Self {
            sign_up_result: Ok(response.clone()),
            sign_in_result: Ok(response),
            sign_out_fails: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            sign_up_result: Err(message.to_string()),
            sign_in_result: Err(message.to_string()),
            sign_out_fails: true,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AuthProvider for FakeAuth {
    async fn sign_up(
        &self,
        email: &str,
        _password: &str,
        full_name: &str,
    ) -> Result<AuthResponse, AuthError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("sign_up:{email}:{full_name}"));
        self.sign_up_result.clone().map_err(AuthError::Rejected)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        _password: &str,
    ) -> Result<AuthResponse, AuthError> {
        self.calls.lock().unwrap().push(format!("sign_in:{email}"));
        self.sign_in_result.clone().map_err(AuthError::Rejected)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.calls.lock().unwrap().push("sign_out".to_string());
        if self.sign_out_fails {
            return Err(AuthError::ConnectionError("offline".to_string()));
        }
        Ok(())
    }
}

/// Counts thinking start/end callbacks
#[derive(Default)]
pub struct CountingProgress {
    pub started: AtomicUsize,
    pub ended: AtomicUsize,
}

impl TurnProgressNotifier for CountingProgress {
    fn on_thinking_start(&self) {
        self.started.fetch_add(1, Ordering::SeqCst);
    }

    fn on_thinking_end(&self) {
        self.ended.fetch_add(1, Ordering::SeqCst);
    }
}
