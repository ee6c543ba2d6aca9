//! Port fakes for presentation tests

use async_trait::async_trait;
use memchat_application::{
    AuthError, AuthProvider, GatewayError, LlmGateway, MemoryError, MemoryStore,
};
use memchat_domain::{AuthResponse, AuthUser, MemoryEntry, Message, UserId};
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeStore {
    pub fail_clear: bool,
    pub added: Mutex<Vec<(Vec<Message>, UserId)>>,
    pub cleared: Mutex<Vec<UserId>>,
}

#[async_trait]
impl MemoryStore for FakeStore {
    async fn search(
        &self,
        _query: &str,
        _user_id: &UserId,
        _limit: usize,
    ) -> Result<Vec<MemoryEntry>, MemoryError> {
        Ok(Vec::new())
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
        Ok(Vec::new())
    }

    async fn clear(&self, user_id: &UserId) -> Result<(), MemoryError> {
        self.cleared.lock().unwrap().push(user_id.clone());
        if self.fail_clear {
            return Err(MemoryError::Storage("database offline".to_string()));
        }
        Ok(())
    }
}

pub struct FakeLlm {
    replies: Mutex<VecDeque<String>>,
    fail: bool,
}

impl FakeLlm {
    pub fn replying(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            fail: true,
        }
    }
}

#[async_trait]
impl LlmGateway for FakeLlm {
    fn model(&self) -> &str {
        "fake-model"
    }

    async fn generate_response(&self, _messages: &[Message]) -> Result<String, GatewayError> {
        if self.fail {
            return Err(GatewayError::ConnectionError("ollama offline".to_string()));
        }
        Ok(self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| "ok".to_string()))
    }
}

pub struct FakeAuth {
    pub user: Option<AuthUser>,
}

#[async_trait]
impl AuthProvider for FakeAuth {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        _full_name: &str,
    ) -> Result<AuthResponse, AuthError> {
        self.sign_in_with_password(email, password).await
    }

    async fn sign_in_with_password(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<AuthResponse, AuthError> {
        match &self.user {
            Some(user) => Ok(AuthResponse {
                user: Some(user.clone()),
                session: None,
            }),
            None => Err(AuthError::Rejected("Invalid login credentials".to_string())),
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }
}
