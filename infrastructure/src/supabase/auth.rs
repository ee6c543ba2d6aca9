//! Supabase Auth provider
//!
//! Calls the GoTrue REST endpoints of a Supabase project and keeps the
//! access token of the current session, so sign-out needs no arguments.

use super::error::SupabaseError;
use super::protocol::{
    PasswordRequest, SignUpData, SignUpRequest, error_message, parse_auth_response,
};
use async_trait::async_trait;
use memchat_application::{AuthError, AuthProvider};
use memchat_domain::AuthResponse;
use serde::Serialize;
use serde_json::Value;
use std::sync::Mutex;
use tracing::{debug, info};

pub struct SupabaseAuthProvider {
    http: reqwest::Client,
    url: String,
    key: String,
    access_token: Mutex<Option<String>>,
}

impl SupabaseAuthProvider {
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), url, key)
    }

    pub fn with_http(http: reqwest::Client, url: impl Into<String>, key: impl Into<String>) -> Self {
        let url = url.into().trim_end_matches('/').to_string();
        info!(url = %url, "SupabaseAuthProvider initialized");
        Self {
            http,
            url,
            key: key.into(),
            access_token: Mutex::new(None),
        }
    }

    /// Access token of the current session, if any
    pub fn access_token(&self) -> Option<String> {
        self.access_token.lock().ok().and_then(|token| token.clone())
    }

    fn set_access_token(&self, token: Option<String>) {
        if let Ok(mut current) = self.access_token.lock() {
            *current = token;
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path)
    }

    async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<AuthResponse, SupabaseError> {
        debug!(path, "POST auth endpoint");
        let response = self
            .http
            .post(self.endpoint(path))
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .json(body)
            .send()
            .await?;

        let body = Self::read_body(response).await?;
        let parsed = parse_auth_response(body)
            .map_err(|e| SupabaseError::InvalidResponse(e.to_string()))?;
        if let Some(session) = &parsed.session {
            self.set_access_token(Some(session.access_token.clone()));
        }
        Ok(parsed)
    }

    async fn read_body(response: reqwest::Response) -> Result<Value, SupabaseError> {
        let status = response.status();
        let text = response.text().await?;
        let body: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text.clone()))
        };

        if status.is_success() {
            return Ok(body);
        }
        let message = error_message(&body).unwrap_or_else(|| {
            if text.trim().is_empty() {
                format!("HTTP {}", status.as_u16())
            } else {
                text
            }
        });
        Err(SupabaseError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuthProvider {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<AuthResponse, AuthError> {
        let request = SignUpRequest {
            email,
            password,
            data: SignUpData { full_name },
        };
        Ok(self.post_json("signup", &request).await?)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, AuthError> {
        let request = PasswordRequest { email, password };
        Ok(self
            .post_json("token?grant_type=password", &request)
            .await?)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let Some(token) = self.access_token() else {
            debug!("sign-out without session");
            return Ok(());
        };

        let response = self
            .http
            .post(self.endpoint("logout"))
            .header("apikey", &self.key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(SupabaseError::from)?;
        self.set_access_token(None);
        Self::read_body(response).await?;
        Ok(())
    }
}
