//! Authentication use case.
//!
//! Sign-up, sign-in and sign-out against an [`AuthProvider`], applied to a
//! [`SessionState`]. Provider failures never escape: they become an error
//! notice on the state and a `None` result, leaving the session untouched.

use crate::ports::auth_provider::AuthProvider;
use memchat_domain::{AuthResponse, Notice, SessionState};
use std::sync::Arc;
use tracing::{info, warn};

/// Notice shown when a sign-up still waits for e-mail confirmation
pub const CONFIRMATION_PENDING: &str = "Check your email to confirm your account, then log in.";

#[derive(Clone)]
pub struct AuthUseCase {
    provider: Arc<dyn AuthProvider>,
}

impl AuthUseCase {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self { provider }
    }

    pub async fn sign_up(
        &self,
        state: &mut SessionState,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Option<AuthResponse> {
        match self.provider.sign_up(email, password, full_name).await {
            Ok(response) => {
                match &response.user {
                    Some(user) => {
                        info!(user_id = %user.id, "signed up");
                        state.sign_in(user.clone());
                    }
                    None => state.set_notice(Notice::info(CONFIRMATION_PENDING)),
                }
                Some(response)
            }
            Err(e) => {
                warn!("sign-up failed: {}", e);
                state.set_notice(Notice::error(format!("Error signing up: {e}")));
                None
            }
        }
    }

    pub async fn sign_in(
        &self,
        state: &mut SessionState,
        email: &str,
        password: &str,
    ) -> Option<AuthResponse> {
        match self.provider.sign_in_with_password(email, password).await {
            Ok(response) => {
                if let Some(user) = &response.user {
                    info!(user_id = %user.id, "signed in");
                    state.sign_in(user.clone());
                }
                Some(response)
            }
            Err(e) => {
                warn!("sign-in failed: {}", e);
                state.set_notice(Notice::error(format!("Error signing in: {e}")));
                None
            }
        }
    }

    /// Reset the session, then end the remote auth session.
    ///
    /// The local reset happens whether or not the provider call succeeds.
    pub async fn sign_out(&self, state: &mut SessionState) {
        state.sign_out();
        if let Err(e) = self.provider.sign_out().await {
            warn!("sign-out failed: {}", e);
            state.set_notice(Notice::error(format!("Error signing out: {e}")));
            return;
        }
        info!("signed out");
    }
}
