//! In-memory `IdentityProvider` backend
//!
//! Simulates the hosted identity service, including its error codes and
//! the popup-blocked OAuth fallback, so workflow code can be exercised
//! without a live provider.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use clipmark_core::error::{ClipmarkError, Result};
use clipmark_core::traits::{AuthStateCallback, IdentityProvider};
use clipmark_core::types::{Principal, UserId};

struct Account {
    user_id: UserId,
    password: String,
}

#[derive(Default)]
struct State {
    accounts: HashMap<String, Account>,
    current: Option<Principal>,
    listeners: Vec<AuthStateCallback>,
    provider_account: Option<String>,
    popup_blocked: bool,
}

impl State {
    fn notify(&self) {
        for listener in &self.listeners {
            listener(self.current.as_ref());
        }
    }

    fn sign_in_as(&mut self, principal: Principal) -> Principal {
        self.current = Some(principal.clone());
        self.notify();
        principal
    }
}

/// In-memory identity provider.
///
/// Accounts are keyed by lowercased email. Error codes match the hosted
/// service ("auth/email-already-in-use", "auth/invalid-credential");
/// a blocked popup is simulated with [`Self::set_popup_blocked`] and
/// surfaces as the redirect fallback rather than an error.
#[derive(Default)]
pub struct MemoryIdentityProvider {
    state: Mutex<State>,
}

impl MemoryIdentityProvider {
    /// Create a provider with no accounts
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the account the OAuth provider hands back
    pub async fn set_provider_account(&self, email: impl Into<String>) {
        let mut state = self.state.lock().await;
        let email = email.into().to_lowercase();
        state.accounts.entry(email.clone()).or_insert_with(|| Account {
            user_id: UserId::generate(),
            password: String::new(),
        });
        state.provider_account = Some(email);
    }

    /// Simulate the browser blocking the sign-in popup
    pub async fn set_popup_blocked(&self, blocked: bool) {
        self.state.lock().await.popup_blocked = blocked;
    }

    /// Finish a redirect-based sign-in started after a blocked popup.
    ///
    /// The result is delivered through the auth state listeners, the way
    /// the hosted service does on the post-redirect page load.
    pub async fn complete_redirect(&self) -> Result<Principal> {
        let mut state = self.state.lock().await;
        let email = state
            .provider_account
            .clone()
            .ok_or_else(|| ClipmarkError::auth("auth/no-provider", "no provider account"))?;
        let user_id = state
            .accounts
            .get(&email)
            .map(|a| a.user_id.clone())
            .ok_or_else(|| ClipmarkError::auth("auth/no-provider", "no provider account"))?;
        Ok(state.sign_in_as(Principal::new(user_id, email)))
    }
}

impl std::fmt::Debug for MemoryIdentityProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryIdentityProvider").finish_non_exhaustive()
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Principal> {
        let mut state = self.state.lock().await;
        let email = email.to_lowercase();
        if state.accounts.contains_key(&email) {
            return Err(ClipmarkError::auth(
                "auth/email-already-in-use",
                "an account already exists for this email",
            ));
        }
        let user_id = UserId::generate();
        state.accounts.insert(
            email.clone(),
            Account {
                user_id: user_id.clone(),
                password: password.to_string(),
            },
        );
        Ok(state.sign_in_as(Principal::new(user_id, email)))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Principal> {
        let mut state = self.state.lock().await;
        let email = email.to_lowercase();
        let user_id = match state.accounts.get(&email) {
            Some(account) if account.password == password => account.user_id.clone(),
            _ => {
                return Err(ClipmarkError::auth(
                    "auth/invalid-credential",
                    "wrong email or password",
                ))
            }
        };
        Ok(state.sign_in_as(Principal::new(user_id, email)))
    }

    async fn sign_in_with_provider(&self) -> Result<Option<Principal>> {
        let mut state = self.state.lock().await;
        if state.popup_blocked {
            // Fall back to the redirect flow; the caller gets the result
            // later through the auth state listeners.
            debug!("sign-in popup blocked, starting redirect flow");
            return Ok(None);
        }
        let email = state
            .provider_account
            .clone()
            .ok_or_else(|| ClipmarkError::auth("auth/no-provider", "no provider account"))?;
        let user_id = state
            .accounts
            .get(&email)
            .map(|a| a.user_id.clone())
            .ok_or_else(|| ClipmarkError::auth("auth/no-provider", "no provider account"))?;
        Ok(Some(state.sign_in_as(Principal::new(user_id, email))))
    }

    async fn sign_out(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        state.current = None;
        state.notify();
        Ok(())
    }

    async fn current_user(&self) -> Option<Principal> {
        self.state.lock().await.current.clone()
    }

    async fn on_auth_state_changed(&self, callback: AuthStateCallback) {
        let mut state = self.state.lock().await;
        // New listeners immediately hear the current state
        callback(state.current.as_ref());
        state.listeners.push(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex as StdMutex};

    #[tokio::test]
    async fn sign_up_then_sign_in() {
        let provider = MemoryIdentityProvider::new();
        let principal = provider.sign_up("Al@X.Com", "pw").await.unwrap();
        assert_eq!(principal.email, "al@x.com");

        provider.sign_out().await.unwrap();
        assert!(provider.current_user().await.is_none());

        let again = provider.sign_in("al@x.com", "pw").await.unwrap();
        assert_eq!(again.user_id, principal.user_id);
    }

    #[tokio::test]
    async fn duplicate_email_and_bad_password_use_provider_codes() {
        let provider = MemoryIdentityProvider::new();
        provider.sign_up("a@x.com", "pw").await.unwrap();

        let err = provider.sign_up("a@x.com", "other").await.unwrap_err();
        assert!(matches!(err, ClipmarkError::Auth { ref code, .. } if code == "auth/email-already-in-use"));

        let err = provider.sign_in("a@x.com", "wrong").await.unwrap_err();
        assert!(matches!(err, ClipmarkError::Auth { ref code, .. } if code == "auth/invalid-credential"));
    }

    #[tokio::test]
    async fn blocked_popup_falls_back_to_redirect() {
        let provider = MemoryIdentityProvider::new();
        provider.set_provider_account("oauth@x.com").await;
        provider.set_popup_blocked(true).await;

        // Popup blocked: no principal yet, the redirect flow is pending.
        assert!(provider.sign_in_with_provider().await.unwrap().is_none());
        assert!(provider.current_user().await.is_none());

        let seen: Arc<StdMutex<Option<String>>> = Arc::default();
        let sink = Arc::clone(&seen);
        provider
            .on_auth_state_changed(Box::new(move |principal| {
                *sink.lock().unwrap() = principal.map(|p| p.email.clone());
            }))
            .await;

        provider.complete_redirect().await.unwrap();
        assert_eq!(seen.lock().unwrap().as_deref(), Some("oauth@x.com"));
    }

    #[tokio::test]
    async fn provider_sign_in_succeeds_without_blocking() {
        let provider = MemoryIdentityProvider::new();
        provider.set_provider_account("oauth@x.com").await;

        let principal = provider.sign_in_with_provider().await.unwrap().unwrap();
        assert_eq!(principal.email, "oauth@x.com");
    }

    #[tokio::test]
    async fn listeners_fire_on_every_transition() {
        let provider = MemoryIdentityProvider::new();
        let count = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&count);
        provider
            .on_auth_state_changed(Box::new(move |_| {
                sink.fetch_add(1, Ordering::SeqCst);
            }))
            .await;

        // Immediate call on registration, then sign-up and sign-out.
        provider.sign_up("a@x.com", "pw").await.unwrap();
        provider.sign_out().await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }
}
