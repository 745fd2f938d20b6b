/*
[INPUT]:  Wallet provider and HTTP client
[OUTPUT]: Connected account state and verified sign-ins
[POS]:    Auth layer - orchestrates the nonce-sign-verify handshake
[UPDATE]: When auth endpoints or flow steps change
*/

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::auth::WalletProvider;
use crate::http::{GateClient, GateError, Result};

/// Connection state of the wallet session
///
/// The signed-in state only exists server-side, realized through the
/// session refresh hook, so it has no variant here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connected { address: String },
}

/// Outcome of a successful sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInReceipt {
    pub address: String,
    pub message: Option<String>,
}

/// Wallet login session
///
/// Owns the active-account state and runs the two user-triggered flows:
/// `connect` (account request) and `sign_in` (nonce-sign-verify). At most
/// one attempt runs at a time; re-entrant calls fail with [`GateError::Busy`]
/// instead of starting a concurrent chain.
pub struct WalletSession {
    client: GateClient,
    provider: Option<Arc<dyn WalletProvider>>,
    state: RwLock<SessionState>,
    in_flight: AtomicBool,
    refresh: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl WalletSession {
    /// Create a session; `provider` is `None` when no wallet is injected
    pub fn new(client: GateClient, provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self {
            client,
            provider,
            state: RwLock::new(SessionState::Disconnected),
            in_flight: AtomicBool::new(false),
            refresh: None,
        }
    }

    /// Install the refresh hook invoked after a verified sign-in
    ///
    /// The hook is the page-reload analogue: the server is the source of
    /// truth for post-login state, so the caller re-derives its UI here.
    pub fn with_refresh(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.refresh = Some(Arc::new(hook));
        self
    }

    /// Get the current connection state
    pub fn state(&self) -> SessionState {
        self.state.read().unwrap().clone()
    }

    /// Get the active account, if one is connected
    pub fn active_account(&self) -> Option<String> {
        match &*self.state.read().unwrap() {
            SessionState::Connected { address } => Some(address.clone()),
            SessionState::Disconnected => None,
        }
    }

    /// Drop the active account
    pub fn disconnect(&self) {
        *self.state.write().unwrap() = SessionState::Disconnected;
    }

    /// Connect to the wallet and store the first account as active
    ///
    /// Fails with [`GateError::ProviderUnavailable`] when no provider was
    /// injected; any provider failure or an empty account list clears the
    /// active account.
    pub async fn connect(&self) -> Result<String> {
        let _guard = self.begin_attempt()?;

        let provider = self
            .provider
            .as_deref()
            .ok_or(GateError::ProviderUnavailable)?;

        let accounts = match provider.request_accounts().await {
            Ok(accounts) => accounts,
            Err(err) => {
                tracing::warn!(error = %err, "wallet connection failed");
                self.disconnect();
                return Err(err);
            }
        };

        match accounts.into_iter().next() {
            Some(address) => {
                tracing::info!(%address, "wallet connected");
                *self.state.write().unwrap() = SessionState::Connected {
                    address: address.clone(),
                };
                Ok(address)
            }
            None => {
                self.disconnect();
                Err(GateError::Wallet {
                    message: "Wallet returned no accounts".to_string(),
                })
            }
        }
    }

    /// Run the nonce-sign-verify handshake for the active account
    ///
    /// Strictly ordered: nonce fetch, wallet signature, server-side
    /// verification. Each step short-circuits on failure without touching
    /// the stored account, so the caller may retry. On a verified sign-in
    /// the refresh hook fires exactly once.
    pub async fn sign_in(&self) -> Result<SignInReceipt> {
        let _guard = self.begin_attempt()?;

        let address = self.active_account().ok_or(GateError::NotConnected)?;
        let provider = self
            .provider
            .as_deref()
            .ok_or(GateError::ProviderUnavailable)?;

        let nonce = self.client.get_nonce_to_sign(&address).await?;
        tracing::debug!(%address, "nonce received");

        let signature = provider.sign_message(&nonce, &address).await?;

        let verdict = self
            .client
            .verify_signature(&signature, &nonce, &address)
            .await?;

        if verdict.success {
            tracing::info!(%address, "signature verified");
            if let Some(refresh) = &self.refresh {
                refresh();
            }
            Ok(SignInReceipt {
                address,
                message: verdict.message,
            })
        } else {
            let message = verdict
                .rejection_message()
                .unwrap_or_else(|| "Signature verification failed".to_string());
            Err(GateError::Rejected { message })
        }
    }

    fn begin_attempt(&self) -> Result<FlightGuard<'_>> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(GateError::Busy);
        }
        Ok(FlightGuard(&self.in_flight))
    }
}

/// Clears the in-flight flag when an attempt ends, on any path
struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MockWalletProvider;

    fn offline_client() -> GateClient {
        GateClient::new().unwrap()
    }

    #[tokio::test]
    async fn test_session_without_provider_reports_unavailable() {
        let session = WalletSession::new(offline_client(), None);
        let err = session.connect().await.unwrap_err();
        assert!(matches!(err, GateError::ProviderUnavailable));
        assert_eq!(session.state(), SessionState::Disconnected);
    }

    #[tokio::test]
    async fn test_connect_stores_first_account() {
        let provider = MockWalletProvider::new("0xabc", "0xsig");
        let session = WalletSession::new(offline_client(), Some(Arc::new(provider)));

        let address = session.connect().await.unwrap();
        assert_eq!(address, "0xabc");
        assert_eq!(
            session.state(),
            SessionState::Connected {
                address: "0xabc".to_string()
            }
        );
        assert_eq!(session.active_account(), Some("0xabc".to_string()));
    }

    #[tokio::test]
    async fn test_connect_with_empty_account_list_clears_state() {
        let provider = MockWalletProvider::without_accounts();
        let session = WalletSession::new(offline_client(), Some(Arc::new(provider)));

        let err = session.connect().await.unwrap_err();
        assert!(matches!(err, GateError::Wallet { .. }));
        assert_eq!(session.state(), SessionState::Disconnected);
    }

    #[tokio::test]
    async fn test_connect_failure_clears_previous_account() {
        let good = MockWalletProvider::new("0xabc", "0xsig");
        let session = WalletSession::new(offline_client(), Some(Arc::new(good)));
        session.connect().await.unwrap();

        // Rebuild with a failing provider but pre-connected state.
        let failing = MockWalletProvider::failing_accounts("user rejected");
        let session = WalletSession {
            client: offline_client(),
            provider: Some(Arc::new(failing)),
            state: RwLock::new(SessionState::Connected {
                address: "0xabc".to_string(),
            }),
            in_flight: AtomicBool::new(false),
            refresh: None,
        };

        let err = session.connect().await.unwrap_err();
        match err {
            GateError::Wallet { message } => assert_eq!(message, "user rejected"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(session.state(), SessionState::Disconnected);
    }

    #[tokio::test]
    async fn test_sign_in_without_account_is_rejected_locally() {
        let provider = MockWalletProvider::new("0xabc", "0xsig");
        let session = WalletSession::new(offline_client(), Some(Arc::new(provider)));

        let err = session.sign_in().await.unwrap_err();
        assert!(matches!(err, GateError::NotConnected));
        assert!(err.is_local());
    }

    #[test]
    fn test_flight_guard_clears_flag_on_drop() {
        let flag = AtomicBool::new(false);
        {
            flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
                .unwrap();
            let _guard = FlightGuard(&flag);
            assert!(flag.load(Ordering::SeqCst));
        }
        assert!(!flag.load(Ordering::SeqCst));
    }
}
