//! Shared session state with persistence on every mutation.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::{info, warn};

use talentgate_core::error::AppError;
use talentgate_entity::session::{Session, TokenPair, TokenResponse};
use talentgate_entity::user::User;

use super::store::SessionStore;

/// Owns the client session.
///
/// State lives in a watch channel so route guards can re-evaluate when the
/// session changes. Every mutation is written through to the store, and the
/// store sees writes in the order the mutations were applied.
#[derive(Clone)]
pub struct SessionManager {
    /// Current session, published to subscribers.
    state: Arc<watch::Sender<Session>>,
    /// Session persistence.
    store: Arc<dyn SessionStore>,
    /// Held across a mutation and its write-through.
    write_lock: Arc<Mutex<()>>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("authenticated", &self.state.borrow().is_authenticated())
            .field("store", &self.store)
            .finish()
    }
}

impl SessionManager {
    /// Creates a manager starting from an anonymous session.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self::with_session(store, Session::anonymous())
    }

    /// Creates a manager starting from whatever the store holds.
    pub async fn restore(store: Arc<dyn SessionStore>) -> Result<Self, AppError> {
        let session = store.load().await?;
        if session.is_authenticated() {
            info!(role = ?session.role(), "Restored persisted session");
        }
        Ok(Self::with_session(store, session))
    }

    fn with_session(store: Arc<dyn SessionStore>, session: Session) -> Self {
        let (state, _) = watch::channel(session);
        Self {
            state: Arc::new(state),
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// A copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Subscribes to session changes.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// The current bearer token.
    pub fn access_token(&self) -> Option<String> {
        self.state.borrow().access_token().map(str::to_string)
    }

    /// The current refresh token.
    pub fn refresh_token(&self) -> Option<String> {
        self.state.borrow().refresh_token().map(str::to_string)
    }

    /// Whether the session is authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Starts a new session from freshly issued tokens. The user is unknown
    /// until [`set_user`](Self::set_user) is called.
    pub async fn establish(&self, tokens: TokenPair) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        self.state.send_replace(Session {
            tokens: Some(tokens),
            user: None,
        });
        info!("Session established");
        self.persist().await
    }

    /// Records the signed-in user, completing authentication.
    pub async fn set_user(&self, user: User) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut applied = false;
        self.state.send_if_modified(|session| {
            if session.tokens.is_none() {
                return false;
            }
            applied = true;
            if session.user.as_ref() == Some(&user) {
                return false;
            }
            session.user = Some(user.clone());
            true
        });
        if !applied {
            return Err(AppError::authentication("No active session"));
        }
        info!(user_id = %user.id, role = %user.role, "Session user updated");
        self.persist().await
    }

    /// Replaces the access token after a refresh, rotating the refresh token
    /// when the server issued a new one.
    pub async fn rotate_tokens(&self, response: TokenResponse) -> Result<TokenPair, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut rotated = None;
        self.state.send_if_modified(|session| {
            let Some(current) = session.tokens.take() else {
                return false;
            };
            let next = current.rotated(response.clone());
            session.tokens = Some(next.clone());
            rotated = Some(next);
            true
        });
        let Some(tokens) = rotated else {
            return Err(AppError::session_expired());
        };
        info!(
            refresh_rotated = response.refresh_token.is_some(),
            "Access token rotated"
        );
        self.persist().await?;
        Ok(tokens)
    }

    /// Destroys the session in memory and in the store.
    pub async fn clear(&self) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let previous = self.state.send_replace(Session::anonymous());
        if previous != Session::anonymous() {
            info!("Session cleared");
        }
        self.store.clear().await
    }

    /// Writes the current state through. Callers hold `write_lock`.
    async fn persist(&self) -> Result<(), AppError> {
        let session = self.snapshot();
        self.store.save(&session).await.inspect_err(|e| {
            warn!(error = %e, "Failed to persist session");
        })
    }
}
