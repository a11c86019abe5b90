//! Session entity model.

use serde::{Deserialize, Serialize};

use talentgate_core::AppError;

use super::token::TokenPair;
use crate::user::{User, UserRole};

/// The client-side session.
///
/// Created on login, updated on token refresh and destroyed on logout or on
/// an unrecoverable refresh failure. Tokens are present together or not at
/// all, and the session counts as authenticated only once the user is known.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PersistedSession", into = "PersistedSession")]
pub struct Session {
    /// Bearer and refresh tokens.
    pub tokens: Option<TokenPair>,
    /// The signed-in user.
    pub user: Option<User>,
}

impl Session {
    /// A session with no tokens and no user.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A fully authenticated session.
    pub fn authenticated(tokens: TokenPair, user: User) -> Self {
        Self {
            tokens: Some(tokens),
            user: Some(user),
        }
    }

    /// Whether tokens and the user are both known.
    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_some() && self.user.is_some()
    }

    /// The current bearer token.
    pub fn access_token(&self) -> Option<&str> {
        self.tokens.as_ref().map(|t| t.access_token.as_str())
    }

    /// The current refresh token.
    pub fn refresh_token(&self) -> Option<&str> {
        self.tokens.as_ref().map(|t| t.refresh_token.as_str())
    }

    /// Role of the signed-in user.
    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// On-disk form of a [`Session`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSession {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    is_authenticated: bool,
}

impl TryFrom<PersistedSession> for Session {
    type Error = AppError;

    fn try_from(doc: PersistedSession) -> Result<Self, Self::Error> {
        let tokens = match (doc.access_token, doc.refresh_token) {
            (Some(access), Some(refresh)) => Some(TokenPair::new(access, refresh)),
            (None, None) => None,
            _ => {
                return Err(AppError::validation(
                    "Session holds only one of the access and refresh tokens",
                ));
            }
        };

        if doc.is_authenticated && doc.user.is_none() {
            return Err(AppError::validation(
                "Session is marked authenticated without a user",
            ));
        }

        let session = Self {
            tokens,
            user: doc.user,
        };
        if doc.is_authenticated != session.is_authenticated() {
            return Err(AppError::validation(
                "Session authentication flag does not match its contents",
            ));
        }
        Ok(session)
    }
}

impl From<Session> for PersistedSession {
    fn from(session: Session) -> Self {
        let is_authenticated = session.is_authenticated();
        let (access_token, refresh_token) = match session.tokens {
            Some(pair) => (Some(pair.access_token), Some(pair.refresh_token)),
            None => (None, None),
        };
        Self {
            access_token,
            refresh_token,
            user: session.user,
            is_authenticated,
        }
    }
}
