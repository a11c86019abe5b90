//! Navigation decisions for the current session.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use talentgate_core::error::AppError;
use talentgate_entity::session::Session;

use super::policy::{RoutePolicy, normalize_path};

/// Why a navigation was redirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// The route needs a signed-in user.
    Unauthenticated,
    /// The signed-in user's role is not allowed on the route.
    Forbidden,
    /// The route is for signed-out visitors only.
    AlreadyAuthenticated,
}

impl fmt::Display for RedirectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "unauthenticated"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::AlreadyAuthenticated => write!(f, "already_authenticated"),
        }
    }
}

/// Outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Navigation may proceed.
    Allow,
    /// Navigation must go elsewhere.
    Redirect {
        /// Destination route.
        to: String,
        /// Why the navigation was redirected.
        reason: RedirectReason,
    },
}

impl GuardDecision {
    /// Whether navigation may proceed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Converts a redirect into the error a command surface reports.
    pub fn into_result(self) -> Result<(), AppError> {
        match self {
            Self::Allow => Ok(()),
            Self::Redirect {
                reason: RedirectReason::Unauthenticated,
                ..
            } => Err(AppError::authentication("Please log in to continue")),
            Self::Redirect {
                to,
                reason: RedirectReason::Forbidden,
            } => Err(AppError::authorization(format!(
                "Your role cannot open this page, continue at {to}"
            ))),
            Self::Redirect {
                to,
                reason: RedirectReason::AlreadyAuthenticated,
            } => Err(AppError::conflict(format!(
                "Already signed in, continue at {to}"
            ))),
        }
    }
}

/// Decides whether the session may navigate to a path.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    /// Navigation rules.
    policy: Arc<RoutePolicy>,
}

impl RouteGuard {
    /// Creates a guard over `policy`.
    pub fn new(policy: RoutePolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// The rules this guard enforces.
    pub fn policy(&self) -> &RoutePolicy {
        &self.policy
    }

    /// Evaluates navigation to `path` for `session`.
    ///
    /// Signed-out visitors reach public routes only; everything else sends
    /// them to login with the requested path attached. Signed-in users are
    /// held to the most specific role rule and sent to their home route when
    /// it does not admit them.
    pub fn check(&self, path: &str, session: &Session) -> GuardDecision {
        let normalized = normalize_path(path);
        let role = session.role().filter(|_| session.is_authenticated());

        let decision = match role {
            Some(role) if self.policy.is_guest_only(&normalized) => GuardDecision::Redirect {
                to: self.policy.home_route(Some(role)).to_string(),
                reason: RedirectReason::AlreadyAuthenticated,
            },
            _ if self.policy.is_public(&normalized) => GuardDecision::Allow,
            None => GuardDecision::Redirect {
                to: self.policy.login_redirect(path.trim()),
                reason: RedirectReason::Unauthenticated,
            },
            Some(role) => match self.policy.rule_for(&normalized) {
                Some(rule) if !rule.allows(role) => GuardDecision::Redirect {
                    to: self.policy.home_route(Some(role)).to_string(),
                    reason: RedirectReason::Forbidden,
                },
                _ => GuardDecision::Allow,
            },
        };

        if let GuardDecision::Redirect { to, reason } = &decision {
            debug!(path = %normalized, to = %to, reason = %reason, "Navigation redirected");
        }
        decision
    }
}
