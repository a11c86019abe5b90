//! Re-evaluates the current route whenever the session changes.

use tokio::sync::watch;
use tracing::info;

use talentgate_entity::session::Session;

use super::enforcer::{GuardDecision, RouteGuard};

/// Tracks the current route and follows guard redirects as the session changes.
#[derive(Debug)]
pub struct GuardWatcher {
    guard: RouteGuard,
    session: watch::Receiver<Session>,
    current: String,
}

impl GuardWatcher {
    /// Starts watching with `initial` as the current route.
    ///
    /// The initial route is checked immediately; use [`current`](Self::current)
    /// to see where navigation ended up.
    pub fn new(guard: RouteGuard, mut session: watch::Receiver<Session>, initial: &str) -> Self {
        let decision = guard.check(initial, &session.borrow_and_update());
        let current = match decision {
            GuardDecision::Allow => initial.to_string(),
            GuardDecision::Redirect { to, .. } => to,
        };
        Self {
            guard,
            session,
            current,
        }
    }

    /// The route the user is on.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Navigates to `path`, following a redirect if the guard issues one.
    pub fn navigate(&mut self, path: &str) -> GuardDecision {
        let decision = self.guard.check(path, &self.session.borrow());
        self.current = match &decision {
            GuardDecision::Allow => path.to_string(),
            GuardDecision::Redirect { to, .. } => to.clone(),
        };
        decision
    }

    /// Waits for a session change that redirects away from the current route.
    ///
    /// Returns `None` once the session owner is gone.
    pub async fn next_redirect(&mut self) -> Option<GuardDecision> {
        loop {
            self.session.changed().await.ok()?;
            let decision = self.guard.check(&self.current, &self.session.borrow_and_update());
            if let GuardDecision::Redirect { to, reason } = &decision {
                info!(from = %self.current, to = %to, reason = %reason, "Session change redirected navigation");
                self.current = to.clone();
                return Some(decision);
            }
        }
    }
}
