//! # talentgate-auth
//!
//! Client-side authentication state for TalentGate.
//!
//! ## Modules
//!
//! - `jwt`: Reads claims from access tokens to schedule refreshes
//! - `session`: Session persistence and the shared in-memory session state
//! - `guard`: Route guard deciding whether a navigation is allowed

pub mod guard;
pub mod jwt;
pub mod session;

pub use guard::{GuardDecision, GuardWatcher, RedirectReason, RouteGuard, RoutePolicy};
pub use jwt::{Claims, JwtInspector};
pub use session::{FileSessionStore, MemorySessionStore, SessionManager, SessionStore, build_store};
