//! Route guarding for client navigation.

pub mod enforcer;
pub mod policy;
pub mod watcher;

pub use enforcer::{GuardDecision, RedirectReason, RouteGuard};
pub use policy::{RoutePolicy, RouteRule};
pub use watcher::GuardWatcher;
