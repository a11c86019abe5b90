//! Session persistence and shared session state.

pub mod manager;
pub mod store;

pub use manager::SessionManager;
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, build_store};
