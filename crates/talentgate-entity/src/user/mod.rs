//! User domain entities.

pub mod model;
pub mod profile;
pub mod role;

pub use model::{LoginRequest, RegisterRequest, User};
pub use profile::{Profile, UpdateProfile};
pub use role::UserRole;
