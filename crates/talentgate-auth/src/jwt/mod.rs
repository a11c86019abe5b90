//! JWT claim inspection for access tokens.

pub mod claims;
pub mod inspector;

pub use claims::Claims;
pub use inspector::JwtInspector;
