//! Client session entities.

pub mod model;
pub mod token;

pub use model::Session;
pub use token::{TokenPair, TokenResponse};
