//! HTTP request wrapper.

pub mod client;
pub mod request;

pub use client::ApiClient;
pub use request::{ApiRequest, AuthMode};
