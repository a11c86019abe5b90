//! # talentgate-client
//!
//! Authenticated access to the TalentGate REST API.
//!
//! ## Modules
//!
//! - `http`: Request wrapper that attaches the bearer token and renews it
//! - `api`: One thin service per backend area
//!
//! [`TalentGateClient`] ties the request wrapper, the session and the route
//! guard together and is the entry point for front ends.

pub mod api;
pub mod facade;
pub mod http;

pub use facade::TalentGateClient;
pub use http::{ApiClient, ApiRequest};
