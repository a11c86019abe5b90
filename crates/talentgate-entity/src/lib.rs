//! # talentgate-entity
//!
//! Domain models for the TalentGate client. Every struct in this crate is a
//! wire model of the recruitment API (camelCase JSON) or a request form that
//! validates itself before it is sent. All models derive `Debug`, `Clone`,
//! `Serialize` and `Deserialize`.

pub mod application;
pub mod candidate;
pub mod evaluation;
pub mod position;
pub mod session;
pub mod statistics;
pub mod user;
