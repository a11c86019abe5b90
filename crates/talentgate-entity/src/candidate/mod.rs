//! Candidate views for HR review.

pub mod model;

pub use model::{CandidateDetail, CandidateSummary};
