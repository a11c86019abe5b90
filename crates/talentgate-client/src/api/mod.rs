//! API services, one per backend area.

pub mod applications;
pub mod auth;
pub mod candidates;
pub mod evaluations;
pub mod positions;
pub mod profile;
pub mod statistics;

pub use applications::ApplicationsApi;
pub use auth::AuthApi;
pub use candidates::CandidatesApi;
pub use evaluations::EvaluationsApi;
pub use positions::PositionsApi;
pub use profile::ProfileApi;
pub use statistics::StatisticsApi;
