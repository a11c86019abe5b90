//! Job application entities.

pub mod model;
pub mod status;

pub use model::{Application, SubmitApplication, UpdateApplicationStatus};
pub use status::ApplicationStatus;
