//! Job position entities.

pub mod model;
pub mod status;

pub use model::{CreatePosition, EmploymentType, Position, PositionFilter, UpdatePosition};
pub use status::PositionStatus;
