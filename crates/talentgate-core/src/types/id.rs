//! Newtype wrappers around [`uuid::Uuid`] for the identifiers the API hands out.
//!
//! Distinct types keep a `PositionId` from being passed where an
//! `ApplicationId` is expected when building request paths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a newtype ID wrapper around `Uuid`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Return the inner UUID value.
            pub fn into_uuid(self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a user (candidate, HR staff, or admin).
    UserId
);

define_id!(
    /// Unique identifier for a job position.
    PositionId
);

define_id!(
    /// Unique identifier for a job application.
    ApplicationId
);

define_id!(
    /// Unique identifier for an evaluation test.
    TestId
);

define_id!(
    /// Unique identifier for a question inside an evaluation test.
    QuestionId
);

define_id!(
    /// Unique identifier for a test assigned to a candidate.
    AssignmentId
);

define_id!(
    /// Unique identifier for a graded test submission.
    ResultId
);
