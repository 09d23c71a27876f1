//! Typed integer identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

id_type!(
    /// Identifies an employee (also used for mentors).
    EmployeeId
);
id_type!(
    /// Identifies a skill in the skill catalog.
    SkillId
);
id_type!(
    /// Identifies a course.
    CourseId
);
id_type!(
    /// Identifies a project.
    ProjectId
);
id_type!(
    /// Identifies a persisted recommendation.
    RecommendationId
);
