//! Catalog items the engine scores against a profile.

use crate::ids::{CourseId, ProjectId, SkillId};
use crate::profile::{EmployeeProfile, SkillLevel};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A training course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    #[serde(default)]
    pub provider: String,
    pub category: String,
    pub duration_hours: u32,
    /// Average rating on a 0-5 scale.
    pub rating: f64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    Active,
    OnHold,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    /// Planning and Active projects can still take new members.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Planning | Self::Active)
    }
}

/// A skill a project needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSkillRequirement {
    pub required_level: SkillLevel,
    #[serde(default = "default_true")]
    pub is_required: bool,
}

fn default_true() -> bool {
    true
}

/// A project an employee could join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCandidate {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub department: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub required_skills: HashMap<SkillId, ProjectSkillRequirement>,
    pub open_seats: u32,
}

impl ProjectCandidate {
    /// Whether the project is in an open state and has room.
    pub fn accepts_members(&self) -> bool {
        self.status.is_open() && self.open_seats > 0
    }
}

/// The item a recommendation is about, handed to the reasoning generator.
#[derive(Debug, Clone, Copy)]
pub enum CandidateRef<'a> {
    Course(&'a Course),
    Mentor(&'a EmployeeProfile),
    Project(&'a ProjectCandidate),
}

impl CandidateRef<'_> {
    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Course(_) => "course",
            Self::Mentor(_) => "mentor",
            Self::Project(_) => "project",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(status: ProjectStatus, open_seats: u32) -> ProjectCandidate {
        ProjectCandidate {
            id: ProjectId(1),
            name: "Ledger Migration".to_string(),
            description: String::new(),
            department: "Engineering".to_string(),
            status,
            required_skills: HashMap::new(),
            open_seats,
        }
    }

    #[test]
    fn test_open_statuses() {
        assert!(ProjectStatus::Planning.is_open());
        assert!(ProjectStatus::Active.is_open());
        assert!(!ProjectStatus::OnHold.is_open());
        assert!(!ProjectStatus::Completed.is_open());
        assert!(!ProjectStatus::Cancelled.is_open());
    }

    #[test]
    fn test_accepts_members_requires_seats() {
        assert!(project(ProjectStatus::Active, 2).accepts_members());
        assert!(!project(ProjectStatus::Active, 0).accepts_members());
        assert!(!project(ProjectStatus::OnHold, 3).accepts_members());
    }

    #[test]
    fn test_requirement_defaults_to_required() {
        let req: ProjectSkillRequirement =
            serde_json::from_str(r#"{"required_level":"Advanced"}"#).unwrap();
        assert!(req.is_required);
        assert_eq!(req.required_level, SkillLevel::Advanced);
    }
}
