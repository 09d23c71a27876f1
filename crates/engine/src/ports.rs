//! Collaborator interfaces the engine consumes.
//!
//! Implementations live outside the engine (databases, LLM clients); the
//! in-memory [`crate::InMemoryStore`] implements all of them for tests and
//! the CLI.

use anyhow::Result;
use async_trait::async_trait;
use careerpath_domain::{
    CandidateRef, Course, CourseId, EmployeeId, EmployeeProfile, ProjectCandidate,
    Recommendation, RecommendationId,
};
use chrono::{DateTime, Utc};

#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn employee_with_skills(&self, id: EmployeeId) -> Result<Option<EmployeeProfile>>;

    /// Colleagues with more experience than `employee_id`.
    async fn mentor_candidates(&self, employee_id: EmployeeId) -> Result<Vec<EmployeeProfile>>;
}

#[async_trait]
pub trait CourseCatalog: Send + Sync {
    async fn all_courses(&self) -> Result<Vec<Course>>;
    async fn enrolled_course_ids(&self, employee_id: EmployeeId) -> Result<Vec<CourseId>>;
}

#[async_trait]
pub trait ProjectBoard: Send + Sync {
    /// Projects with their required-skill maps attached.
    async fn available_projects(&self) -> Result<Vec<ProjectCandidate>>;
}

/// Supplementary explanation text for one recommendation.
///
/// May fail or stall; callers substitute a fallback.
#[async_trait]
pub trait ReasoningGenerator: Send + Sync {
    async fn reasoning(
        &self,
        employee: &EmployeeProfile,
        candidate: CandidateRef<'_>,
    ) -> Result<String>;
}

#[async_trait]
pub trait RecommendationStore: Send + Sync {
    /// Persists a new record, assigning its id and creation date.
    async fn save(&self, recommendation: Recommendation) -> Result<Recommendation>;
    async fn load(&self, id: RecommendationId) -> Result<Option<Recommendation>>;
    /// Marks a record accepted; fails with `EngineError::NotFound` for unknown ids.
    async fn mark_accepted(
        &self,
        id: RecommendationId,
        now: DateTime<Utc>,
    ) -> Result<Recommendation>;
    async fn for_employee(&self, employee_id: EmployeeId) -> Result<Vec<Recommendation>>;
}
