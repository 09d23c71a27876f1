//! Data model shared by the careerpath engine, its configuration and its CLI.
//!
//! This crate provides:
//! - Employee profiles and the ordinal [`SkillLevel`]
//! - Catalog items (courses, projects) and typed identifiers
//! - Persisted [`Recommendation`] records and the [`SkillGapAnalysis`] report
//! - Clamped score newtypes ([`Confidence`], [`Priority`]) and [`EngineError`]

pub mod catalog;
pub mod error;
pub mod gap;
pub mod ids;
pub mod profile;
pub mod recommendation;
pub mod types;

pub use catalog::{CandidateRef, Course, ProjectCandidate, ProjectSkillRequirement, ProjectStatus};
pub use error::EngineError;
pub use gap::{CareerMilestone, SkillGap, SkillGapAnalysis};
pub use ids::{CourseId, EmployeeId, ProjectId, RecommendationId, SkillId};
pub use profile::{EmployeeProfile, EmployeeSkill, SkillLevel};
pub use recommendation::{by_rank, Recommendation, RecommendationKind, RecommendationTarget};
pub use types::{Confidence, Priority};
