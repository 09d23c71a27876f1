//! Career-development recommendations and skill-gap analysis.
//!
//! This crate provides:
//! - Versioned reference tables (career tracks, role requirements, department relations)
//! - Course, mentor and project scorers with threshold-gated selection
//! - A recommendation engine that persists ranked results through repository ports
//! - Skill-gap analysis toward a target position with a learning roadmap
//! - An in-memory store, template reasoning generator and TTL caching decorator

pub mod aggregator;
pub mod cache;
pub mod gap;
pub mod ports;
pub mod reasoning;
pub mod reference;
pub mod scoring;
pub mod service;
pub mod store;

pub use aggregator::{EnginePorts, RecommendationEngine, FALLBACK_REASONING};
pub use cache::{CacheTtls, CachedRecommendations};
pub use gap::{estimate_months, skill_priority, SkillGapAnalyzer};
pub use ports::{
    CourseCatalog, EmployeeDirectory, ProjectBoard, ReasoningGenerator, RecommendationStore,
};
pub use reasoning::{TemplateChoice, TemplateReasoning};
pub use reference::{ReferenceData, ReferenceDataError};
pub use scoring::{
    explain, CourseScorer, EmployeeSnapshot, MatchSignal, MentorScorer, ProjectScorer,
    Recommendable, ScoredCandidate, Scorer, ScoringThresholds, Selection,
};
pub use service::RecommendationService;
pub use store::{Dataset, Enrollment, InMemoryStore};
