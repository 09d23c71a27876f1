//! Persisted recommendation records.

use crate::ids::{CourseId, EmployeeId, ProjectId, RecommendationId};
use crate::types::{Confidence, Priority};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of action a recommendation proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationKind {
    Course,
    Mentor,
    Project,
    Certification,
    SkillDevelopment,
}

/// The catalog item a recommendation refers to.
///
/// Exactly one reference exists for course, mentor and project recommendations;
/// certification and skill-development recommendations carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id")]
pub enum RecommendationTarget {
    Course(CourseId),
    Mentor(EmployeeId),
    Project(ProjectId),
    None,
}

impl RecommendationTarget {
    /// The recommendation kind this reference implies, if any.
    pub fn kind(&self) -> Option<RecommendationKind> {
        match self {
            Self::Course(_) => Some(RecommendationKind::Course),
            Self::Mentor(_) => Some(RecommendationKind::Mentor),
            Self::Project(_) => Some(RecommendationKind::Project),
            Self::None => None,
        }
    }

    pub fn course_id(&self) -> Option<CourseId> {
        match self {
            Self::Course(id) => Some(*id),
            _ => None,
        }
    }

    pub fn mentor_employee_id(&self) -> Option<EmployeeId> {
        match self {
            Self::Mentor(id) => Some(*id),
            _ => None,
        }
    }

    pub fn project_id(&self) -> Option<ProjectId> {
        match self {
            Self::Project(id) => Some(*id),
            _ => None,
        }
    }
}

/// A ranked suggestion for one employee.
///
/// `id` and `created_date` are assigned by the store on save. Only
/// [`Recommendation::mark_accepted`] mutates a saved record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: Option<RecommendationId>,
    pub employee_id: EmployeeId,
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub reasoning: String,
    pub priority: Priority,
    pub confidence_score: Confidence,
    pub created_date: Option<DateTime<Utc>>,
    pub accepted: bool,
    pub accepted_date: Option<DateTime<Utc>>,
    pub target: RecommendationTarget,
}

impl Recommendation {
    /// A fresh, unsaved and unaccepted recommendation. The kind follows the target.
    pub fn new(
        employee_id: EmployeeId,
        target: RecommendationTarget,
        title: String,
        description: String,
        reasoning: String,
        priority: Priority,
        confidence_score: Confidence,
    ) -> Self {
        Self {
            id: None,
            employee_id,
            kind: target.kind().unwrap_or(RecommendationKind::SkillDevelopment),
            title,
            description,
            reasoning,
            priority,
            confidence_score,
            created_date: None,
            accepted: false,
            accepted_date: None,
            target,
        }
    }

    pub fn mark_accepted(&mut self, now: DateTime<Utc>) {
        self.accepted = true;
        self.accepted_date = Some(now);
    }
}

/// Orders recommendations by priority desc, then confidence desc.
pub fn by_rank(a: &Recommendation, b: &Recommendation) -> std::cmp::Ordering {
    b.priority.cmp(&a.priority).then_with(|| {
        b.confidence_score
            .value()
            .total_cmp(&a.confidence_score.value())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(priority: u8, confidence: f64) -> Recommendation {
        Recommendation::new(
            EmployeeId(1),
            RecommendationTarget::Course(CourseId(2)),
            "Complete: Rust".to_string(),
            String::new(),
            String::new(),
            Priority::new(priority),
            Confidence::new(confidence),
        )
    }

    #[test]
    fn test_kind_follows_target() {
        let r = rec(3, 0.7);
        assert_eq!(r.kind, RecommendationKind::Course);
        assert_eq!(r.target.course_id(), Some(CourseId(2)));
        assert_eq!(r.target.project_id(), None);
        assert!(!r.accepted);
    }

    #[test]
    fn test_mark_accepted_sets_date() {
        let mut r = rec(3, 0.7);
        let now = Utc::now();
        r.mark_accepted(now);
        assert!(r.accepted);
        assert_eq!(r.accepted_date, Some(now));
    }

    #[test]
    fn test_rank_ordering() {
        let mut list = vec![rec(3, 0.9), rec(5, 0.7), rec(5, 0.8), rec(4, 0.99)];
        list.sort_by(by_rank);
        let keys: Vec<(u8, f64)> = list
            .iter()
            .map(|r| (r.priority.value(), r.confidence_score.value()))
            .collect();
        assert_eq!(keys, vec![(5, 0.8), (5, 0.7), (4, 0.99), (3, 0.9)]);
    }

    #[test]
    fn test_target_serde_shape() {
        let json = serde_json::to_string(&RecommendationTarget::Mentor(EmployeeId(9))).unwrap();
        assert_eq!(json, r#"{"type":"Mentor","id":9}"#);
    }
}
