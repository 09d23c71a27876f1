//! In-memory implementation of every engine port.

use crate::ports::{CourseCatalog, EmployeeDirectory, ProjectBoard, RecommendationStore};
use anyhow::{Context, Result};
use async_trait::async_trait;
use careerpath_domain::{
    by_rank, Course, CourseId, EmployeeId, EmployeeProfile, EngineError, ProjectCandidate,
    Recommendation, RecommendationId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// One course enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub employee_id: EmployeeId,
    pub course_id: CourseId,
}

/// Everything the engine reads and writes, as one JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub employees: Vec<EmployeeProfile>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
    pub projects: Vec<ProjectCandidate>,
    pub recommendations: Vec<Recommendation>,
}

impl Dataset {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("failed to parse dataset JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset: {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("invalid dataset: {}", path.display()))
    }

    /// Writes the dataset as pretty JSON, replacing `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).context("failed to serialize dataset")?;
        fs::write(path, text)
            .with_context(|| format!("failed to write dataset: {}", path.display()))
    }

    fn employee(&self, id: EmployeeId) -> Option<&EmployeeProfile> {
        self.employees.iter().find(|e| e.id == id)
    }

    fn next_recommendation_id(&self) -> RecommendationId {
        let max = self
            .recommendations
            .iter()
            .filter_map(|r| r.id)
            .map(|id| id.0)
            .max()
            .unwrap_or(0);
        RecommendationId(max + 1)
    }
}

/// Store for tests and one-shot CLI runs.
#[derive(Clone)]
pub struct InMemoryStore {
    inner: Arc<Mutex<Dataset>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(Dataset::default())
    }
}

impl InMemoryStore {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            inner: Arc::new(Mutex::new(dataset)),
        }
    }

    /// A copy of the current contents, including saved recommendations.
    pub async fn dataset(&self) -> Dataset {
        self.inner.lock().await.clone()
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryStore {
    async fn employee_with_skills(&self, id: EmployeeId) -> Result<Option<EmployeeProfile>> {
        let guard = self.inner.lock().await;
        Ok(guard.employee(id).cloned())
    }

    async fn mentor_candidates(&self, employee_id: EmployeeId) -> Result<Vec<EmployeeProfile>> {
        let guard = self.inner.lock().await;
        let Some(employee) = guard.employee(employee_id) else {
            return Ok(Vec::new());
        };
        let years = employee.years_of_experience;
        Ok(guard
            .employees
            .iter()
            .filter(|e| e.id != employee_id && e.years_of_experience > years)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CourseCatalog for InMemoryStore {
    async fn all_courses(&self) -> Result<Vec<Course>> {
        Ok(self.inner.lock().await.courses.clone())
    }

    async fn enrolled_course_ids(&self, employee_id: EmployeeId) -> Result<Vec<CourseId>> {
        let guard = self.inner.lock().await;
        Ok(guard
            .enrollments
            .iter()
            .filter(|e| e.employee_id == employee_id)
            .map(|e| e.course_id)
            .collect())
    }
}

#[async_trait]
impl ProjectBoard for InMemoryStore {
    async fn available_projects(&self) -> Result<Vec<ProjectCandidate>> {
        Ok(self.inner.lock().await.projects.clone())
    }
}

#[async_trait]
impl RecommendationStore for InMemoryStore {
    async fn save(&self, mut recommendation: Recommendation) -> Result<Recommendation> {
        let mut guard = self.inner.lock().await;
        recommendation.id = Some(guard.next_recommendation_id());
        recommendation.created_date.get_or_insert_with(Utc::now);
        guard.recommendations.push(recommendation.clone());
        Ok(recommendation)
    }

    async fn load(&self, id: RecommendationId) -> Result<Option<Recommendation>> {
        let guard = self.inner.lock().await;
        Ok(guard
            .recommendations
            .iter()
            .find(|r| r.id == Some(id))
            .cloned())
    }

    async fn mark_accepted(
        &self,
        id: RecommendationId,
        now: DateTime<Utc>,
    ) -> Result<Recommendation> {
        let mut guard = self.inner.lock().await;
        let record = guard
            .recommendations
            .iter_mut()
            .find(|r| r.id == Some(id))
            .ok_or_else(|| EngineError::recommendation_not_found(id))?;
        record.mark_accepted(now);
        Ok(record.clone())
    }

    async fn for_employee(&self, employee_id: EmployeeId) -> Result<Vec<Recommendation>> {
        let guard = self.inner.lock().await;
        let mut records: Vec<Recommendation> = guard
            .recommendations
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect();
        records.sort_by(by_rank);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerpath_domain::{Confidence, Priority, RecommendationTarget, SkillLevel};
    use careerpath_test_utils::employee;

    fn rec(employee: u64, priority: u8) -> Recommendation {
        Recommendation::new(
            EmployeeId(employee),
            RecommendationTarget::Course(CourseId(1)),
            "Complete: Rust".into(),
            String::new(),
            "Because.".into(),
            Priority::new(priority),
            Confidence::new(0.8),
        )
    }

    #[tokio::test]
    async fn given_empty_store_when_saving_then_ids_are_sequential() {
        let store = InMemoryStore::default();
        let first = store.save(rec(1, 3)).await.unwrap();
        let second = store.save(rec(1, 4)).await.unwrap();

        assert_eq!(first.id, Some(RecommendationId(1)));
        assert_eq!(second.id, Some(RecommendationId(2)));
        assert!(first.created_date.is_some());
        assert_eq!(
            store.load(RecommendationId(2)).await.unwrap(),
            Some(second)
        );
    }

    #[tokio::test]
    async fn given_existing_records_when_saving_then_ids_continue_after_max() {
        let mut seeded = rec(1, 2);
        seeded.id = Some(RecommendationId(41));
        let store = InMemoryStore::new(Dataset {
            recommendations: vec![seeded],
            ..Default::default()
        });
        let saved = store.save(rec(1, 2)).await.unwrap();
        assert_eq!(saved.id, Some(RecommendationId(42)));
    }

    #[tokio::test]
    async fn given_unknown_id_when_marking_accepted_then_not_found() {
        let store = InMemoryStore::default();
        let err = store
            .mark_accepted(RecommendationId(9), Utc::now())
            .await
            .unwrap_err();
        let engine = err.downcast_ref::<EngineError>().unwrap();
        assert!(engine.is_not_found());
    }

    #[tokio::test]
    async fn given_saved_record_when_marking_accepted_then_flag_and_date_set() {
        let store = InMemoryStore::default();
        let saved = store.save(rec(1, 3)).await.unwrap();
        let now = Utc::now();
        let accepted = store.mark_accepted(saved.id.unwrap(), now).await.unwrap();
        assert!(accepted.accepted);
        assert_eq!(accepted.accepted_date, Some(now));
        let reloaded = store.load(saved.id.unwrap()).await.unwrap().unwrap();
        assert!(reloaded.accepted);
    }

    #[tokio::test]
    async fn given_mixed_employees_when_listing_then_only_theirs_in_rank_order() {
        let store = InMemoryStore::default();
        store.save(rec(1, 2)).await.unwrap();
        store.save(rec(2, 5)).await.unwrap();
        store.save(rec(1, 4)).await.unwrap();

        let listed = store.for_employee(EmployeeId(1)).await.unwrap();
        let priorities: Vec<u8> = listed.iter().map(|r| r.priority.value()).collect();
        assert_eq!(priorities, vec![4, 2]);
    }

    #[tokio::test]
    async fn given_employees_when_listing_mentors_then_only_more_experienced_others() {
        let store = InMemoryStore::new(Dataset {
            employees: vec![
                employee(1, "Developer", "Engineering", 3).build(),
                employee(2, "Senior Developer", "Engineering", 8).build(),
                employee(3, "Developer", "Engineering", 3).build(),
            ],
            ..Default::default()
        });
        let mentors = store.mentor_candidates(EmployeeId(1)).await.unwrap();
        assert_eq!(mentors.len(), 1);
        assert_eq!(mentors[0].id, EmployeeId(2));
        assert!(store
            .mentor_candidates(EmployeeId(99))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn given_saved_dataset_when_reloading_then_recommendations_survive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let store = InMemoryStore::default();
        store.save(rec(3, 4)).await.unwrap();

        store.dataset().await.save(&path).unwrap();
        let reloaded = Dataset::load(&path).unwrap();
        assert_eq!(reloaded.recommendations.len(), 1);
        assert_eq!(reloaded.recommendations[0].employee_id, EmployeeId(3));
    }

    #[test]
    fn test_dataset_parses_with_missing_sections() {
        let data = Dataset::from_json_str(
            r#"{
                "employees": [{
                    "id": 1,
                    "name": "Ari Moss",
                    "position": "Developer",
                    "department": "Engineering",
                    "years_of_experience": 3,
                    "skills": [{"skill_id": 1, "name": "C#", "category": "Programming", "level": "Intermediate"}]
                }],
                "enrollments": [{"employee_id": 1, "course_id": 4}]
            }"#,
        )
        .unwrap();
        assert_eq!(
            data.employees[0].skill_levels_by_name().get("C#"),
            Some(&SkillLevel::Intermediate)
        );
        assert_eq!(data.enrollments[0].course_id, CourseId(4));
        assert!(data.projects.is_empty());
    }
}
