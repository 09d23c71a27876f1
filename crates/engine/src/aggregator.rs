//! Runs the scorers against the candidate pools and persists the results.

use crate::gap::SkillGapAnalyzer;
use crate::ports::{
    CourseCatalog, EmployeeDirectory, ProjectBoard, ReasoningGenerator, RecommendationStore,
};
use crate::reference::ReferenceData;
use crate::scoring::{
    CourseScorer, EmployeeSnapshot, MentorScorer, ProjectScorer, Recommendable, Scorer,
    ScoringThresholds,
};
use crate::service::RecommendationService;
use crate::store::InMemoryStore;
use async_trait::async_trait;
use careerpath_domain::{
    by_rank, CandidateRef, EmployeeId, EmployeeProfile, EngineError, Recommendation,
    RecommendationId, SkillGapAnalysis,
};
use chrono::Utc;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Appended to the scorer's reason when the reasoning generator fails.
pub const FALLBACK_REASONING: &str =
    "This recommendation aligns with your career development goals.";

/// Collaborators the engine talks to.
#[derive(Clone)]
pub struct EnginePorts {
    pub directory: Arc<dyn EmployeeDirectory>,
    pub courses: Arc<dyn CourseCatalog>,
    pub projects: Arc<dyn ProjectBoard>,
    pub reasoning: Arc<dyn ReasoningGenerator>,
    pub store: Arc<dyn RecommendationStore>,
}

impl EnginePorts {
    /// Every data port served by one in-memory store.
    pub fn in_memory(store: InMemoryStore, reasoning: Arc<dyn ReasoningGenerator>) -> Self {
        let store = Arc::new(store);
        Self {
            directory: store.clone(),
            courses: store.clone(),
            projects: store.clone(),
            reasoning,
            store,
        }
    }
}

/// Default [`RecommendationService`] implementation.
pub struct RecommendationEngine {
    ports: EnginePorts,
    reference: Arc<ReferenceData>,
    thresholds: ScoringThresholds,
}

impl RecommendationEngine {
    pub fn new(ports: EnginePorts, reference: Arc<ReferenceData>) -> Self {
        Self {
            ports,
            reference,
            thresholds: ScoringThresholds::default(),
        }
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: ScoringThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    async fn load_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<EmployeeProfile, EngineError> {
        self.ports
            .directory
            .employee_with_skills(employee_id)
            .await
            .map_err(into_engine_error)?
            .ok_or_else(|| EngineError::employee_not_found(employee_id))
    }

    async fn generate_for(
        &self,
        employee: &EmployeeProfile,
        cancel: &CancellationToken,
    ) -> anyhow::Result<Vec<Recommendation>> {
        let snapshot = EmployeeSnapshot::new(employee);
        let mut out = Vec::new();

        checkpoint(cancel)?;
        let courses = self.ports.courses.all_courses().await?;
        checkpoint(cancel)?;
        let enrolled = self.ports.courses.enrolled_course_ids(employee.id).await?;
        let course_scorer =
            CourseScorer::new(&self.reference, self.thresholds.course).excluding(enrolled);
        self.persist_ranked(&course_scorer, &snapshot, &courses, cancel, &mut out)
            .await?;

        checkpoint(cancel)?;
        let mentors = self.ports.directory.mentor_candidates(employee.id).await?;
        let mentor_scorer = MentorScorer::new(&self.reference, self.thresholds.mentor);
        self.persist_ranked(&mentor_scorer, &snapshot, &mentors, cancel, &mut out)
            .await?;

        checkpoint(cancel)?;
        let projects = self.ports.projects.available_projects().await?;
        let project_scorer = ProjectScorer::new(&self.reference, self.thresholds.project);
        self.persist_ranked(&project_scorer, &snapshot, &projects, cancel, &mut out)
            .await?;

        out.sort_by(by_rank);
        Ok(out)
    }

    async fn persist_ranked<S: Scorer>(
        &self,
        scorer: &S,
        employee: &EmployeeSnapshot<'_>,
        pool: &[S::Item],
        cancel: &CancellationToken,
        out: &mut Vec<Recommendation>,
    ) -> anyhow::Result<()> {
        let ranked = scorer.rank(employee, pool);
        tracing::debug!(
            employee_id = %employee.profile.id,
            pool = pool.len(),
            selected = ranked.len(),
            "Ranked candidates"
        );

        for candidate in ranked {
            let item = candidate.item;
            let priority = scorer.priority(employee, &candidate);
            let confidence = scorer.confidence(candidate.score);
            let reason = candidate.reason(S::FALLBACK_REASON);
            let generated = self
                .reasoning_for(employee.profile, item.as_candidate(), cancel)
                .await;

            checkpoint(cancel)?;
            let recommendation = Recommendation::new(
                employee.profile.id,
                item.target(),
                item.title(),
                item.description(),
                format!("{reason} {generated}"),
                priority,
                confidence,
            );
            out.push(self.ports.store.save(recommendation).await?);
        }
        Ok(())
    }

    async fn reasoning_for(
        &self,
        employee: &EmployeeProfile,
        candidate: CandidateRef<'_>,
        cancel: &CancellationToken,
    ) -> String {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::warn!(
                    kind = candidate.label(),
                    "Reasoning cancelled; using fallback"
                );
                FALLBACK_REASONING.to_string()
            }
            result = self.ports.reasoning.reasoning(employee, candidate) => match result {
                Ok(text) => text,
                Err(err) => {
                    tracing::warn!(
                        kind = candidate.label(),
                        error = %err,
                        "Reasoning generator failed; using fallback"
                    );
                    FALLBACK_REASONING.to_string()
                }
            }
        }
    }
}

fn checkpoint(cancel: &CancellationToken) -> Result<(), EngineError> {
    if cancel.is_cancelled() {
        Err(EngineError::Cancelled)
    } else {
        Ok(())
    }
}

/// Keeps typed engine errors raised by ports; anything else is a repository failure.
fn into_engine_error(err: anyhow::Error) -> EngineError {
    match err.downcast::<EngineError>() {
        Ok(engine) => engine,
        Err(other) => EngineError::Repository(format!("{other:#}")),
    }
}

#[async_trait]
impl RecommendationService for RecommendationEngine {
    async fn generate_recommendations(
        &self,
        employee_id: EmployeeId,
        cancel: &CancellationToken,
    ) -> Result<Vec<Recommendation>, EngineError> {
        checkpoint(cancel)?;
        let employee = self.load_employee(employee_id).await?;

        match self.generate_for(&employee, cancel).await {
            Ok(recommendations) => {
                tracing::info!(
                    employee_id = %employee_id,
                    count = recommendations.len(),
                    "Generated recommendations"
                );
                Ok(recommendations)
            }
            Err(err) => match into_engine_error(err) {
                EngineError::Cancelled => {
                    tracing::info!(employee_id = %employee_id, "Recommendation run cancelled");
                    Err(EngineError::Cancelled)
                }
                other => {
                    tracing::error!(
                        employee_id = %employee_id,
                        error = %other,
                        "Recommendation generation failed"
                    );
                    Ok(Vec::new())
                }
            },
        }
    }

    async fn accept_recommendation(
        &self,
        id: RecommendationId,
    ) -> Result<Recommendation, EngineError> {
        let store = &self.ports.store;
        if store.load(id).await.map_err(into_engine_error)?.is_none() {
            return Err(EngineError::recommendation_not_found(id));
        }
        let accepted = store
            .mark_accepted(id, Utc::now())
            .await
            .map_err(into_engine_error)?;
        tracing::info!(
            recommendation_id = %id,
            employee_id = %accepted.employee_id,
            "Recommendation accepted"
        );
        Ok(accepted)
    }

    async fn employee_recommendations(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<Recommendation>, EngineError> {
        self.ports
            .store
            .for_employee(employee_id)
            .await
            .map_err(into_engine_error)
    }

    async fn analyze_skill_gaps(
        &self,
        employee_id: EmployeeId,
        target_position: &str,
    ) -> Result<SkillGapAnalysis, EngineError> {
        let employee = self.load_employee(employee_id).await?;
        let analysis = SkillGapAnalyzer::new(&self.reference).analyze(&employee, target_position);
        tracing::info!(
            employee_id = %employee_id,
            target = target_position,
            missing = analysis.missing_skills.len(),
            improve = analysis.skills_to_improve.len(),
            "Analyzed skill gaps"
        );
        Ok(analysis)
    }
}
