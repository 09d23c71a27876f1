//! The operations exposed to callers (web handlers, the CLI).

use async_trait::async_trait;
use careerpath_domain::{
    EmployeeId, EngineError, Recommendation, RecommendationId, SkillGapAnalysis,
};
use tokio_util::sync::CancellationToken;

#[async_trait]
pub trait RecommendationService: Send + Sync {
    /// Scores every candidate pool for the employee, persists the survivors
    /// and returns them ranked by priority, then confidence.
    ///
    /// Fails with [`EngineError::NotFound`] for unknown employees and
    /// [`EngineError::Cancelled`] when `cancel` fires; records saved before
    /// cancellation stay saved.
    async fn generate_recommendations(
        &self,
        employee_id: EmployeeId,
        cancel: &CancellationToken,
    ) -> Result<Vec<Recommendation>, EngineError>;

    async fn accept_recommendation(
        &self,
        id: RecommendationId,
    ) -> Result<Recommendation, EngineError>;

    /// Stored recommendations for the employee, ranked.
    async fn employee_recommendations(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<Recommendation>, EngineError>;

    async fn analyze_skill_gaps(
        &self,
        employee_id: EmployeeId,
        target_position: &str,
    ) -> Result<SkillGapAnalysis, EngineError>;
}
